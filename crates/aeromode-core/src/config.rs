//! Widget configuration.
//!
//! Loaded from `~/.config/aeromode/config.toml`. Missing fields fall
//! back to defaults thanks to `#[serde(default)]`; a missing file means
//! the stock widget (tracker script on `$PATH`, 1000 ms refresh).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::widget::{DEFAULT_COMMAND, REFRESH_FREQUENCY_MS};

/// Refresh intervals below this would hammer the tracker script for no
/// visible benefit.
const MIN_REFRESH_MS: u64 = 100;

/// Top-level configuration for the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command line that prints the current mode token to stdout.
    /// Split on whitespace before execution, so the path may not
    /// contain spaces.
    pub command: String,
    /// Refresh interval in milliseconds, read by the host engine to
    /// schedule re-invocation.
    pub refresh_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.into(),
            refresh_ms: REFRESH_FREQUENCY_MS,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges. A blank command is restored to the
    /// default so the widget never tries to execute an empty string.
    pub fn validate(&mut self) {
        if self.command.trim().is_empty() {
            self.command = DEFAULT_COMMAND.into();
        }
        self.refresh_ms = self.refresh_ms.max(MIN_REFRESH_MS);
    }
}

/// Returns the config directory: `~/.config/aeromode/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("aeromode"))
}

/// Returns the config file path: `~/.config/aeromode/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A non-existent file silently returns defaults; an unreadable or
/// unparseable one warns on stderr first.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match try_load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Generates the commented default `config.toml` contents.
pub fn generate_template() -> String {
    format!(
        r#"# aeromode configuration
#
# command: command line that prints the current AeroSpace mode token
#          ("main", "media", "resize", "service") to stdout. Point this
#          at your tracker script; the path may not contain spaces.
# refresh_ms: how often the host engine should re-run the command, in
#             milliseconds.

command = "{DEFAULT_COMMAND}"
refresh_ms = {REFRESH_FREQUENCY_MS}
"#
    )
}
