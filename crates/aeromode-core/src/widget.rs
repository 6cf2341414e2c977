//! The widget manifest: everything a host overlay engine needs.
//!
//! Übersicht-style engines consume three exports per widget: the command
//! to run, how often to run it, and the style sheet. [`WidgetManifest`]
//! bundles those into one JSON-serializable value with the camelCase
//! field names the export contract uses.

use serde::Serialize;

use crate::config::Config;
use crate::stylesheet;

/// How often the host engine re-runs the tracker command, in
/// milliseconds.
pub const REFRESH_FREQUENCY_MS: u64 = 1000;

/// Default tracker invocation: the script resolved via `$PATH`, with
/// the fixed `get` argument. Users point `command` in `config.toml` at
/// an absolute path instead.
pub const DEFAULT_COMMAND: &str = "aerospace-mode-tracker.sh get";

/// The host-engine contract for this widget, serialized as JSON by
/// `aeromode widget`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetManifest {
    /// Command line the engine executes each refresh cycle.
    pub command: String,
    /// Refresh interval in milliseconds.
    pub refresh_frequency: u64,
    /// The full style sheet for the mode pill.
    pub class_name: String,
}

impl WidgetManifest {
    /// Builds the manifest from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            command: config.command.clone(),
            refresh_frequency: config.refresh_ms,
            class_name: stylesheet::stylesheet(),
        }
    }

    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Serializes the manifest as compact JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}
