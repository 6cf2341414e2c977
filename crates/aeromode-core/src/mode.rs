//! The AeroSpace binding mode shown by the widget.
//!
//! The tracker command prints the current mode token to stdout;
//! [`Mode::from_output`] turns that raw text into a [`Mode`]. The four
//! AeroSpace modes get dedicated variants so the stylesheet can map each
//! one to a color pair; anything else lands in [`Mode::Other`] and is
//! displayed with base styling only.

/// Base class shared by every rendered fragment. The stylesheet scopes
/// all of its rules to this class.
pub const BASE_CLASS: &str = "aerospace-mode";

/// A single AeroSpace binding mode.
///
/// The enumeration is closed over the four modes the stylesheet knows
/// about. Unrecognized tokens are carried verbatim in [`Mode::Other`]
/// rather than rejected: the widget displays them upper-cased with no
/// mode-specific color, and whether that ever happens is up to the
/// tracker script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Default binding mode (dark pill, light text).
    Main,
    /// Media-key passthrough mode (green pill).
    Media,
    /// Window resize mode (yellow pill).
    Resize,
    /// Service/management mode (orange pill).
    Service,
    /// Any other token, kept exactly as the tracker printed it
    /// (post-trim). Rendered with base styling only.
    Other(String),
}

impl Mode {
    /// The four modes with a dedicated color rule in the stylesheet.
    pub const KNOWN: [Mode; 4] = [Mode::Main, Mode::Media, Mode::Resize, Mode::Service];

    /// Derives the mode from raw tracker output.
    ///
    /// Absent or empty output defaults to [`Mode::Main`]. Anything else
    /// is trimmed and matched exactly against the known tokens; no case
    /// folding or character validation happens, so `"MAIN"` ends up as
    /// `Other("MAIN")` and whitespace-only output as `Other("")`.
    pub fn from_output(output: Option<&str>) -> Self {
        match output {
            None | Some("") => Self::Main,
            Some(raw) => Self::from_token(raw.trim()),
        }
    }

    /// Matches a trimmed token against the known modes (exact,
    /// case-sensitive). Everything else becomes [`Mode::Other`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "main" => Self::Main,
            "media" => Self::Media,
            "resize" => Self::Resize,
            "service" => Self::Service,
            other => Self::Other(other.to_string()),
        }
    }

    /// The lowercase token used as the style-class suffix.
    pub fn token(&self) -> &str {
        match self {
            Self::Main => "main",
            Self::Media => "media",
            Self::Resize => "resize",
            Self::Service => "service",
            Self::Other(token) => token,
        }
    }

    /// The visible pill text: the token converted to upper case.
    pub fn label(&self) -> String {
        self.token().to_uppercase()
    }

    /// The full class attribute: the base class plus the token,
    /// e.g. `"aerospace-mode media"`.
    pub fn class(&self) -> String {
        format!("{BASE_CLASS} {}", self.token())
    }
}
