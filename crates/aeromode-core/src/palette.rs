//! SpaceDuck-derived color pairs for each binding mode.
//!
//! Provides the [`ModeColors`] descriptor and the explicit mapping from
//! [`Mode`] variant to color pair. [`Mode::Other`] has no entry: the
//! fragment still renders, but only the base style block applies.

use crate::mode::Mode;

/// Background/text color pair for one mode pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeColors {
    /// Pill background color (hex, e.g. "#1b1c36").
    pub background: &'static str,
    /// Pill text color (hex, e.g. "#ecf0c1").
    pub text: &'static str,
}

// -- SpaceDuck theme values ------------------------------------------

/// SpaceDuck dark purple, the `main` pill background.
const DARK_PURPLE: &str = "#1b1c36";
/// SpaceDuck foreground cream, the `main` pill text.
const CREAM: &str = "#ecf0c1";
/// SpaceDuck near-black background, text color on bright pills.
const INK: &str = "#0f111b";
/// Green for the `media` pill.
const GREEN: &str = "#1db954";
/// SpaceDuck yellow, the `resize` pill.
const YELLOW: &str = "#f2ce00";
/// SpaceDuck red-orange, the `service` pill.
const ORANGE: &str = "#e33400";

/// Returns the color pair for the given mode, or `None` for
/// [`Mode::Other`] (base styling only — the observed fallback for
/// unrecognized tokens).
pub fn mode_colors(mode: &Mode) -> Option<ModeColors> {
    match mode {
        Mode::Main => Some(ModeColors {
            background: DARK_PURPLE,
            text: CREAM,
        }),
        Mode::Media => Some(ModeColors {
            background: GREEN,
            text: INK,
        }),
        Mode::Resize => Some(ModeColors {
            background: YELLOW,
            text: INK,
        }),
        Mode::Service => Some(ModeColors {
            background: ORANGE,
            text: INK,
        }),
        Mode::Other(_) => None,
    }
}
