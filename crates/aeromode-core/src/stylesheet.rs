//! Stylesheet generation for the mode pill.
//!
//! One base rule block scoped to `.aerospace-mode` (position, font,
//! shape) followed by one color rule per known mode, generated from the
//! [`palette`](crate::palette) mapping. A token with no matching rule
//! gets the base block only.

use std::fmt::Write;

use crate::mode::{BASE_CLASS, Mode};
use crate::palette;

/// Shared rules for every mode pill: pinned near the top center of the
/// screen, monospace, bold, rounded.
const BASE_RULES: &str = "\
  .aerospace-mode {
    position: fixed;
    top: 6px;
    left: 50%;
    transform: translateX(-200px);
    z-index: 9999;
    font-family: 'FiraCode Nerd Font', 'JetBrains Mono', Monaco, Menlo, monospace;
    font-size: 11px;
    font-weight: bold;
    text-transform: uppercase;
    min-width: 60px;
    text-align: center;
    border-radius: 20px;
    padding: 6px 14px;
    margin: 0 4px;
    transition: all 0.2s ease;
  }
";

/// Builds the full stylesheet: the base block plus a
/// `.aerospace-mode.<token>` color rule for each known mode.
pub fn stylesheet() -> String {
    let mut css = String::from(BASE_RULES);
    for mode in Mode::KNOWN {
        // KNOWN modes always have a color entry.
        let Some(colors) = palette::mode_colors(&mode) else {
            continue;
        };
        let _ = write!(
            css,
            "\n  .{BASE_CLASS}.{} {{\n    background-color: {};\n    color: {};\n  }}\n",
            mode.token(),
            colors.background,
            colors.text,
        );
    }
    css
}
