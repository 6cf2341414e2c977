//! The render step: raw tracker output in, display fragment out.
//!
//! This is the whole behavioral contract of the widget. The host engine
//! captures the tracker command's stdout and calls [`render`] with it
//! every refresh cycle; the returned [`Fragment`] is what it paints.
//! The step is pure — no I/O, no state between calls.

use serde::Serialize;

use crate::mode::Mode;

/// The rendered display fragment: one container element.
///
/// `class` is the base class plus the mode token (what the stylesheet
/// matches on); `text` is the upper-cased token (what the user sees).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Class attribute, e.g. `"aerospace-mode media"`.
    pub class: String,
    /// Visible text, e.g. `"MEDIA"`.
    pub text: String,
}

impl Fragment {
    /// Serializes the fragment as a single `<div>` element.
    ///
    /// The token is emitted verbatim; sanitizing tracker output is the
    /// tracker script's problem, not the widget's.
    pub fn to_html(&self) -> String {
        format!("<div class=\"{}\">{}</div>", self.class, self.text)
    }
}

/// Renders raw tracker output into a display fragment.
///
/// Absent or empty output falls back to the default `main` mode; a
/// failed tracker command is indistinguishable from one that printed
/// nothing. Calling this twice with the same input yields byte-identical
/// fragments.
pub fn render(output: Option<&str>) -> Fragment {
    let mode = Mode::from_output(output);
    Fragment {
        class: mode.class(),
        text: mode.label(),
    }
}
