pub mod config;
pub mod mode;
pub mod palette;
pub mod render;
pub mod stylesheet;
pub mod widget;

pub use config::Config;
pub use mode::{BASE_CLASS, Mode};
pub use palette::ModeColors;
pub use render::{Fragment, render};
pub use stylesheet::stylesheet;
pub use widget::{DEFAULT_COMMAND, REFRESH_FREQUENCY_MS, WidgetManifest};
