pub mod css;
pub mod init;
pub mod render;
pub mod widget;
