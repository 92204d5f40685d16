//! UI components

pub mod panel;
pub mod theme;

pub use panel::{ErrorScreen, LevelPane};
pub use theme::Theme;
