pub mod app;
pub mod navigator;

pub use app::{App, State};
pub use navigator::{DirectoryLevel, NavWindow, Navigator};
