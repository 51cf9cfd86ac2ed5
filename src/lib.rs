//! QuickBin - Recycle Bin tray utility library
//!
//! A single click on the tray icon opens the Recycle Bin, a double click
//! empties it. The icon follows the OS light/dark theme.

pub mod click;
pub mod error;
pub mod platform;
pub mod settings;
pub mod theme;

#[cfg(windows)]
pub mod icon;
#[cfg(windows)]
pub mod toast;
#[cfg(windows)]
pub mod tray;

pub use click::{BinAction, ClickDisambiguator, ClickEvent};
pub use error::{BinError, Result};
pub use settings::Settings;
pub use theme::ThemeMonitor;
