use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BinError, Result};
use crate::platform::EmptyFlags;

/// Persisted user preferences.
///
/// Loaded once at startup and written back through [`Settings::save`] on
/// every toggle. Unknown or missing fields fall back to their defaults, so
/// the file survives version changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether a double click on the tray icon empties the bin.
    pub empty_on_double_click: bool,
    /// Whether the app registers itself to start at login.
    pub start_at_boot: bool,
    /// Behavior flags passed to the OS when emptying the bin.
    pub empty_flags: EmptyFlags,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            empty_on_double_click: true,
            start_at_boot: false,
            empty_flags: EmptyFlags::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the settings, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Default per-user settings location.
pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("quickbin").join("settings.json"))
        .ok_or_else(|| BinError::Config("no per-user config directory on this platform".to_string()))
}
