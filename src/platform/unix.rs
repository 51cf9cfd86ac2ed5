use crate::error::{BinError, Result};
use crate::platform::EmptyFlags;

/// Empty the Recycle Bin (not supported on Unix/Linux)
///
/// On Unix-like systems, there is no unified recycle bin. Each desktop
/// environment may have its own trash implementation.
pub fn empty_recycle_bin(_flags: EmptyFlags) -> Result<()> {
    Err(BinError::NotSupported(
        "the Recycle Bin is not available on Unix/Linux systems".to_string(),
    ))
}

/// Open the Recycle Bin view (not supported on Unix/Linux)
pub fn open_recycle_bin() -> Result<()> {
    Err(BinError::NotSupported(
        "the Recycle Bin is not available on Unix/Linux systems".to_string(),
    ))
}

/// Read the OS light/dark theme (not supported on Unix/Linux)
pub fn read_light_theme() -> Result<bool> {
    Err(BinError::NotSupported(
        "no OS theme source on this platform".to_string(),
    ))
}

/// Start-at-boot registration (not supported on Unix/Linux)
pub fn set_start_at_boot(_enabled: bool, _app_name: &str) -> Result<()> {
    Err(BinError::NotSupported(
        "start-at-boot registration is not available on this platform".to_string(),
    ))
}
