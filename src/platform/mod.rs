use serde::{Deserialize, Serialize};

#[cfg(windows)]
pub mod windows;

#[cfg(not(windows))]
pub mod unix;

#[cfg(windows)]
pub use windows::{empty_recycle_bin, open_recycle_bin, read_light_theme, set_start_at_boot};

#[cfg(not(windows))]
pub use unix::{empty_recycle_bin, open_recycle_bin, read_light_theme, set_start_at_boot};

/// Behavior flags for emptying the Recycle Bin.
///
/// Mapped to the shell's SHERB_* bits on Windows. The defaults suppress the
/// confirmation dialog, the completion sound and the progress UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmptyFlags {
    pub no_confirmation: bool,
    pub no_sound: bool,
    pub no_progress_ui: bool,
}

impl Default for EmptyFlags {
    fn default() -> Self {
        Self {
            no_confirmation: true,
            no_sound: true,
            no_progress_ui: true,
        }
    }
}
