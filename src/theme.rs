use tracing::warn;

use crate::error::Result;

/// Edge-detecting monitor over the OS light/dark theme setting.
///
/// Holds the last observed value and reports a change only on a genuine
/// flip. The monitor does no scheduling of its own; the event loop calls
/// [`poll_once`] on its poll interval. Generic over the source closure so
/// tests can inject readings.
///
/// [`poll_once`]: ThemeMonitor::poll_once
pub struct ThemeMonitor<S: FnMut() -> Result<bool>> {
    source: S,
    last: bool,
    source_warned: bool,
}

impl<S: FnMut() -> Result<bool>> ThemeMonitor<S> {
    /// Create a monitor, taking the initial reading from the source.
    ///
    /// Falls back to the light theme when the source cannot be read.
    pub fn new(mut source: S) -> Self {
        let last = match source() {
            Ok(value) => value,
            Err(e) => {
                warn!("could not read the OS theme, assuming light: {e}");
                true
            }
        };
        Self {
            source,
            last,
            source_warned: false,
        }
    }

    /// The last observed theme (`true` = light).
    pub fn current(&self) -> bool {
        self.last
    }

    /// Read the source once; `Some(new)` only when the value flipped.
    ///
    /// A failing source keeps the last value and returns `None`. The failure
    /// is logged once, not on every poll tick.
    pub fn poll_once(&mut self) -> Option<bool> {
        let value = match (self.source)() {
            Ok(value) => {
                self.source_warned = false;
                value
            }
            Err(e) => {
                if !self.source_warned {
                    warn!("theme poll failed, keeping the last value: {e}");
                    self.source_warned = true;
                }
                return None;
            }
        };

        if value != self.last {
            self.last = value;
            Some(value)
        } else {
            None
        }
    }
}
