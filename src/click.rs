use std::time::{Duration, Instant};

use tracing::trace;

/// A raw activation coming from the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEvent {
    Single,
    Double,
}

/// High-level action resolved from a click sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinAction {
    /// Open the Recycle Bin view.
    Open,
    /// Empty the Recycle Bin.
    Empty,
}

/// Resolves raw single/double clicks into bin actions.
///
/// A single click arms a short deadline. If no double click lands before the
/// deadline expires, the open action fires. A double click cancels the armed
/// deadline and resolves to the empty action immediately.
///
/// The event loop owns the clock: it passes `now` into [`on_event`] and
/// [`fire_due`], and reads [`deadline`] to schedule its next wakeup. The
/// deadline is a plain value, so re-arming it replaces the previous one and
/// cancellation is just clearing it.
///
/// [`on_event`]: ClickDisambiguator::on_event
/// [`fire_due`]: ClickDisambiguator::fire_due
/// [`deadline`]: ClickDisambiguator::deadline
pub struct ClickDisambiguator {
    window: Duration,
    deadline: Option<Instant>,
    double_click_detected: bool,
}

impl ClickDisambiguator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            double_click_detected: false,
        }
    }

    /// Feed one activation into the state machine.
    ///
    /// Returns the action to dispatch right away, if any. A `Single` never
    /// dispatches directly; it arms the deadline and lets [`fire_due`] decide.
    ///
    /// [`fire_due`]: ClickDisambiguator::fire_due
    pub fn on_event(&mut self, event: ClickEvent, now: Instant) -> Option<BinAction> {
        match event {
            ClickEvent::Single => {
                // Re-arming replaces any earlier deadline, so only the newest
                // click sequence can ever fire.
                self.double_click_detected = false;
                self.deadline = Some(now + self.window);
                trace!("single click, deadline armed");
                None
            }
            ClickEvent::Double => {
                self.double_click_detected = true;
                self.deadline = None;
                trace!("double click, deadline cancelled");
                Some(BinAction::Empty)
            }
        }
    }

    /// The armed deadline, if any, for the event loop's wakeup scheduling.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the armed deadline if it has passed.
    ///
    /// Consumes the deadline; the open action fires at most once per click
    /// sequence, and not at all when the sequence resolved to a double click.
    pub fn fire_due(&mut self, now: Instant) -> Option<BinAction> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.double_click_detected {
                    None
                } else {
                    Some(BinAction::Open)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_single_click_opens_after_deadline() {
        let mut clicks = ClickDisambiguator::new(WINDOW);
        let t0 = Instant::now();

        assert_eq!(clicks.on_event(ClickEvent::Single, t0), None);
        // Not yet due inside the window.
        assert_eq!(clicks.fire_due(t0 + ms(100)), None);
        assert_eq!(clicks.fire_due(t0 + ms(200)), Some(BinAction::Open));
        // The deadline is consumed.
        assert_eq!(clicks.fire_due(t0 + ms(300)), None);
    }

    #[test]
    fn test_double_click_empties_synchronously() {
        let mut clicks = ClickDisambiguator::new(WINDOW);
        let t0 = Instant::now();

        assert_eq!(clicks.on_event(ClickEvent::Single, t0), None);
        assert_eq!(
            clicks.on_event(ClickEvent::Double, t0 + ms(50)),
            Some(BinAction::Empty)
        );
    }

    #[test]
    fn test_double_click_cancels_pending_open() {
        let mut clicks = ClickDisambiguator::new(WINDOW);
        let t0 = Instant::now();

        clicks.on_event(ClickEvent::Single, t0);
        clicks.on_event(ClickEvent::Double, t0 + ms(50));
        // Long past the original deadline, nothing may fire.
        assert_eq!(clicks.fire_due(t0 + ms(500)), None);
        assert_eq!(clicks.deadline(), None);
    }

    #[test]
    fn test_rapid_singles_keep_only_the_newest_deadline() {
        let mut clicks = ClickDisambiguator::new(WINDOW);
        let t0 = Instant::now();

        clicks.on_event(ClickEvent::Single, t0);
        clicks.on_event(ClickEvent::Single, t0 + ms(100));
        // First deadline (t0 + 200) was superseded.
        assert_eq!(clicks.fire_due(t0 + ms(250)), None);
        assert_eq!(clicks.fire_due(t0 + ms(300)), Some(BinAction::Open));
        assert_eq!(clicks.fire_due(t0 + ms(600)), None);
    }

    #[test]
    fn test_double_after_deadline_fired_still_empties() {
        let mut clicks = ClickDisambiguator::new(WINDOW);
        let t0 = Instant::now();

        clicks.on_event(ClickEvent::Single, t0);
        assert_eq!(clicks.fire_due(t0 + ms(250)), Some(BinAction::Open));
        // A late double click cannot undo the dispatched open; both fire.
        assert_eq!(
            clicks.on_event(ClickEvent::Double, t0 + ms(260)),
            Some(BinAction::Empty)
        );
    }

    #[test]
    fn test_deadline_is_exposed_for_scheduling() {
        let mut clicks = ClickDisambiguator::new(WINDOW);
        let t0 = Instant::now();

        assert_eq!(clicks.deadline(), None);
        clicks.on_event(ClickEvent::Single, t0);
        assert_eq!(clicks.deadline(), Some(t0 + WINDOW));
        clicks.on_event(ClickEvent::Double, t0 + ms(10));
        assert_eq!(clicks.deadline(), None);
    }
}
