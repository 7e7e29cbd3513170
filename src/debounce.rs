//! Input debouncing at the UI boundary.
//!
//! High-frequency input (filter keystrokes, resize storms) marks the
//! debouncer; the event loop asks `fire()` each tick and runs the expensive
//! follow-up only once the input has been quiet for the configured delay.
//! Derivation itself is never debounced.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    /// Debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Record an input event, restarting the quiet period.
    pub fn mark(&mut self) {
        self.pending_since = Some(Instant::now());
    }

    /// Whether an input is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Returns true once per mark, after the quiet period has elapsed.
    pub fn fire(&mut self) -> bool {
        match self.pending_since {
            Some(since) if since.elapsed() >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending input without firing.
    pub fn cancel(&mut self) {
        self.pending_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_fires_once_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1));
        assert!(!debouncer.fire());

        debouncer.mark();
        sleep(Duration::from_millis(3));
        assert!(debouncer.fire());
        assert!(!debouncer.fire());
    }

    #[test]
    fn test_mark_restarts_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.mark();
        assert!(!debouncer.fire());
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_cancel_drops_pending_input() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1));
        debouncer.mark();
        debouncer.cancel();
        sleep(Duration::from_millis(3));
        assert!(!debouncer.fire());
    }
}
