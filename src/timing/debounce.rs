//! Trailing-edge debounce
//!
//! Used for settle-style triggers (ResizeObserver, user toggles) where
//! the recompute should run once after the burst stops, not during it.

/// Trailing-edge debounce gate
///
/// Every call pushes the deadline a full interval out, so the function
/// runs once, one interval after the last call of a burst. The caller
/// re-arms its timer to the returned deadline and cancels the previous
/// one.
#[derive(Clone, Debug)]
pub struct Debounce {
    interval_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            deadline: None,
        }
    }

    /// Register a call at `now`. Returns the new deadline the timer
    /// must be (re-)armed for.
    pub fn call(&mut self, now: f64) -> f64 {
        let deadline = now + self.interval_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// A timer fired at `now`. Returns whether the debounced function
    /// should run; a timer armed before a later call is stale and is
    /// ignored.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending execution.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_quiet_interval() {
        let mut debounce = Debounce::new(60.0);
        let deadline = debounce.call(1000.0);
        assert_eq!(deadline, 1060.0);
        assert!(debounce.fire(1060.0));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_burst_collapses_to_last_call() {
        let mut debounce = Debounce::new(60.0);
        debounce.call(1000.0);
        debounce.call(1030.0);
        let last = debounce.call(1055.0);
        assert_eq!(last, 1115.0);

        // A timer armed for the first call is stale by now.
        assert!(!debounce.fire(1060.0));
        assert!(debounce.fire(1115.0));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debounce = Debounce::new(60.0);
        debounce.call(1000.0);
        debounce.cancel();
        assert!(!debounce.fire(1060.0));
    }

    #[test]
    fn test_fire_without_call_is_noop() {
        let mut debounce = Debounce::new(60.0);
        assert!(!debounce.fire(1000.0));
    }
}
