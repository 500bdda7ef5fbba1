use std::time::{Duration, Instant};

/// Trailing-edge debounce with drop-while-pending semantics.
///
/// The first `trigger` of a burst schedules one firing `settle` later.
/// Triggers arriving while that firing is pending are dropped, not queued,
/// so each burst yields exactly one `poll` that returns `true`.
#[derive(Debug, Clone)]
pub struct Debounce {
    settle: Duration,
    pending: Option<Instant>,
}

impl Debounce {
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            pending: None,
        }
    }

    /// Registers an event at `now`.
    ///
    /// Returns `true` if this call scheduled a firing, `false` if it was
    /// absorbed by one already pending.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(now + self.settle);
        true
    }

    /// Returns `true` exactly once when the pending firing is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_after_settle() {
        let t0 = Instant::now();
        let mut d = Debounce::new(5 * MS);
        assert!(d.trigger(t0));
        assert!(!d.poll(t0 + 4 * MS));
        assert!(d.poll(t0 + 5 * MS));
        assert!(!d.poll(t0 + 6 * MS));
        assert!(!d.is_pending());
    }

    #[test]
    fn burst_is_coalesced_into_one_firing() {
        let t0 = Instant::now();
        let mut d = Debounce::new(5 * MS);
        assert!(d.trigger(t0));
        assert!(!d.trigger(t0 + MS));
        assert!(!d.trigger(t0 + 2 * MS));

        // Dropped triggers do not push the deadline back.
        assert!(!d.poll(t0 + 4 * MS));
        assert!(d.poll(t0 + 5 * MS));
        assert!(!d.poll(t0 + 50 * MS));
    }

    #[test]
    fn new_burst_after_firing_schedules_again() {
        let t0 = Instant::now();
        let mut d = Debounce::new(MS);
        d.trigger(t0);
        assert!(d.poll(t0 + MS));

        assert!(d.trigger(t0 + 10 * MS));
        assert!(d.poll(t0 + 11 * MS));
    }
}
