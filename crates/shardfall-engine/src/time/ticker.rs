use std::time::{Duration, Instant};

/// Fixed-rate tick source.
///
/// The host polls `due(now)` from its frame loop; the ticker reports how many
/// whole periods have elapsed since the last call. Deadlines advance by exactly
/// one period per tick, so the long-run rate matches `period` regardless of the
/// frame rate.
///
/// After a stall longer than `MAX_CATCH_UP` periods the backlog is dropped and
/// the schedule restarts from `now`.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// Most ticks a single `due` call reports.
    pub const MAX_CATCH_UP: u32 = 8;

    /// Creates a ticker whose first tick is due one period after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        debug_assert!(!period.is_zero(), "Ticker period must be non-zero");
        let period = period.max(Duration::from_micros(1));
        Self {
            period,
            next: start + period,
        }
    }

    /// Restarts the schedule: the next tick is due one period after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.period;
    }

    /// Returns the number of ticks due at `now` and advances past them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        while self.next <= now {
            if count == Self::MAX_CATCH_UP {
                log::trace!("ticker dropped backlog after {count} ticks");
                self.reset(now);
                break;
            }
            count += 1;
            self.next += self.period;
        }
        count
    }
}
