//! Frame-driven scheduling of ticks and debounced resize repaints.

use std::time::{Duration, Instant};

use rand::Rng;

use shardfall_engine::canvas::Canvas;
use shardfall_engine::time::{Debounce, Ticker};

use crate::config::{RESIZE_SETTLE, TICK_PERIOD};
use crate::controller::Controller;

/// What a `run_due` call did.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Activity {
    /// The debounced resize handler ran.
    pub resized: bool,
    /// Ticks delivered to the controller (paused ticks included).
    pub ticks: u32,
}

/// Polled once per host frame.
///
/// Ordering per call: a due resize repaint runs first, then every elapsed
/// tick up to the ticker's catch-up cap.
#[derive(Debug, Clone)]
pub struct Scheduler {
    ticker: Ticker,
    resize: Debounce,
}

impl Scheduler {
    pub fn new(now: Instant) -> Self {
        Self::with_timing(TICK_PERIOD, RESIZE_SETTLE, now)
    }

    pub fn with_timing(tick_period: Duration, resize_settle: Duration, now: Instant) -> Self {
        Self {
            ticker: Ticker::new(tick_period, now),
            resize: Debounce::new(resize_settle),
        }
    }

    /// Restarts the tick schedule from `now`, e.g. once the surface first exists.
    pub fn restart(&mut self, now: Instant) {
        self.ticker.reset(now);
    }

    /// Records a raw resize. Returns `false` if one is already pending.
    pub fn request_resize(&mut self, now: Instant) -> bool {
        let scheduled = self.resize.trigger(now);
        if scheduled {
            log::debug!("resize burst started");
        }
        scheduled
    }

    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn run_due<R, C>(
        &mut self,
        now: Instant,
        controller: &mut Controller<R>,
        canvas: &mut C,
    ) -> Activity
    where
        R: Rng,
        C: Canvas + ?Sized,
    {
        let mut activity = Activity::default();

        if self.resize.poll(now) {
            controller.on_resize_settled(canvas);
            activity.resized = true;
        }

        activity.ticks = self.ticker.due(now);
        for _ in 0..activity.ticks {
            controller.tick(canvas);
        }

        activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardfall_engine::canvas::{CanvasOp, Recorder};

    use crate::bias::ColorBias;
    use crate::buffer::ShapeBuffer;
    use crate::sampler::Sampler;

    const MS: Duration = Duration::from_millis(1);

    fn controller() -> Controller {
        Controller::new(Sampler::seeded(2, ColorBias::default()), ShapeBuffer::new(200))
    }

    #[test]
    fn ticks_follow_the_period() {
        let t0 = Instant::now();
        let mut s = Scheduler::new(t0);
        let mut c = controller();
        let mut rec = Recorder::new(50, 50);

        assert_eq!(s.run_due(t0 + 5 * MS, &mut c, &mut rec).ticks, 0);
        assert_eq!(s.run_due(t0 + 16 * MS, &mut c, &mut rec).ticks, 1);
        assert_eq!(s.run_due(t0 + 33 * MS, &mut c, &mut rec).ticks, 2);
        assert_eq!(c.buffer().len(), 3);
    }

    #[test]
    fn long_stall_does_not_burst() {
        let t0 = Instant::now();
        let mut s = Scheduler::new(t0);
        let mut c = controller();
        let mut rec = Recorder::new(50, 50);

        let a = s.run_due(t0 + 5_000 * MS, &mut c, &mut rec);
        assert_eq!(a.ticks, Ticker::MAX_CATCH_UP);
        assert_eq!(c.buffer().len(), 8);
    }

    #[test]
    fn paused_controller_receives_ticks_without_painting() {
        let t0 = Instant::now();
        let mut s = Scheduler::new(t0);
        let mut c = controller();
        let mut rec = Recorder::new(50, 50);
        c.toggle();

        let a = s.run_due(t0 + 50 * MS, &mut c, &mut rec);
        assert_eq!(a.ticks, 5);
        assert!(c.buffer().is_empty());
        assert_eq!(rec.paint_count(), 0);
    }

    #[test]
    fn resize_burst_repaints_once_before_ticks() {
        let t0 = Instant::now();
        let mut s = Scheduler::with_timing(10 * MS, 3 * MS, t0);
        let mut c = controller();
        let mut rec = Recorder::new(50, 50);
        s.run_due(t0 + 20 * MS, &mut c, &mut rec);
        rec.take_ops();

        assert!(s.request_resize(t0 + 21 * MS));
        assert!(!s.request_resize(t0 + 22 * MS));
        assert!(!s.request_resize(t0 + 23 * MS));

        let a = s.run_due(t0 + 30 * MS, &mut c, &mut rec);
        assert_eq!(a, Activity { resized: true, ticks: 1 });

        // Clear, repaint of the two existing shapes, then the new tick.
        let ops = rec.take_ops();
        assert!(matches!(ops[0], CanvasOp::ClearRect(_)));
        assert_eq!(ops.iter().filter(|op| matches!(op, CanvasOp::Fill(_))).count(), 3);
        assert!(!s.resize_pending());

        let a = s.run_due(t0 + 31 * MS, &mut c, &mut rec);
        assert!(!a.resized);
    }

    #[test]
    fn resize_waits_for_settle_window() {
        let t0 = Instant::now();
        let mut s = Scheduler::with_timing(10 * MS, 5 * MS, t0);
        let mut c = controller();
        let mut rec = Recorder::new(50, 50);

        s.request_resize(t0);
        assert!(!s.run_due(t0 + 4 * MS, &mut c, &mut rec).resized);
        assert!(s.run_due(t0 + 5 * MS, &mut c, &mut rec).resized);
    }

    #[test]
    fn restart_delays_first_tick() {
        let t0 = Instant::now();
        let mut s = Scheduler::new(t0);
        let mut c = controller();
        let mut rec = Recorder::new(50, 50);

        s.restart(t0 + 500 * MS);
        assert_eq!(s.run_due(t0 + 505 * MS, &mut c, &mut rec).ticks, 0);
        assert_eq!(s.run_due(t0 + 510 * MS, &mut c, &mut rec).ticks, 1);
    }
}
