//! Clock-driven primitives behind auto-advance.
//!
//! Everything is polled from the frame loop with a page timestamp in
//! milliseconds, so tests drive them with plain numbers. Each primitive is
//! owned by the widget that uses it and goes away with it.

use std::time::Duration;

use tracing::trace;

use crate::state::ProgressState;

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Fill indicator that reaches 1.0 after `interval` of running time.
/// Frames only advance it while a frame is pending, between
/// [`start`](Self::start) and either [`cancel`](Self::cancel) or completion.
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    interval_ms: f64,
    start: Option<f64>,
    pending: bool,
    fill: f32,
    state: ProgressState,
}

impl ProgressAnimation {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_ms: millis(interval).max(f64::EPSILON),
            start: None,
            pending: false,
            fill: 0.0,
            state: ProgressState::Paused,
        }
    }

    /// Begin a fresh cycle from zero, replacing any cycle in progress.
    pub fn start(&mut self) {
        self.pending = true;
        self.start = None;
        self.fill = 0.0;
        self.state = ProgressState::Running;
    }

    /// Drop the pending frame. Fill and start time stay as they were.
    pub fn cancel(&mut self) {
        if std::mem::take(&mut self.pending) {
            trace!(fill = self.fill, "progress frame canceled");
            self.state = ProgressState::Paused;
        }
    }

    /// Advance with the timestamp of the current frame. Returns `true` on the
    /// frame the interval completes; the animation then stops until the next
    /// [`start`](Self::start).
    pub fn on_frame(&mut self, timestamp: f64) -> bool {
        if !self.pending {
            return false;
        }
        let start = *self.start.get_or_insert(timestamp);
        let fraction = ((timestamp - start) / self.interval_ms).clamp(0.0, 1.0);
        self.fill = fraction as f32;
        if fraction >= 1.0 {
            self.pending = false;
            self.state = ProgressState::Elapsed;
            return true;
        }
        false
    }

    pub fn fill(&self) -> f32 {
        self.fill
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Fixed-period repeating timer.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: f64,
    next_due: Option<f64>,
}

impl IntervalTimer {
    pub fn new(period: Duration, now: f64) -> Self {
        let period_ms = millis(period).max(f64::EPSILON);
        Self {
            period_ms,
            next_due: Some(now + period_ms),
        }
    }

    /// Fires at most once per call. Periods missed while frames stalled are
    /// skipped rather than replayed.
    pub fn poll(&mut self, now: f64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let mut next = due + self.period_ms;
        if next <= now {
            next = now + self.period_ms;
        }
        self.next_due = Some(next);
        true
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Single delayed callback.
#[derive(Debug, Clone, Copy)]
pub struct OneShot {
    due: f64,
    fired: bool,
}

impl OneShot {
    pub fn after(delay_ms: f64, now: f64) -> Self {
        Self {
            due: now + delay_ms.max(0.0),
            fired: false,
        }
    }

    pub fn poll(&mut self, now: f64) -> bool {
        if self.fired || now < self.due {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        !self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_completes_exactly_once_after_interval() {
        let mut progress = ProgressAnimation::new(Duration::from_millis(7000));
        progress.start();

        assert!(!progress.on_frame(1000.0));
        assert_eq!(progress.fill(), 0.0);
        assert!(!progress.on_frame(4500.0));
        assert!((progress.fill() - 0.5).abs() < 1e-6);
        assert!(progress.on_frame(8000.0));
        assert_eq!(progress.fill(), 1.0);
        assert_eq!(progress.state(), ProgressState::Elapsed);

        assert!(!progress.on_frame(9000.0));
        assert!(!progress.on_frame(20000.0));
    }

    #[test]
    fn cancel_freezes_fill_and_start_resets() {
        let mut progress = ProgressAnimation::new(Duration::from_millis(1000));
        progress.start();
        progress.on_frame(0.0);
        progress.on_frame(250.0);
        progress.cancel();
        assert_eq!(progress.state(), ProgressState::Paused);

        assert!(!progress.on_frame(5000.0));
        assert!((progress.fill() - 0.25).abs() < 1e-6);

        progress.start();
        assert_eq!(progress.fill(), 0.0);
        assert!(!progress.on_frame(5000.0));
        assert!(!progress.on_frame(5999.0));
        assert!(progress.on_frame(6000.0));
    }

    #[test]
    fn restart_mid_cycle_measures_from_the_new_start() {
        let mut progress = ProgressAnimation::new(Duration::from_millis(1000));
        progress.start();
        progress.on_frame(0.0);
        progress.on_frame(900.0);

        progress.start();
        assert!(progress.is_pending());
        assert!(!progress.on_frame(1000.0));
        assert_eq!(progress.fill(), 0.0);
        assert!(!progress.on_frame(1999.0));
        assert!(progress.on_frame(2000.0));
        assert!(!progress.is_pending());
    }

    #[test]
    fn interval_fires_each_period_and_skips_missed_ones() {
        let mut timer = IntervalTimer::new(Duration::from_millis(6000), 0.0);
        assert!(!timer.poll(5999.0));
        assert!(timer.poll(6000.0));
        assert!(!timer.poll(6001.0));
        assert!(timer.poll(12000.0));
        // Stalled for several periods: one fire, then a full period again.
        assert!(timer.poll(40000.0));
        assert!(!timer.poll(45999.0));
        assert!(timer.poll(46000.0));

        timer.cancel();
        assert!(!timer.is_active());
        assert!(!timer.poll(100000.0));
    }

    #[test]
    fn one_shot_fires_once() {
        let mut shot = OneShot::after(100.0, 50.0);
        assert!(!shot.poll(149.0));
        assert!(shot.poll(150.0));
        assert!(!shot.poll(400.0));
        assert!(!shot.is_pending());
    }
}
