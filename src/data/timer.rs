//! Cooperative recurring timer.
//!
//! The timer never spawns a thread. The UI loop calls [`RecurringTimer::poll`]
//! once per frame and dispatches one tick per returned count, so ticks are
//! always handled on the dispatch thread, in order, between other events.

use std::time::{Duration, Instant};

use crate::error::{DemoError, Result};

/// Default tick interval of the live plot.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Lifecycle of a [`RecurringTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created but never armed.
    Idle,
    /// Armed; ticks become due every interval.
    Running,
    /// Explicitly stopped; no tick will be reported again until restarted.
    Stopped,
}

/// A recurring interval timer driven by explicit polling.
#[derive(Debug, Clone)]
pub struct RecurringTimer {
    interval: Duration,
    state: TimerState,
    next_due: Option<Instant>,
    /// Upper bound on ticks reported by a single poll.
    max_catch_up: u32,
    fired: u64,
}

impl RecurringTimer {
    /// Create an idle timer. A zero interval is rejected.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(DemoError::invalid_argument(
                "interval",
                "timer interval must be non-zero",
            ));
        }
        Ok(Self {
            interval,
            state: TimerState::Idle,
            next_due: None,
            max_catch_up: 1,
            fired: 0,
        })
    }

    /// Allow up to `n` ticks per poll after a stall (minimum 1).
    pub fn with_max_catch_up(mut self, n: u32) -> Self {
        self.max_catch_up = n.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Total ticks reported since creation.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Arm the timer; the first tick is due one interval after `now`.
    ///
    /// Starting a running timer keeps the existing schedule. A stopped timer
    /// can be restarted.
    pub fn start(&mut self, now: Instant) {
        if self.state == TimerState::Running {
            tracing::debug!("timer already running; start ignored");
            return;
        }
        self.state = TimerState::Running;
        self.next_due = Some(now + self.interval);
        tracing::info!(interval_ms = self.interval.as_millis() as u64, "timer started");
    }

    /// Stop the timer. Returns `false` (and does nothing) if it was not running.
    ///
    /// Once this returns, [`poll`](Self::poll) reports no further ticks.
    pub fn stop(&mut self) -> bool {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Stopped;
                self.next_due = None;
                tracing::info!(fired = self.fired, "timer stopped");
                true
            }
            state => {
                tracing::debug!(?state, "stop on inactive timer ignored");
                false
            }
        }
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    ///
    /// At most `max_catch_up` ticks are reported; if more were missed the
    /// surplus is dropped and the schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due.filter(|_| self.is_running()) else {
            return 0;
        };
        if now < due {
            return 0;
        }
        let behind = now.duration_since(due).as_nanos() / self.interval.as_nanos();
        let missed = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
        let reported = missed.min(self.max_catch_up);
        self.next_due = if missed > self.max_catch_up {
            tracing::debug!(missed, reported, "timer fell behind; skipping ticks");
            Some(now + self.interval)
        } else {
            Some(due + self.interval * missed)
        };
        self.fired += u64::from(reported);
        reported
    }

    /// Time left until the next tick, if running.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for RecurringTimer {
    /// Idle timer with [`DEFAULT_TICK_INTERVAL`].
    fn default() -> Self {
        Self {
            interval: DEFAULT_TICK_INTERVAL,
            state: TimerState::Idle,
            next_due: None,
            max_catch_up: 1,
            fired: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            RecurringTimer::new(Duration::ZERO),
            Err(DemoError::InvalidArgument { name: "interval", .. })
        ));
    }

    #[test]
    fn idle_timer_never_ticks() {
        let mut t = RecurringTimer::new(100 * MS).unwrap();
        let now = Instant::now();
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.poll(now + 1000 * MS), 0);
        assert_eq!(t.time_until_next(now), None);
    }

    #[test]
    fn ticks_once_per_interval() {
        let t0 = Instant::now();
        let mut t = RecurringTimer::new(100 * MS).unwrap();
        t.start(t0);
        assert_eq!(t.poll(t0 + 50 * MS), 0);
        assert_eq!(t.poll(t0 + 100 * MS), 1);
        assert_eq!(t.poll(t0 + 150 * MS), 0);
        assert_eq!(t.poll(t0 + 210 * MS), 1);
        assert_eq!(t.time_until_next(t0 + 250 * MS), Some(50 * MS));
        assert_eq!(t.fired(), 2);
    }

    #[test]
    fn stall_is_capped_and_reanchored() {
        let t0 = Instant::now();
        let mut t = RecurringTimer::new(100 * MS).unwrap();
        t.start(t0);
        assert_eq!(t.poll(t0 + 1000 * MS), 1);
        assert_eq!(t.time_until_next(t0 + 1000 * MS), Some(100 * MS));
    }

    #[test]
    fn catch_up_reports_missed_ticks_up_to_cap() {
        let t0 = Instant::now();
        let mut t = RecurringTimer::new(100 * MS).unwrap().with_max_catch_up(5);
        t.start(t0);
        assert_eq!(t.poll(t0 + 350 * MS), 3);
        assert_eq!(t.poll(t0 + 400 * MS), 1);
    }

    #[test]
    fn stop_before_start_is_noop() {
        let mut t = RecurringTimer::new(100 * MS).unwrap();
        assert!(!t.stop());
        assert_eq!(t.state(), TimerState::Idle);
    }

    #[test]
    fn no_ticks_after_stop() {
        let t0 = Instant::now();
        let mut t = RecurringTimer::new(100 * MS).unwrap();
        t.start(t0);
        assert!(t.stop());
        assert!(!t.stop());
        assert_eq!(t.state(), TimerState::Stopped);
        assert_eq!(t.poll(t0 + 500 * MS), 0);
    }

    #[test]
    fn stopped_timer_can_restart() {
        let t0 = Instant::now();
        let mut t = RecurringTimer::new(100 * MS).unwrap();
        t.start(t0);
        t.stop();
        t.start(t0 + 500 * MS);
        assert_eq!(t.poll(t0 + 600 * MS), 1);
    }
}
