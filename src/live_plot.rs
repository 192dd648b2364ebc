//! Periodically redrawn random plot.
//!
//! A [`LivePlot`] is a [`Canvas`] with [`RandomLine`] content plus its own
//! [`RecurringTimer`]. The timer is armed on construction; each dispatched
//! tick draws four fresh samples and requests exactly one redraw.

use std::time::{Duration, Instant};

use crate::canvas::{Canvas, RandomLine, Repaint, TICK_SAMPLE_COUNT};
use crate::data::source::{DataSource, SampleBatch};
use crate::data::timer::{RecurringTimer, TimerState};
use crate::error::Result;

pub struct LivePlot {
    canvas: Canvas,
    timer: RecurringTimer,
    ticks: u64,
}

impl LivePlot {
    /// Build with the default 100 ms interval and arm the timer at `now`.
    pub fn new(source: DataSource, now: Instant) -> Self {
        let mut timer = RecurringTimer::default();
        timer.start(now);
        Self::from_parts(source, TICK_SAMPLE_COUNT, timer)
    }

    /// Build with a custom interval and samples per tick, armed at `now`.
    pub fn with_interval(
        source: DataSource,
        interval: Duration,
        samples_per_tick: usize,
        now: Instant,
    ) -> Result<Self> {
        let mut timer = RecurringTimer::new(interval)?;
        timer.start(now);
        Ok(Self::from_parts(source, samples_per_tick, timer))
    }

    fn from_parts(source: DataSource, samples_per_tick: usize, timer: RecurringTimer) -> Self {
        let content = RandomLine::with_count(source, samples_per_tick);
        Self {
            canvas: Canvas::new("live_plot", Box::new(content)),
            timer,
            ticks: 0,
        }
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn timer(&self) -> &RecurringTimer {
        &self.timer
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Ticks handled so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_batch(&self) -> Option<&SampleBatch> {
        self.canvas.last_batch()
    }

    /// How many ticks are due at `now`. The caller dispatches one
    /// [`tick`](Self::tick) per count.
    pub fn poll(&mut self, now: Instant) -> u32 {
        self.timer.poll(now)
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    /// Handle one tick: regenerate, replace the curve, request one redraw.
    ///
    /// Ticks arriving after [`stop`](Self::stop) (for example ones already
    /// queued) are dropped and return `None`.
    pub fn tick(&mut self, repaint: &dyn Repaint) -> Option<&SampleBatch> {
        if !self.timer.is_running() {
            tracing::debug!(state = ?self.timer.state(), "tick dropped; live plot not running");
            return None;
        }
        if !self.canvas.tick(repaint) {
            return None;
        }
        self.ticks += 1;
        let batch = self.canvas.last_batch();
        tracing::trace!(tick = self.ticks, batch = ?batch.map(|b| b.values()), "live plot redrawn");
        batch
    }

    /// Stop the timer. Safe to call in any state; returns whether it was running.
    pub fn stop(&mut self) -> bool {
        self.timer.stop()
    }

    pub fn show(&self, ui: &mut egui::Ui, height: f32) -> egui::Response {
        self.canvas.show(ui, height)
    }
}
