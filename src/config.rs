//! Configuration for the demo window.

use std::time::Duration;

use crate::data::source::{SampleRange, DEFAULT_COUNT};
use crate::data::timer::DEFAULT_TICK_INTERVAL;
use crate::canvas::TICK_SAMPLE_COUNT;
use crate::events::EventController;

/// Top-level configuration for the demo window.
///
/// | Group        | Fields |
/// |--------------|--------|
/// | Window       | `title`, `figure_size`, `native_options` |
/// | Button       | `button_label`, `button_tooltip` |
/// | Data         | `initial_count`, `click_count`, `sample_range`, `seed` |
/// | Live plot    | `show_live_plot`, `tick_count`, `tick_interval` |
/// | Controllers  | `event_controller` |
#[derive(Clone)]
pub struct DemoConfig {
    // ── Window ───────────────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Size of each plot area in points (width, height).
    pub figure_size: [f32; 2],
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Button ───────────────────────────────────────────────────────────────
    pub button_label: String,
    pub button_tooltip: String,

    // ── Data ─────────────────────────────────────────────────────────────────
    /// Samples printed once while the window is built.
    pub initial_count: usize,
    /// Samples generated per button click.
    pub click_count: usize,
    /// Inclusive range every sample is drawn from.
    pub sample_range: SampleRange,
    /// Seed for reproducible output; `None` uses the thread-local generator.
    pub seed: Option<u64>,

    // ── Live plot ────────────────────────────────────────────────────────────
    /// Show the periodically redrawn random plot below the static one.
    pub show_live_plot: bool,
    /// Samples drawn per live-plot tick.
    pub tick_count: usize,
    /// Interval between live-plot ticks.
    pub tick_interval: Duration,

    // ── Programmatic controllers ─────────────────────────────────────────────
    /// Observer receiving dispatcher events.
    pub event_controller: Option<EventController>,
}

impl DemoConfig {
    /// Seed for the live plot's own generator, distinct from the click source.
    pub(crate) fn live_seed(&self) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(1))
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Random Data Plot Demo".to_string(),
            figure_size: [500.0, 400.0],
            native_options: None,

            button_label: "Generate Data".to_string(),
            button_tooltip: "This is a tool tip".to_string(),

            initial_count: DEFAULT_COUNT,
            click_count: 20,
            sample_range: SampleRange::default(),
            seed: None,

            show_live_plot: false,
            tick_count: TICK_SAMPLE_COUNT,
            tick_interval: DEFAULT_TICK_INTERVAL,

            event_controller: None,
        }
    }
}
