//! randplot crate root: re-exports and module wiring.
//!
//! A small egui/eframe demo: one window with a static plot and a
//! "Generate Data" button that prints freshly generated random integers,
//! plus an optional periodically redrawn random plot.
//!
//! - `data`: random sample generation and the cooperative recurring timer
//! - `canvas`: drawing surface with pluggable content strategies
//! - `live_plot`: timer-driven random plot
//! - `events`: FIFO dispatcher queue and observer controller
//! - `sink`: destinations for generated batches
//! - `config` / `persistence`: window configuration and its JSON form
//! - `app`: the window and the native run helper

pub mod app;
pub mod canvas;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod live_plot;
pub mod persistence;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_demo, DemoApp};
pub use canvas::{Canvas, CanvasContent, PlotCurve, RandomLine, Repaint, StaticSine};
pub use config::DemoConfig;
pub use data::source::{DataSource, SampleBatch, SampleRange, SampleRng, DEFAULT_COUNT};
pub use data::timer::{RecurringTimer, TimerState, DEFAULT_TICK_INTERVAL};
pub use error::{DemoError, Result};
pub use events::{event_queue, DemoEvent, EventController, EventKind, EventSender, Observed, UiEvent};
pub use live_plot::LivePlot;
pub use sink::{channel_batches, BatchOrigin, BatchRecord, BatchSink, ChannelSink, ConsoleSink};
