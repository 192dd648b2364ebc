//! The demo window.
//!
//! [`DemoApp`] composes the static sine canvas, the "Generate Data" button, a
//! [`DataSource`] and an optional [`LivePlot`]. All reactions happen in
//! [`DemoApp::process_events`], which drains the FIFO event queue on the UI
//! thread so no two handlers ever run concurrently.

use std::time::Instant;

use eframe::egui;

use crate::canvas::{Canvas, Repaint};
use crate::config::DemoConfig;
use crate::data::source::{DataSource, SampleBatch};
use crate::error::Result;
use crate::events::{event_queue, DemoEvent, EventController, EventQueue, EventSender, UiEvent};
use crate::live_plot::LivePlot;
use crate::sink::{BatchOrigin, BatchSink, ConsoleSink};

pub mod run;

pub use run::run_demo;

pub struct DemoApp {
    title: String,
    button_label: String,
    button_tooltip: String,
    figure_size: [f32; 2],
    click_count: usize,

    data_source: DataSource,
    static_canvas: Canvas,
    live_plot: Option<LivePlot>,

    sink: Box<dyn BatchSink>,
    events_tx: EventSender,
    events: EventQueue,
    event_ctrl: Option<EventController>,
}

impl DemoApp {
    /// Build the window state, printing the startup batch to stdout.
    pub fn new(cfg: &DemoConfig) -> Result<Self> {
        Self::with_sink(cfg, ConsoleSink::stdout())
    }

    /// Build the window state with a custom output sink.
    ///
    /// One batch of `cfg.initial_count` samples is published right away. If
    /// `cfg.show_live_plot` is set, the live plot's timer is armed here.
    pub fn with_sink(cfg: &DemoConfig, sink: impl BatchSink + 'static) -> Result<Self> {
        let mut data_source = DataSource::from_seed(cfg.seed).with_range(cfg.sample_range);

        let live_plot = if cfg.show_live_plot {
            let source = DataSource::from_seed(cfg.live_seed()).with_range(cfg.sample_range);
            Some(LivePlot::with_interval(
                source,
                cfg.tick_interval,
                cfg.tick_count,
                Instant::now(),
            )?)
        } else {
            None
        };

        let mut sink: Box<dyn BatchSink> = Box::new(sink);
        let startup = data_source.provide_data(cfg.initial_count);
        sink.publish(BatchOrigin::Startup, &startup);

        let (events_tx, events) = event_queue();
        let app = Self {
            title: cfg.title.clone(),
            button_label: cfg.button_label.clone(),
            button_tooltip: cfg.button_tooltip.clone(),
            figure_size: cfg.figure_size,
            click_count: cfg.click_count,
            data_source,
            static_canvas: Canvas::static_sine("static_plot"),
            live_plot,
            sink,
            events_tx,
            events,
            event_ctrl: cfg.event_controller.clone(),
        };
        app.emit(DemoEvent::BatchGenerated {
            origin: BatchOrigin::Startup,
            batch: startup,
        });
        if app.live_plot.is_some() {
            app.emit(DemoEvent::TimerStarted);
        }
        tracing::info!(live_plot = cfg.show_live_plot, "demo window constructed");
        Ok(app)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn static_canvas(&self) -> &Canvas {
        &self.static_canvas
    }

    pub fn live_plot(&self) -> Option<&LivePlot> {
        self.live_plot.as_ref()
    }

    /// A handle for posting events from outside the widget tree.
    pub fn event_sender(&self) -> EventSender {
        self.events_tx.clone()
    }

    /// Queue an event for the next [`process_events`](Self::process_events).
    pub fn post(&self, event: UiEvent) {
        self.events_tx.post(event);
    }

    /// Queue one `Tick` per live-plot tick due at `now`.
    pub fn poll_timers(&mut self, now: Instant) -> u32 {
        let Some(live) = self.live_plot.as_mut() else {
            return 0;
        };
        let due = live.poll(now);
        for _ in 0..due {
            self.events_tx.post(UiEvent::Tick);
        }
        due
    }

    /// Drain the event queue in FIFO order, one handler per event.
    ///
    /// Returns the number of events handled.
    pub fn process_events(&mut self, repaint: &dyn Repaint) -> usize {
        let mut handled = 0;
        while let Some(event) = self.events.try_next() {
            self.handle_event(event, repaint);
            handled += 1;
        }
        handled
    }

    fn handle_event(&mut self, event: UiEvent, repaint: &dyn Repaint) {
        match event {
            UiEvent::GenerateClicked => {
                self.on_click();
            }
            UiEvent::Tick => {
                let Some(live) = self.live_plot.as_mut() else {
                    tracing::debug!("tick without a live plot ignored");
                    return;
                };
                let Some(batch) = live.tick(repaint).cloned() else {
                    return;
                };
                let tick = live.ticks();
                self.emit(DemoEvent::Ticked { tick, batch });
            }
        }
    }

    /// Button handler: generate `click_count` samples and forward them to the sink.
    pub fn on_click(&mut self) -> SampleBatch {
        let batch = self.data_source.provide_data(self.click_count);
        tracing::debug!(count = batch.len(), "generate clicked");
        self.sink.publish(BatchOrigin::Click, &batch);
        self.emit(DemoEvent::BatchGenerated {
            origin: BatchOrigin::Click,
            batch: batch.clone(),
        });
        batch
    }

    /// Stop the live plot's timer if there is one.
    ///
    /// Without a live plot this is a logged no-op. Returns whether a running
    /// timer was stopped.
    pub fn shutdown(&mut self) -> bool {
        let Some(live) = self.live_plot.as_mut() else {
            tracing::debug!("no live plot timer to stop");
            return false;
        };
        let stopped = live.stop();
        if stopped {
            self.emit(DemoEvent::TimerStopped);
        }
        stopped
    }

    /// Render the window contents: plots stacked vertically, button below.
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                let height = self.figure_size[1];
                self.static_canvas.show(ui, height);
                if let Some(live) = &self.live_plot {
                    live.show(ui, height);
                }
                ui.add_space(4.0);
                let clicked = ui
                    .button(self.button_label.as_str())
                    .on_hover_text(self.button_tooltip.as_str())
                    .clicked();
                if clicked {
                    self.events_tx.post(UiEvent::GenerateClicked);
                }
            });
        });
    }

    /// One frame at `now`: queue due ticks, render, dispatch the queue, then
    /// schedule the next repaint while the live plot is running.
    pub fn frame(&mut self, ctx: &egui::Context, now: Instant) {
        self.poll_timers(now);
        self.ui(ctx);
        self.process_events(ctx);

        if let Some(wait) = self.live_plot.as_ref().and_then(|l| l.time_until_next(now)) {
            ctx.request_repaint_after(wait);
        }
    }

    fn emit(&self, event: DemoEvent) {
        if let Some(ctrl) = &self.event_ctrl {
            ctrl.emit(event);
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx, Instant::now());
    }
}

impl Drop for DemoApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
