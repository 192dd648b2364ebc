//! Drawing surfaces.
//!
//! A [`Canvas`] hosts one `egui_plot` plot. What it shows is decided by the
//! [`CanvasContent`] strategy it holds: the initial curves, and optionally a
//! replacement set of curves on every timer tick.

use egui::Color32;
use egui_plot::{Line, Plot};

use crate::data::source::{DataSource, SampleBatch};

/// Number of samples drawn per tick by [`RandomLine`].
pub const TICK_SAMPLE_COUNT: usize = 4;

/// Something that can be asked to repaint the visual surface.
///
/// Implemented for [`egui::Context`]; tests use a counter.
pub trait Repaint {
    fn request_redraw(&self);
}

impl Repaint for egui::Context {
    fn request_redraw(&self) {
        self.request_repaint();
    }
}

/// One named polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotCurve {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Option<Color32>,
}

impl PlotCurve {
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }
}

/// Strategy deciding what a [`Canvas`] draws.
pub trait CanvasContent {
    /// Curves shown before the first tick.
    fn initial_curves(&mut self) -> Vec<PlotCurve>;

    /// Replacement curves for one tick, or `None` if this content is static.
    fn on_tick(&mut self) -> Option<Vec<PlotCurve>> {
        None
    }

    /// The batch behind the most recent tick, if the content is data driven.
    fn last_batch(&self) -> Option<&SampleBatch> {
        None
    }
}

/// `sin(2πt)` for `t` in `[0, 3)` at 0.01 steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSine;

impl StaticSine {
    pub const STEP: f64 = 0.01;
    pub const SAMPLES: usize = 300;

    pub fn points() -> Vec<[f64; 2]> {
        (0..Self::SAMPLES)
            .map(|i| {
                let t = i as f64 * Self::STEP;
                [t, (2.0 * std::f64::consts::PI * t).sin()]
            })
            .collect()
    }
}

impl CanvasContent for StaticSine {
    fn initial_curves(&mut self) -> Vec<PlotCurve> {
        vec![PlotCurve::new("sin(2πt)", Self::points())]
    }
}

/// Starts empty; every tick draws a fresh red line through new random samples.
pub struct RandomLine {
    source: DataSource,
    count: usize,
    last: Option<SampleBatch>,
}

impl RandomLine {
    pub fn new(source: DataSource) -> Self {
        Self::with_count(source, TICK_SAMPLE_COUNT)
    }

    pub fn with_count(source: DataSource, count: usize) -> Self {
        Self {
            source,
            count,
            last: None,
        }
    }
}

impl CanvasContent for RandomLine {
    fn initial_curves(&mut self) -> Vec<PlotCurve> {
        Vec::new()
    }

    fn on_tick(&mut self) -> Option<Vec<PlotCurve>> {
        let batch = self.source.provide_data(self.count);
        let curve = PlotCurve::new("random", batch.to_points()).with_color(Color32::RED);
        self.last = Some(batch);
        Some(vec![curve])
    }

    fn last_batch(&self) -> Option<&SampleBatch> {
        self.last.as_ref()
    }
}

/// A drawing surface hosting one plot.
pub struct Canvas {
    id: String,
    content: Box<dyn CanvasContent>,
    curves: Vec<PlotCurve>,
    redraws: u64,
}

impl Canvas {
    /// Create a canvas and compute its initial curves.
    pub fn new(id: impl Into<String>, mut content: Box<dyn CanvasContent>) -> Self {
        let curves = content.initial_curves();
        Self {
            id: id.into(),
            content,
            curves,
            redraws: 0,
        }
    }

    /// Canvas showing [`StaticSine`].
    pub fn static_sine(id: impl Into<String>) -> Self {
        Self::new(id, Box::new(StaticSine))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn curves(&self) -> &[PlotCurve] {
        &self.curves
    }

    /// How many times this canvas replaced its curves and asked for a redraw.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn last_batch(&self) -> Option<&SampleBatch> {
        self.content.last_batch()
    }

    /// Let the content react to one tick.
    ///
    /// If it produced new curves the old ones are cleared, the new ones
    /// installed and exactly one redraw requested. Returns whether that
    /// happened.
    pub fn tick(&mut self, repaint: &dyn Repaint) -> bool {
        let Some(curves) = self.content.on_tick() else {
            return false;
        };
        self.curves.clear();
        self.curves.extend(curves);
        self.redraws += 1;
        repaint.request_redraw();
        true
    }

    /// Render the plot at the given height.
    pub fn show(&self, ui: &mut egui::Ui, height: f32) -> egui::Response {
        Plot::new(self.id.as_str())
            .height(height)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for curve in &self.curves {
                    let mut line = Line::new(curve.name.clone(), curve.points.clone());
                    if let Some(color) = curve.color {
                        line = line.color(color);
                    }
                    plot_ui.line(line);
                }
            })
            .response
    }
}
