//! Top-level entry point for running the demo as a native window.

use eframe::egui;

use crate::config::DemoConfig;
use crate::error::Result;

use super::DemoApp;

/// Launch the demo in a native window.
///
/// This:
///
/// 1. Constructs a [`DemoApp`], which prints the startup batch.
/// 2. Opens a native window sized to fit the plot(s) and the button.
/// 3. Enters the eframe event loop and blocks until the window is closed.
///
/// The live plot's timer, if any, is stopped when the app is dropped at the
/// end of the event loop.
pub fn run_demo(mut cfg: DemoConfig) -> Result<()> {
    let app = DemoApp::new(&cfg)?;

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.figure_size;
        let plots = if cfg.show_live_plot { 2.0 } else { 1.0 };
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(w + 32.0, h * plots + 64.0));
    }

    tracing::info!(%title, "opening window");
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    tracing::info!("window closed");
    Ok(())
}
