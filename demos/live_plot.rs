//! Example: Enable the periodically redrawn random plot
//!
//! What it demonstrates
//! - Turning on the live plot below the static sine via `DemoConfig::show_live_plot`.
//! - Observing ticks and clicks through an `EventController` on a background thread.
//!
//! How to run
//! ```bash
//! cargo run --example live_plot
//! ```
//! The red line redraws every 100 ms; tick and click events are printed to stderr.

use randplot::{run_demo, DemoConfig, EventController, EventKind};

fn main() -> Result<(), randplot::DemoError> {
    let event_ctrl = EventController::new();
    let rx = event_ctrl.subscribe(&[
        EventKind::BatchGenerated,
        EventKind::Ticked,
        EventKind::TimerStopped,
    ]);

    std::thread::spawn(move || {
        while let Ok(seen) = rx.recv() {
            eprintln!("[event {:>8.3}s] {}", seen.elapsed.as_secs_f64(), seen.event);
        }
    });

    let cfg = DemoConfig {
        title: "Random Data Plot Demo (live)".to_string(),
        show_live_plot: true,
        event_controller: Some(event_ctrl),
        ..DemoConfig::default()
    };
    run_demo(cfg)
}
