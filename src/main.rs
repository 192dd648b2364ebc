//! randplot - embed a random-data plot in a native window.
//!
//! Environment:
//! - `RANDPLOT_LOG`: log level on stderr (`error`, `warn`, `info`, `debug`, `trace`; default `info`)
//! - `RANDPLOT_CONFIG`: optional path to a JSON configuration file

use std::path::PathBuf;

use randplot::{persistence, run_demo, DemoConfig, DemoError};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), DemoError> {
    init_logging()?;
    tracing::info!("Starting randplot");

    let cfg = match std::env::var_os("RANDPLOT_CONFIG").map(PathBuf::from) {
        Some(path) => persistence::load_config_from_path(&path)?,
        None => DemoConfig::default(),
    };

    run_demo(cfg)?;
    tracing::info!("randplot exited");
    Ok(())
}

/// Install a stderr subscriber so stdout carries only the printed batches.
fn init_logging() -> Result<(), DemoError> {
    let level = std::env::var("RANDPLOT_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| DemoError::Logging(e.to_string()))
}
