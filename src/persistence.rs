//! Save and load configuration to/from JSON files.
//!
//! [`DemoConfig`] holds values that cannot derive serde traits (native window
//! options, controllers), so a serializable mirror carries the rest. Every
//! field is optional on load and falls back to its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;
use crate::data::source::SampleRange;
use crate::error::{DemoError, Result};

/// Serializable version of [`DemoConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfigSerde {
    pub title: String,
    pub figure_size: [f32; 2],
    pub button_label: String,
    pub button_tooltip: String,
    pub initial_count: usize,
    pub click_count: usize,
    /// Inclusive `[low, high]`.
    pub sample_range: SampleRange,
    pub seed: Option<u64>,
    pub show_live_plot: bool,
    pub tick_count: usize,
    pub tick_interval_us: u64,
}

impl From<&DemoConfig> for DemoConfigSerde {
    fn from(c: &DemoConfig) -> Self {
        Self {
            title: c.title.clone(),
            figure_size: c.figure_size,
            button_label: c.button_label.clone(),
            button_tooltip: c.button_tooltip.clone(),
            initial_count: c.initial_count,
            click_count: c.click_count,
            sample_range: c.sample_range,
            seed: c.seed,
            show_live_plot: c.show_live_plot,
            tick_count: c.tick_count,
            tick_interval_us: u64::try_from(c.tick_interval.as_micros()).unwrap_or(u64::MAX),
        }
    }
}

impl Default for DemoConfigSerde {
    fn default() -> Self {
        (&DemoConfig::default()).into()
    }
}

impl DemoConfigSerde {
    /// Apply stored settings to a config, validating them first.
    ///
    /// On error `cfg` is left untouched.
    pub fn apply_to(self, cfg: &mut DemoConfig) -> Result<()> {
        if self.tick_interval_us == 0 {
            return Err(DemoError::invalid_argument(
                "tick_interval_us",
                "must be at least 1",
            ));
        }
        cfg.title = self.title;
        cfg.figure_size = self.figure_size;
        cfg.button_label = self.button_label;
        cfg.button_tooltip = self.button_tooltip;
        cfg.initial_count = self.initial_count;
        cfg.click_count = self.click_count;
        cfg.sample_range = self.sample_range;
        cfg.seed = self.seed;
        cfg.show_live_plot = self.show_live_plot;
        cfg.tick_count = self.tick_count;
        cfg.tick_interval = Duration::from_micros(self.tick_interval_us);
        Ok(())
    }
}

// ---------- Public API ----------

/// Serialize the configuration as pretty JSON.
pub fn config_to_json(cfg: &DemoConfig) -> Result<String> {
    serde_json::to_string_pretty(&DemoConfigSerde::from(cfg))
        .map_err(|e| DemoError::Config(e.to_string()))
}

/// Deserialize a configuration from JSON, starting from defaults.
pub fn config_from_json(json: &str) -> Result<DemoConfig> {
    let stored: DemoConfigSerde =
        serde_json::from_str(json).map_err(|e| DemoError::Config(e.to_string()))?;
    let mut cfg = DemoConfig::default();
    stored.apply_to(&mut cfg)?;
    Ok(cfg)
}

/// Save the configuration to a JSON file at the given path.
pub fn save_config_to_path(cfg: &DemoConfig, path: &Path) -> Result<()> {
    let txt = config_to_json(cfg)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load a configuration from a JSON file at the given path.
pub fn load_config_from_path(path: &Path) -> Result<DemoConfig> {
    let txt = std::fs::read_to_string(path)?;
    let cfg = config_from_json(&txt)?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(cfg)
}
