use std::time::Duration;

use randplot::persistence::{
    config_from_json, config_to_json, load_config_from_path, save_config_to_path, DemoConfigSerde,
};
use randplot::{DemoConfig, DemoError, SampleRange};

#[test]
fn defaults_match_the_demo_window() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.button_label, "Generate Data");
    assert_eq!(cfg.button_tooltip, "This is a tool tip");
    assert_eq!(cfg.initial_count, 10);
    assert_eq!(cfg.click_count, 20);
    assert_eq!(cfg.tick_count, 4);
    assert_eq!(cfg.tick_interval, Duration::from_millis(100));
    assert_eq!(cfg.sample_range, SampleRange::default());
    assert!(!cfg.show_live_plot);
}

#[test]
fn json_round_trip() {
    let cfg = DemoConfig {
        title: "custom".into(),
        seed: Some(99),
        show_live_plot: true,
        sample_range: SampleRange::new(-3, 3).unwrap(),
        tick_interval: Duration::from_millis(250),
        ..DemoConfig::default()
    };
    let json = config_to_json(&cfg).unwrap();
    let restored = config_from_json(&json).unwrap();
    assert_eq!(DemoConfigSerde::from(&restored), DemoConfigSerde::from(&cfg));
}

#[test]
fn missing_fields_take_defaults() {
    let cfg = config_from_json(r#"{ "click_count": 5 }"#).unwrap();
    assert_eq!(cfg.click_count, 5);
    assert_eq!(cfg.initial_count, 10);
    assert_eq!(cfg.title, DemoConfig::default().title);
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(config_from_json("{ nope"), Err(DemoError::Config(_))));
}

#[test]
fn invalid_values_are_rejected() {
    match config_from_json(r#"{ "sample_range": [5, 1] }"#) {
        Err(DemoError::Config(msg)) => assert!(msg.contains("exceeds"), "{msg}"),
        other => panic!("expected a config error, got {:?}", other.map(|c| c.sample_range)),
    }
    assert!(matches!(
        config_from_json(r#"{ "tick_interval_us": 0 }"#),
        Err(DemoError::InvalidArgument { .. })
    ));
}

#[test]
fn sub_millisecond_interval_survives_round_trip() {
    let cfg = DemoConfig {
        tick_interval: Duration::from_micros(500),
        ..DemoConfig::default()
    };
    let restored = config_from_json(&config_to_json(&cfg).unwrap()).unwrap();
    assert_eq!(restored.tick_interval, Duration::from_micros(500));
}

#[test]
fn failed_apply_leaves_config_untouched() {
    let mut cfg = DemoConfig::default();
    let stored = DemoConfigSerde {
        title: "changed".into(),
        tick_interval_us: 0,
        ..DemoConfigSerde::default()
    };
    assert!(stored.apply_to(&mut cfg).is_err());
    assert_eq!(cfg.title, DemoConfig::default().title);
}

#[test]
fn save_and_load_file() {
    let path = std::env::temp_dir().join(format!("randplot_cfg_{}.json", std::process::id()));
    let cfg = DemoConfig {
        click_count: 7,
        ..DemoConfig::default()
    };
    save_config_to_path(&cfg, &path).unwrap();
    let loaded = load_config_from_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.click_count, 7);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("randplot_definitely_missing_cfg.json");
    assert!(matches!(load_config_from_path(&path), Err(DemoError::Io(_))));
}
