//! Configuration system tests.

use metric_batch::core::{BatchError, Config, ConfigBuilder, LogLevel};
use metric_batch::{Metric, MetricBatch, LIMIT};
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::new().unwrap();
    assert_eq!(config.batch.capacity, LIMIT);
    assert_eq!(config.batch.max_payload_metrics, None);
    assert_eq!(config.log_level(), LogLevel::Info);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "batch:\n  capacity: 64\n  max_payload_metrics: 16\nlogging:\n  level: warn\n  structured: true"
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .from_file(file.path())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.batch.capacity, 64);
    assert_eq!(config.batch.max_payload_metrics, Some(16));
    assert_eq!(config.logging.level, LogLevel::Warn);
    assert!(config.logging.structured);

    let batch = MetricBatch::builder()
        .config(&config.batch)
        .metrics((0..100).map(|i| Metric::count("requests", f64::from(i))).collect())
        .build()
        .unwrap();
    assert_eq!(batch.len(), 64);
    assert_eq!(batch.split_to_fit(16).len(), 4);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigBuilder::new().from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(BatchError::Io(_))));
}

#[test]
fn test_config_validation() {
    assert!(matches!(
        ConfigBuilder::new().capacity(0).build(),
        Err(BatchError::InvalidCapacity(0))
    ));
    assert!(ConfigBuilder::new().max_payload_metrics(0).build().is_err());

    let result = ConfigBuilder::new()
        .from_yaml("batch:\n  capacity: 0\n")
        .unwrap()
        .build();
    assert!(result.is_err());
}

#[test]
fn test_debug_overrides_level() {
    let config = ConfigBuilder::new()
        .log_level(LogLevel::Error)
        .debug(true)
        .build()
        .unwrap();
    assert_eq!(config.log_level(), LogLevel::Debug);
}
