//! Command-line interface.
//!
//! Fills a batch with synthetic metrics and shows how it would be sized and
//! split for sending. Useful for checking a configuration file.

use crate::batch::MetricBatch;
use crate::core::{AttributeMap, AttributeValue, BatchError, Config, ConfigBuilder, Result};
use crate::metrics::Metric;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;

/// Build, size and split a telemetry metric batch
#[derive(Parser, Debug)]
#[command(name = "metric-batch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (YAML)
    #[arg(short, long, env = "METRIC_BATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of synthetic metrics to record
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Batch capacity (overrides config)
    #[arg(long, env = "METRIC_BATCH_CAPACITY")]
    pub capacity: Option<usize>,

    /// Largest batch the collector accepts; larger batches are split (overrides config)
    #[arg(long)]
    pub max_payload: Option<usize>,

    /// Common attribute as key=value, may be repeated
    #[arg(short, long = "attribute", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,

    /// Common timestamp in epoch millis
    #[arg(long)]
    pub timestamp: Option<i64>,

    /// End of the reporting window in epoch millis; sets the interval
    #[arg(long)]
    pub end: Option<i64>,

    /// Enable debug logging
    #[arg(short, long, env = "METRIC_BATCH_DEBUG")]
    pub debug: bool,

    /// Validate configuration and exit
    #[arg(long)]
    pub check_config: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Load configuration with proper precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Config file
    /// 3. Defaults (lowest priority)
    pub fn load_config(&self) -> Result<Config> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = &self.config {
            builder = builder.from_file(path).map_err(|e| match e {
                BatchError::Io(io) => {
                    BatchError::config(format!("Failed to read config file {:?}: {}", path, io))
                },
                other => other,
            })?;
        }

        if let Some(capacity) = self.capacity {
            builder = builder.capacity(capacity);
        }
        if let Some(max) = self.max_payload {
            builder = builder.max_payload_metrics(max);
        }

        builder.debug(self.debug).build()
    }

    /// Parse `key=value` attribute arguments.
    pub fn parse_attributes(&self) -> Result<Option<AttributeMap>> {
        if self.attributes.is_empty() {
            return Ok(None);
        }

        let mut map = AttributeMap::new();
        for raw in &self.attributes {
            let (key, value) = raw.split_once('=').ok_or_else(|| {
                BatchError::config(format!("Attribute must be KEY=VALUE, got '{}'", raw))
            })?;
            if key.is_empty() {
                return Err(BatchError::config(format!("Attribute key is empty in '{}'", raw)));
            }
            map.insert(key.to_string(), parse_attribute_value(value));
        }

        Ok(Some(map))
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(config: &Config) -> Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level().as_str()));

        let fmt_layer = if config.logging.structured {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .compact()
        } else {
            tracing_subscriber::fmt::layer().with_target(false).compact()
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| BatchError::config(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }
}

fn parse_attribute_value(raw: &str) -> AttributeValue {
    if let Ok(v) = raw.parse::<i64>() {
        AttributeValue::Int(v)
    } else if let Ok(v) = raw.parse::<f64>() {
        AttributeValue::Double(v)
    } else if let Ok(v) = raw.parse::<bool>() {
        AttributeValue::Bool(v)
    } else {
        AttributeValue::String(raw.to_string())
    }
}

/// Synthetic gauges cycling over a few names
#[allow(clippy::cast_precision_loss)]
fn synthetic_metrics(count: usize) -> impl Iterator<Item = Metric> {
    (0..count).map(|i| Metric::gauge(format!("synthetic.gauge.{}", i % 8), i as f64))
}

/// Build the batch described by the arguments and return the batches that would be sent.
pub fn run(cli: &Cli, config: &Config) -> Result<Vec<MetricBatch>> {
    let mut builder = MetricBatch::builder().config(&config.batch);
    if let Some(attributes) = cli.parse_attributes()? {
        builder = builder.attributes(attributes);
    }
    if let Some(timestamp) = cli.timestamp {
        builder = builder.timestamp(timestamp);
    }

    let mut batch: MetricBatch = builder.build()?;
    batch.extend(synthetic_metrics(cli.count));
    tracing::info!("Recorded {} metrics, batch holds {}", cli.count, batch.len());

    if let Some(end) = cli.end {
        batch.compute_interval(end)?;
    }

    Ok(match config.batch.max_payload_metrics {
        Some(max) => batch.split_to_fit(max),
        None if batch.is_empty() => Vec::new(),
        None => vec![batch],
    })
}

/// Execute the command.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    Cli::init_logging(&config)?;

    if cli.check_config {
        println!("Configuration is valid!");
        println!("  Capacity: {}", config.batch.capacity);
        match config.batch.max_payload_metrics {
            Some(max) => println!("  Max payload metrics: {}", max),
            None => println!("  Max payload metrics: unlimited"),
        }
        return Ok(());
    }

    let batches = run(cli, &config)?;
    let summary = json!({
        "capacity": config.batch.capacity,
        "recorded": cli.count,
        "batches": batches
            .iter()
            .map(|b| json!({ "size": b.len(), "common": b.common() }))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
