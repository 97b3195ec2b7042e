//! Configuration management for metric batching.
//!
//! This module provides configuration handling with:
//! - YAML file support
//! - CLI argument overrides (through [`ConfigBuilder`])
//! - Validation and defaults

use crate::batch::LIMIT;
use crate::core::{BatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Batch sizing configuration
    pub batch: BatchConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Debug mode
    #[serde(skip)]
    pub debug: bool,
}

/// Batch sizing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of metrics a batch may hold
    pub capacity: usize,
    /// Largest batch the collector is known to accept; larger batches are split
    pub max_payload_metrics: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Include targets and line numbers in log lines
    pub structured: bool,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            capacity: LIMIT,
            max_payload_metrics: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LogLevel::Info,
            structured: false,
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Result<Self> {
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch.capacity == 0 {
            return Err(BatchError::InvalidCapacity(self.batch.capacity));
        }

        if self.batch.max_payload_metrics == Some(0) {
            return Err(BatchError::config("max_payload_metrics must be greater than 0"));
        }

        Ok(())
    }

    /// Effective log level, taking debug mode into account
    pub fn log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else {
            self.logging.level
        }
    }
}

impl LogLevel {
    /// Convert to tracing filter string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Configuration builder for programmatic construction
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::default(),
        }
    }

    /// Load configuration from YAML string
    pub fn from_yaml(mut self, yaml: &str) -> Result<Self> {
        let debug = self.config.debug;
        self.config = serde_yaml::from_str(yaml)
            .map_err(|e| BatchError::config(format!("Failed to parse YAML config: {}", e)))?;
        self.config.debug = debug;
        Ok(self)
    }

    /// Load configuration from a YAML file
    pub fn from_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded configuration from: {:?}", path);
        self.from_yaml(&content)
    }

    /// Set batch capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.batch.capacity = capacity;
        self
    }

    /// Set the largest accepted payload size
    pub fn max_payload_metrics(mut self, max: usize) -> Self {
        self.config.batch.max_payload_metrics = Some(max);
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
