//! Core types shared across the crate.
//!
//! Errors, configuration, and the attribute model used by batches
//! and metric records.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{BatchConfig, Config, ConfigBuilder, LogLevel, LoggingConfig};
pub use error::{BatchError, Result};
pub use types::{attributes, now_millis, AttributeMap, AttributeValue};
