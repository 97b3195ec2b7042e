//! Metric record types.
//!
//! A batch never looks inside these; they exist so callers and the CLI
//! have a concrete record to put into a [`MetricBatch`](crate::batch::MetricBatch).

use crate::core::{AttributeMap, AttributeValue};
use serde::{Deserialize, Serialize};

/// Metric kinds understood by the collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetricType {
    /// Point-in-time measurement (CPU usage, memory)
    Gauge { value: f64 },
    /// Delta count over the reporting interval (requests, errors)
    Count { value: f64 },
    /// Pre-aggregated distribution over the reporting interval
    Summary {
        count: u64,
        sum: f64,
        min: f64,
        max: f64,
    },
}

/// A single metric record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric name
    pub name: String,
    /// Kind and value
    #[serde(flatten)]
    pub kind: MetricType,
    /// Per-record attributes, merged with the batch's common attributes downstream
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attributes: Option<AttributeMap>,
    /// Epoch millis; falls back to the batch timestamp when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<i64>,
    #[serde(
        rename = "interval.ms",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub interval_ms: Option<i64>,
}

impl Metric {
    fn new(name: impl Into<String>, kind: MetricType) -> Self {
        Self {
            name: name.into(),
            kind,
            attributes: None,
            timestamp: None,
            interval_ms: None,
        }
    }

    /// Create a gauge metric
    pub fn gauge(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, MetricType::Gauge { value })
    }

    /// Create a count metric
    pub fn count(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, MetricType::Count { value })
    }

    /// Create a summary metric
    pub fn summary(name: impl Into<String>, count: u64, sum: f64, min: f64, max: f64) -> Self {
        Self::new(
            name,
            MetricType::Summary {
                count,
                sum,
                min,
                max,
            },
        )
    }

    /// Add a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes
            .get_or_insert_with(AttributeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the record timestamp
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the record interval
    pub fn with_interval_ms(mut self, interval_ms: i64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }
}
