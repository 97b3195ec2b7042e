//! Capacity-bounded metric batches.
//!
//! A [`MetricBatch`] collects metric records plus optional metadata shared by
//! all of them, and is the unit handed to a transport for sending.
//!
//! - Capacity is enforced on every insertion. Once full, each new record
//!   triggers one uniformly random eviction, so a long stream is sampled
//!   rather than truncated.
//! - [`MetricBatch::split`] halves a batch for retry when the collector
//!   rejects it as too large; metadata is copied to both halves.
//!
//! Batches are plain values: mutation needs `&mut`, so callers sharing one
//! across threads wrap it in their own lock.

pub mod builder;
pub mod common;
mod eviction;
mod split;

pub use builder::MetricBatchBuilder;
pub use common::CommonMetricData;

use crate::core::{AttributeMap, BatchError, Result};
use crate::metrics::Metric;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of metrics in a batch unless configured otherwise.
pub const LIMIT: usize = 2000;

/// A bounded group of metrics with shared metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBatch<M = Metric> {
    #[serde(skip_serializing_if = "Option::is_none")]
    common: Option<CommonMetricData>,
    metrics: Vec<M>,
    #[serde(skip)]
    capacity: usize,
}

impl<M> MetricBatch<M> {
    /// Create a batch holding at most [`LIMIT`] metrics.
    ///
    /// If `metrics` is longer than the limit, the first [`LIMIT`] are kept in
    /// place and the rest are pushed one by one, each going through random
    /// eviction.
    pub fn new(
        attributes: Option<AttributeMap>,
        timestamp: Option<i64>,
        interval_ms: Option<i64>,
        metrics: Vec<M>,
    ) -> Self {
        Self::assemble(
            LIMIT,
            CommonMetricData::from_parts(attributes, timestamp, interval_ms),
            metrics,
            &mut rand::thread_rng(),
        )
    }

    /// Start building a batch with a custom capacity or RNG
    pub fn builder() -> MetricBatchBuilder<M> {
        MetricBatchBuilder::new()
    }

    pub(crate) fn assemble<R: Rng + ?Sized>(
        capacity: usize,
        common: Option<CommonMetricData>,
        mut metrics: Vec<M>,
        rng: &mut R,
    ) -> Self {
        let overflow = if metrics.len() > capacity {
            metrics.split_off(capacity)
        } else {
            Vec::new()
        };

        let mut batch = Self {
            common,
            metrics,
            capacity,
        };

        if !overflow.is_empty() {
            tracing::debug!(
                "Batch created with {} metrics over capacity {}, sampling the excess",
                overflow.len(),
                capacity
            );
            for metric in overflow {
                batch.push_evicting(metric, rng);
            }
        }

        batch
    }

    /// Number of metrics currently held
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Check if the batch holds no metrics
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Check if the next push will evict
    pub fn is_full(&self) -> bool {
        self.metrics.len() >= self.capacity
    }

    /// Maximum number of metrics this batch holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shared metadata, if any field is set
    pub fn common(&self) -> Option<&CommonMetricData> {
        self.common.as_ref()
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        self.common.as_ref().and_then(|c| c.attributes.as_ref())
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.common.as_ref().and_then(|c| c.timestamp)
    }

    pub fn interval_ms(&self) -> Option<i64> {
        self.common.as_ref().and_then(|c| c.interval_ms)
    }

    /// Metrics in their current order
    pub fn metrics(&self) -> &[M] {
        &self.metrics
    }

    /// Consume the batch, returning its metrics
    pub fn into_metrics(self) -> Vec<M> {
        self.metrics
    }

    /// Set the interval to `end_timestamp - timestamp`.
    ///
    /// Fails with [`BatchError::MissingTimestamp`] if the batch was created
    /// without a timestamp; the batch is left untouched in that case.
    pub fn compute_interval(&mut self, end_timestamp: i64) -> Result<&mut Self> {
        let common = self.common.as_mut().ok_or(BatchError::MissingTimestamp)?;
        let start = common.timestamp.ok_or(BatchError::MissingTimestamp)?;
        common.interval_ms = Some(end_timestamp.saturating_sub(start));
        Ok(self)
    }

    /// [`compute_interval`](Self::compute_interval) ending at the current time
    pub fn compute_interval_now(&mut self) -> Result<&mut Self> {
        self.compute_interval(crate::core::now_millis())
    }

    /// Render the batch payload as JSON
    pub fn to_json(&self) -> Result<String>
    where
        M: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }
}

impl<M> Default for MetricBatch<M> {
    fn default() -> Self {
        Self {
            common: None,
            metrics: Vec::new(),
            capacity: LIMIT,
        }
    }
}

impl<M> Extend<M> for MetricBatch<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        let mut rng = rand::thread_rng();
        for metric in iter {
            self.push_evicting(metric, &mut rng);
        }
    }
}

#[derive(Deserialize)]
struct BatchPayload<M> {
    #[serde(default)]
    common: Option<CommonMetricData>,
    metrics: Vec<M>,
}

// Loading goes through the constructor so the capacity and metadata
// invariants hold for payloads produced elsewhere.
impl<'de, M: Deserialize<'de>> Deserialize<'de> for MetricBatch<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let payload = BatchPayload::<M>::deserialize(deserializer)?;
        Ok(Self::assemble(
            LIMIT,
            CommonMetricData::normalize(payload.common),
            payload.metrics,
            &mut rand::thread_rng(),
        ))
    }
}
