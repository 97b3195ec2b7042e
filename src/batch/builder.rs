//! Builder for batches with non-default capacity or a caller-supplied RNG.

use super::{CommonMetricData, MetricBatch, LIMIT};
use crate::core::{AttributeMap, AttributeValue, BatchConfig, BatchError, Result};
use rand::Rng;

/// Builder for [`MetricBatch`]
#[derive(Debug, Clone)]
pub struct MetricBatchBuilder<M> {
    attributes: Option<AttributeMap>,
    timestamp: Option<i64>,
    interval_ms: Option<i64>,
    metrics: Vec<M>,
    capacity: usize,
}

impl<M> Default for MetricBatchBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MetricBatchBuilder<M> {
    pub fn new() -> Self {
        Self {
            attributes: None,
            timestamp: None,
            interval_ms: None,
            metrics: Vec::new(),
            capacity: LIMIT,
        }
    }

    /// Take capacity from configuration
    pub fn config(mut self, config: &BatchConfig) -> Self {
        self.capacity = config.capacity;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Add one common attribute
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes
            .get_or_insert_with(AttributeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn interval_ms(mut self, interval_ms: i64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    /// Initial metrics, in order
    pub fn metrics(mut self, metrics: Vec<M>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metric(mut self, metric: M) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Build the batch, sampling any initial metrics beyond capacity
    pub fn build(self) -> Result<MetricBatch<M>> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// [`build`](Self::build) drawing eviction indices from `rng`
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<MetricBatch<M>> {
        if self.capacity == 0 {
            return Err(BatchError::InvalidCapacity(self.capacity));
        }

        Ok(MetricBatch::assemble(
            self.capacity,
            CommonMetricData::from_parts(self.attributes, self.timestamp, self.interval_ms),
            self.metrics,
            rng,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builder_defaults_match_new() {
        let built: MetricBatch<u8> = MetricBatchBuilder::new().build().unwrap();
        assert_eq!(built, MetricBatch::new(None, None, None, Vec::new()));
    }

    #[test]
    fn test_builder_zero_capacity_rejected() {
        let result: Result<MetricBatch<u8>> = MetricBatch::builder().capacity(0).build();
        assert!(matches!(result, Err(BatchError::InvalidCapacity(0))));
    }

    #[test]
    fn test_builder_from_config() {
        let config = ConfigBuilder::new().capacity(5).build().unwrap();
        let batch = MetricBatch::builder()
            .config(&config.batch)
            .metrics((0..12).collect::<Vec<u32>>())
            .build()
            .unwrap();
        assert_eq!(batch.capacity(), 5);
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_builder_attributes_and_metadata() {
        let batch = MetricBatch::builder()
            .attribute("host", "a")
            .attribute("region", "eu")
            .timestamp(100)
            .interval_ms(60_000)
            .metric(1u8)
            .metric(2u8)
            .build()
            .unwrap();

        let attrs = batch.attributes().unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(batch.timestamp(), Some(100));
        assert_eq!(batch.interval_ms(), Some(60_000));
        assert_eq!(batch.metrics(), &[1, 2]);
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let build = |seed| {
            MetricBatch::builder()
                .capacity(8)
                .metrics((0..64).collect::<Vec<u32>>())
                .build_with_rng(&mut StdRng::seed_from_u64(seed))
                .unwrap()
        };

        assert_eq!(build(11), build(11));
    }
}
