//! Splitting batches for retry.
//!
//! When a collector rejects a payload as too large, the batch is halved and
//! each half resent. Both halves carry the same common metadata, so the
//! metrics they hold mean exactly what they meant in the original batch.

use super::{CommonMetricData, MetricBatch};

impl<M> MetricBatch<M> {
    /// Split into at most two batches at `len / 2`.
    ///
    /// Returns nothing for an empty batch and a single batch for one metric.
    /// Concatenating the results gives back the original metrics in order.
    pub fn split(self) -> Vec<Self> {
        let MetricBatch {
            common,
            mut metrics,
            capacity,
        } = self;

        match metrics.len() {
            0 => Vec::new(),
            1 => vec![Self::with_common(capacity, common, metrics)],
            len => {
                let right = metrics.split_off(len / 2);
                tracing::trace!("Splitting batch of {} into {} + {}", len, metrics.len(), right.len());
                vec![
                    Self::with_common(capacity, common.clone(), metrics),
                    Self::with_common(capacity, common, right),
                ]
            },
        }
    }

    /// Halve repeatedly until every batch holds at most `max_len` metrics.
    ///
    /// Order is preserved across the returned batches. A `max_len` of zero is
    /// treated as one.
    pub fn split_to_fit(self, max_len: usize) -> Vec<Self> {
        let max_len = max_len.max(1);
        let mut fitted = Vec::new();
        self.split_into(max_len, &mut fitted);
        tracing::debug!("Split batch into {} batches of at most {} metrics", fitted.len(), max_len);
        fitted
    }

    fn split_into(self, max_len: usize, fitted: &mut Vec<Self>) {
        if self.is_empty() {
            return;
        }
        if self.len() <= max_len {
            fitted.push(self);
            return;
        }
        for half in self.split() {
            half.split_into(max_len, fitted);
        }
    }

    // Halves never exceed capacity, so this cannot evict.
    fn with_common(capacity: usize, common: Option<CommonMetricData>, metrics: Vec<M>) -> Self {
        Self::assemble(
            capacity,
            CommonMetricData::normalize(common),
            metrics,
            &mut rand::thread_rng(),
        )
    }
}
