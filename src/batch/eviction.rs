//! Insertion with random eviction.
//!
//! Once a batch is full, every push appends and then drops one metric chosen
//! uniformly from everything held, the new metric included. Memory stays
//! bounded while the survivors remain a fair sample of the stream.

use super::MetricBatch;
use rand::Rng;

impl<M> MetricBatch<M> {
    /// Append a metric, evicting a random one if the batch overflows.
    pub fn push(&mut self, metric: M) -> &mut Self {
        self.push_with_rng(metric, &mut rand::thread_rng())
    }

    /// [`push`](Self::push) drawing the eviction index from `rng`
    pub fn push_with_rng<R: Rng + ?Sized>(&mut self, metric: M, rng: &mut R) -> &mut Self {
        self.push_evicting(metric, rng);
        self
    }

    /// Append a metric and return the one evicted to make room, if any.
    ///
    /// The evicted metric may be the one just pushed.
    pub fn push_evicting<R: Rng + ?Sized>(&mut self, metric: M, rng: &mut R) -> Option<M> {
        self.metrics.push(metric);

        let len = self.metrics.len();
        if len <= self.capacity {
            return None;
        }

        // swap_remove moves the last element into the hole
        let index = rng.gen_range(0..len);
        tracing::debug!("Batch over capacity {}, evicting metric at index {}", self.capacity, index);
        Some(self.metrics.swap_remove(index))
    }
}
