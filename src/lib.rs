//! Capacity-bounded telemetry metric batches.
//!
//! A [`MetricBatch`] accumulates metric records together with metadata
//! shared by all of them (attributes, a reporting timestamp, an interval)
//! and is the unit a transport sends to a collector.
//!
//! # Features
//!
//! - **Hard capacity**: at most [`LIMIT`] (2000) metrics per batch by default
//! - **Random eviction**: overflow samples uniformly instead of dropping the
//!   newest or oldest metrics
//! - **Retry splitting**: halve a rejected batch, keeping metadata on both halves
//! - **Payload shape**: `serde` serialization to `{"common": ..., "metrics": [...]}`
//!
//! # Architecture
//!
//! - `batch`: the batch container, eviction and splitting
//! - `metrics`: concrete gauge / count / summary records
//! - `core`: errors, configuration, attribute types
//! - `cli`: command-line driver
//!
//! # Example
//!
//! ```
//! use metric_batch::core::attributes;
//! use metric_batch::{Metric, MetricBatch};
//!
//! let mut batch = MetricBatch::new(
//!     Some(attributes([("host", "a")])),
//!     Some(1_000),
//!     None,
//!     vec![Metric::gauge("cpu", 0.5)],
//! );
//! batch.push(Metric::count("requests", 3.0));
//! batch.compute_interval(1_500).unwrap();
//! assert_eq!(batch.interval_ms(), Some(500));
//!
//! let halves = batch.split();
//! assert_eq!(halves.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod batch;
pub mod cli;
pub mod core;
pub mod metrics;

// Re-export core types for convenience
pub use crate::batch::{CommonMetricData, MetricBatch, MetricBatchBuilder, LIMIT};
pub use crate::core::{BatchError, Config, Result};
pub use crate::metrics::{Metric, MetricType};
