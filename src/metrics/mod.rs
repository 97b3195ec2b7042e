//! Concrete metric records.

pub mod types;

pub use types::{Metric, MetricType};
