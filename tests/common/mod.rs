//! Common test utilities and fixtures.

#![allow(dead_code)]

use metric_batch::core::{attributes, AttributeMap};
use metric_batch::{Metric, MetricBatch};

/// Test fixture builder for creating metrics with sensible defaults.
pub struct TestMetricBuilder {
    id: usize,
    name: String,
    value: f64,
    service: Option<String>,
}

impl TestMetricBuilder {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            name: "test.metric".to_string(),
            value: 1.0,
            service: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn service(mut self, service: &str) -> Self {
        self.service = Some(service.to_string());
        self
    }

    /// Every fixture metric carries its id so it can be traced through eviction and splits.
    pub fn build(self) -> Metric {
        let metric = Metric::gauge(self.name, self.value).with_attribute("id", self.id.to_string());
        match self.service {
            Some(service) => metric.with_attribute("service.name", service),
            None => metric,
        }
    }
}

/// `count` distinct metrics, ids `0..count`
pub fn create_test_metrics(count: usize) -> Vec<Metric> {
    (0..count).map(|i| TestMetricBuilder::new(i).build()).collect()
}

pub fn host_attributes(host: &str) -> AttributeMap {
    attributes([("host", host)])
}

/// Ids of the metrics in a batch, in order
pub fn metric_ids(batch: &MetricBatch) -> Vec<String> {
    batch
        .metrics()
        .iter()
        .map(|m| {
            m.attributes
                .as_ref()
                .and_then(|a| a.get("id"))
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .collect()
}
