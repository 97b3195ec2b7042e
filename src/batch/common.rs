//! Metadata shared by every metric in a batch.

use crate::core::AttributeMap;
use serde::{Deserialize, Serialize};

/// Attributes, timestamp and interval common to a batch.
///
/// Only ever stored as `Option<CommonMetricData>` on a batch, and only as
/// `Some` when at least one field is set. Use [`CommonMetricData::from_parts`]
/// to build one so that invariant holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonMetricData {
    /// Dimensions applied to every metric in the batch
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attributes: Option<AttributeMap>,
    /// Start of the reporting window, epoch millis
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<i64>,
    /// Length of the reporting window
    #[serde(
        rename = "interval.ms",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub interval_ms: Option<i64>,
}

impl CommonMetricData {
    /// Returns `None` when no field is set.
    pub fn from_parts(
        attributes: Option<AttributeMap>,
        timestamp: Option<i64>,
        interval_ms: Option<i64>,
    ) -> Option<Self> {
        if attributes.is_none() && timestamp.is_none() && interval_ms.is_none() {
            return None;
        }

        Some(Self {
            attributes,
            timestamp,
            interval_ms,
        })
    }

    /// Re-check the presence invariant on a value that may have come from outside.
    pub(crate) fn normalize(common: Option<Self>) -> Option<Self> {
        common.and_then(|c| Self::from_parts(c.attributes, c.timestamp, c.interval_ms))
    }
}
