// ABOUTME: Closed metric vocabulary shared verbatim by both backend adapters
// ABOUTME: Maps symbolic metric names to the stable identifiers callers pass around
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported health metric.
///
/// This is the stable, opaque identifier callers hand to
/// [`authorize`](crate::HealthData::authorize) and
/// [`read`](crate::HealthData::read). The vocabulary is closed: every variant
/// has an entry in each backend's platform token table
/// (see [`crate::constants`]), so an unmapped metric cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricType {
    /// Heart rate in beats per minute
    HeartRateBpm,
}

impl MetricType {
    /// Stable symbolic name, identical on both platforms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeartRateBpm => "heartRateBpm",
        }
    }

    /// All supported metrics.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::HeartRateBpm]
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric type: {0}")]
pub struct UnknownMetricType(String);

impl FromStr for MetricType {
    type Err = UnknownMetricType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heartRateBpm" => Ok(Self::HeartRateBpm),
            other => Err(UnknownMetricType(other.to_owned())),
        }
    }
}
