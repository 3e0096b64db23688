// ABOUTME: Native surface consumed from the Android Google Fit bridge
// ABOUTME: Async client trait plus the consuming builders that assemble native requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::google_fit_data_types;
use crate::types::MetricType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::NativeError;

/// The capability the Android host bridge implements.
///
/// Mirrors the promise-style Google Fit bridge interface: both entry points
/// take the finalized request value produced by the matching builder's
/// `build()` and resolve or reject asynchronously.
#[async_trait]
pub trait GoogleFitClient: Send + Sync {
    /// Request the permissions described by the finalized options.
    ///
    /// # Errors
    ///
    /// Returns the native failure when the platform rejects the request.
    async fn request_permissions(&self, options: FitnessOptions) -> Result<(), NativeError>;

    /// Read history data for the finalized request.
    ///
    /// # Errors
    ///
    /// Returns the native failure when the platform rejects the query.
    async fn read_data(&self, request: DataReadRequest) -> Result<DataReadResult, NativeError>;
}

/// Unit tag for time values attached to a read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    /// Epoch milliseconds
    Milliseconds,
}

/// Finalized permission options, produced only by [`FitnessOptionsBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitnessOptions {
    data_types: Vec<&'static str>,
}

impl FitnessOptions {
    /// Start assembling permission options.
    #[must_use]
    pub const fn builder() -> FitnessOptionsBuilder {
        FitnessOptionsBuilder {
            data_types: Vec::new(),
        }
    }

    /// Data type tokens in attachment order.
    #[must_use]
    pub fn data_types(&self) -> &[&'static str] {
        &self.data_types
    }
}

/// Builder for [`FitnessOptions`].
///
/// `build` consumes the builder, so a request can be finalized exactly once
/// and the finalized value is immutable.
#[derive(Debug, Default)]
pub struct FitnessOptionsBuilder {
    data_types: Vec<&'static str>,
}

impl FitnessOptionsBuilder {
    /// Attach one data type. Attachment order is preserved.
    #[must_use]
    pub fn add_data_type(mut self, token: &'static str) -> Self {
        self.data_types.push(token);
        self
    }

    /// Finalize into the immutable options value.
    #[must_use]
    pub fn build(self) -> FitnessOptions {
        FitnessOptions {
            data_types: self.data_types,
        }
    }
}

/// Finalized read request, produced only by [`DataReadRequestBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataReadRequest {
    data_type: Option<&'static str>,
    time_range: Option<(i64, i64, TimeUnit)>,
}

impl DataReadRequest {
    /// Start assembling a read request.
    #[must_use]
    pub const fn builder() -> DataReadRequestBuilder {
        DataReadRequestBuilder {
            data_type: None,
            time_range: None,
        }
    }

    /// The attached data type token, if any.
    #[must_use]
    pub const fn data_type(&self) -> Option<&'static str> {
        self.data_type
    }

    /// The attached `(start, end, unit)` triple, if any.
    #[must_use]
    pub const fn time_range(&self) -> Option<(i64, i64, TimeUnit)> {
        self.time_range
    }
}

/// Builder for [`DataReadRequest`].
#[derive(Debug, Default)]
pub struct DataReadRequestBuilder {
    data_type: Option<&'static str>,
    time_range: Option<(i64, i64, TimeUnit)>,
}

impl DataReadRequestBuilder {
    /// Attach the data type to read.
    #[must_use]
    pub const fn read_data_type(mut self, token: &'static str) -> Self {
        self.data_type = Some(token);
        self
    }

    /// Attach the query time range as positional `(start, end, unit)` values.
    #[must_use]
    pub const fn set_time_range(mut self, start: i64, end: i64, unit: TimeUnit) -> Self {
        self.time_range = Some((start, end, unit));
        self
    }

    /// Finalize into the immutable request value.
    #[must_use]
    pub fn build(self) -> DataReadRequest {
        DataReadRequest {
            data_type: self.data_type,
            time_range: self.time_range,
        }
    }
}

/// Read result as resolved by the bridge: samples nested in data sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataReadResult {
    /// Sample groupings in provider order
    pub data_sets: Vec<Vec<RawDataPoint>>,
}

/// Raw sample as delivered by the Google Fit bridge, with epoch-millis bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataPoint {
    /// Reading value
    pub value: f64,
    /// Interval start in epoch milliseconds
    pub start_time_millis: i64,
    /// Interval end in epoch milliseconds
    pub end_time_millis: i64,
}

/// Google Fit data type token for a metric.
#[must_use]
pub const fn data_type_token(metric: MetricType) -> &'static str {
    match metric {
        MetricType::HeartRateBpm => google_fit_data_types::HEART_RATE_BPM,
    }
}
