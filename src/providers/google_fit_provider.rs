// ABOUTME: Google Fit backend adapter assembling builder requests and flattening nested results
// ABOUTME: Single native call per operation, rejections collapsed to the shared error categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::google_fit::{
    data_type_token, DataReadRequest, FitnessOptions, GoogleFitClient, RawDataPoint, TimeUnit,
};
use super::HealthDataProvider;
use crate::constants::provider_names;
use crate::errors::DataError;
use crate::models::{Sample, TimeRange};
use crate::types::MetricType;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat};
use std::sync::Arc;
use tracing::{debug, warn};

/// Backend adapter for the Android Google Fit bridge.
///
/// Assembles one builder per call, applies the attachment steps in the
/// order the native API expects, finalizes exactly once, and passes the
/// finalized value to the native call. Nested result groupings are
/// flattened into one ordered sample sequence.
pub struct GoogleFitProvider {
    client: Arc<dyn GoogleFitClient>,
}

impl GoogleFitProvider {
    /// Bind the adapter to a host-provided Google Fit client.
    #[must_use]
    pub fn new(client: Arc<dyn GoogleFitClient>) -> Self {
        Self { client }
    }
}

/// Convert one raw point into the normalized sample shape.
///
/// Epoch-millis bounds become ISO-8601 UTC strings with millisecond
/// precision, so both backends emit identical sample shapes. The conversion
/// is lossless over the supported range.
fn normalize(point: RawDataPoint) -> Sample {
    Sample {
        value: point.value,
        start_date: iso8601_millis(point.start_time_millis),
        end_date: iso8601_millis(point.end_time_millis),
    }
}

fn iso8601_millis(epoch_millis: i64) -> String {
    DateTime::from_timestamp_millis(epoch_millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl HealthDataProvider for GoogleFitProvider {
    fn name(&self) -> &'static str {
        provider_names::GOOGLE_FIT
    }

    async fn authorize(&self, metrics: &[MetricType]) -> Result<(), DataError> {
        let mut builder = FitnessOptions::builder();
        for metric in metrics {
            builder = builder.add_data_type(data_type_token(*metric));
        }
        let options = builder.build();
        debug!(data_types = ?options.data_types(), "requesting Google Fit permissions");

        match self.client.request_permissions(options).await {
            Ok(()) => Ok(()),
            Err(native) => {
                warn!(error = %native, "Google Fit permission request failed");
                Err(DataError::FailedInit)
            }
        }
    }

    async fn read(&self, metric: MetricType, range: &TimeRange) -> Result<Vec<Sample>, DataError> {
        let request = DataReadRequest::builder()
            .read_data_type(data_type_token(metric))
            .set_time_range(
                range.start_date.timestamp_millis(),
                range.end_date.timestamp_millis(),
                TimeUnit::Milliseconds,
            )
            .build();
        debug!(metric = %metric, request = ?request, "reading Google Fit history");

        match self.client.read_data(request).await {
            Ok(result) => Ok(result
                .data_sets
                .into_iter()
                .flatten()
                .map(normalize)
                .collect()),
            Err(native) => {
                warn!(metric = %metric, error = %native, "Google Fit history read failed");
                Err(DataError::FailedQuery)
            }
        }
    }
}
