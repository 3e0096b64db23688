// ABOUTME: HealthKit backend adapter bridging the callback-style bridge into the async contract
// ABOUTME: Single native call per operation, oneshot settlement, errors collapsed to categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::healthkit::{
    permission_token, HealthKitClient, InitOptions, PermissionScope, SampleQuery,
};
use super::HealthDataProvider;
use crate::constants::provider_names;
use crate::errors::DataError;
use crate::models::{Sample, TimeRange};
use crate::types::MetricType;
use async_trait::async_trait;
use chrono::SecondsFormat;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Backend adapter for the iOS `HealthKit` bridge.
///
/// Wraps the callback-style native interface in the shared async contract.
/// Each operation issues exactly one native call and settles exactly once;
/// the `oneshot` channel used for bridging enforces single settlement by
/// construction, and the `FnOnce` callback type prevents a misbehaving
/// bridge from completing twice.
pub struct HealthKitProvider {
    client: Arc<dyn HealthKitClient>,
}

impl HealthKitProvider {
    /// Bind the adapter to a host-provided `HealthKit` client.
    #[must_use]
    pub fn new(client: Arc<dyn HealthKitClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthDataProvider for HealthKitProvider {
    fn name(&self) -> &'static str {
        provider_names::HEALTHKIT
    }

    async fn authorize(&self, metrics: &[MetricType]) -> Result<(), DataError> {
        let options = InitOptions {
            permissions: PermissionScope {
                read: metrics.iter().copied().map(permission_token).collect(),
            },
        };
        debug!(permissions = ?options.permissions.read, "requesting HealthKit read permissions");

        let (tx, rx) = oneshot::channel();
        self.client.init_health_kit(
            options,
            Box::new(move |outcome| {
                // Receiver may have been dropped by the caller; late settlement is ignored.
                let _ = tx.send(outcome);
            }),
        );

        match rx.await {
            Ok(None) => Ok(()),
            Ok(Some(native)) => {
                warn!(error = %native, "HealthKit permission request failed");
                Err(DataError::FailedInit)
            }
            Err(_) => {
                // The bridge dropped its callback without invoking it.
                warn!("HealthKit bridge discarded the init callback");
                Err(DataError::FailedInit)
            }
        }
    }

    async fn read(&self, metric: MetricType, range: &TimeRange) -> Result<Vec<Sample>, DataError> {
        let query = SampleQuery {
            start_date: range
                .start_date
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            end_date: range.end_date.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        debug!(metric = %metric, start = %query.start_date, end = %query.end_date, "querying HealthKit samples");

        let (tx, rx) = oneshot::channel();
        self.client.get_heart_rate_samples(
            query,
            Box::new(move |outcome| {
                let _ = tx.send(outcome);
            }),
        );

        match rx.await {
            Ok(Ok(raw)) => Ok(raw
                .into_iter()
                .map(|s| Sample {
                    value: s.value,
                    start_date: s.start_date,
                    end_date: s.end_date,
                })
                .collect()),
            Ok(Err(native)) => {
                warn!(metric = %metric, error = %native, "HealthKit sample query failed");
                Err(DataError::FailedQuery)
            }
            Err(_) => {
                warn!(metric = %metric, "HealthKit bridge discarded the query callback");
                Err(DataError::FailedQuery)
            }
        }
    }
}
