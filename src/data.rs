// ABOUTME: Caller-facing facade binding exactly one backend adapter per target platform
// ABOUTME: Static selection only; the chosen adapter's contract passes through unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::DataError;
use crate::models::{Sample, TimeRange};
use crate::providers::google_fit::GoogleFitClient;
use crate::providers::google_fit_provider::GoogleFitProvider;
use crate::providers::healthkit::HealthKitClient;
use crate::providers::healthkit_provider::HealthKitProvider;
use crate::providers::HealthDataProvider;
use crate::types::MetricType;
use std::sync::Arc;
use tracing::info;

/// Mobile platform a backend exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// iOS, served by the `HealthKit` backend
    Ios,
    /// Android, served by the Google Fit backend
    Android,
}

impl Platform {
    /// The platform this build targets, or `None` on non-mobile targets.
    #[must_use]
    pub const fn current() -> Option<Self> {
        #[cfg(target_os = "ios")]
        {
            Some(Self::Ios)
        }
        #[cfg(target_os = "android")]
        {
            Some(Self::Android)
        }
        #[cfg(not(any(target_os = "ios", target_os = "android")))]
        {
            None
        }
    }
}

/// Host-provided native client for exactly one platform backend.
///
/// The variants are mutually exclusive by construction: a host hands over
/// the one bridge its platform has, and [`HealthData`] binds the matching
/// adapter. Callers never see both backends.
#[derive(Clone)]
pub enum PlatformClient {
    /// iOS `HealthKit` bridge
    HealthKit(Arc<dyn HealthKitClient>),
    /// Android Google Fit bridge
    GoogleFit(Arc<dyn GoogleFitClient>),
}

impl PlatformClient {
    /// The platform this client serves.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            Self::HealthKit(_) => Platform::Ios,
            Self::GoogleFit(_) => Platform::Android,
        }
    }
}

/// The caller-facing health data facade.
///
/// Binds one backend adapter at construction and re-exports the two
/// operations of [`HealthDataProvider`] unchanged. This type adds no logic
/// of its own: success and failure shapes are exactly those of the bound
/// adapter, and both adapters guarantee identical shapes.
pub struct HealthData {
    provider: Box<dyn HealthDataProvider>,
}

impl HealthData {
    /// Bind the backend adapter matching the supplied native client.
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        let provider: Box<dyn HealthDataProvider> = match client {
            PlatformClient::HealthKit(c) => Box::new(HealthKitProvider::new(c)),
            PlatformClient::GoogleFit(c) => Box::new(GoogleFitProvider::new(c)),
        };
        info!(provider = provider.name(), "bound health data backend");
        Self { provider }
    }

    /// Name of the bound backend.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Request read access to the given metrics.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::FailedInit`] when the native provider reports a
    /// negative outcome.
    pub async fn authorize(&self, metrics: &[MetricType]) -> Result<(), DataError> {
        self.provider.authorize(metrics).await
    }

    /// Read normalized samples for one metric over the given range.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::FailedQuery`] on any native error outcome.
    pub async fn read(
        &self,
        metric: MetricType,
        range: &TimeRange,
    ) -> Result<Vec<Sample>, DataError> {
        self.provider.read(metric, range).await
    }
}
