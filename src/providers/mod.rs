// ABOUTME: Backend adapters for platform health data providers with one shared contract
// ABOUTME: Both backends expose identical authorize/read semantics to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::DataError;
use crate::models::{Sample, TimeRange};
use crate::types::MetricType;
use async_trait::async_trait;
use std::fmt;

pub mod google_fit;
pub mod google_fit_provider;
pub mod healthkit;
pub mod healthkit_provider;

/// The shared contract every backend adapter implements.
///
/// Both adapters guarantee identical behavior from the caller's point of
/// view: the same metric vocabulary, the same success shapes, and the same
/// two-category failure shape ([`DataError`]). Each call issues exactly one
/// native operation and settles exactly once; there is no internal retry,
/// caching, queuing, or cancellation.
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Backend name (see [`crate::constants::provider_names`])
    fn name(&self) -> &'static str;

    /// Request read access to the given metrics.
    ///
    /// Triggers exactly one native permission interaction. The metric order
    /// is preserved in the native request.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::FailedInit`] whenever the native provider
    /// reports a negative outcome. Native error detail is not surfaced.
    async fn authorize(&self, metrics: &[MetricType]) -> Result<(), DataError>;

    /// Read normalized samples for one metric over the given range.
    ///
    /// Issues exactly one native query. On success the result is the full
    /// flattened, order-preserving sequence of samples extracted from the
    /// native response; partial results are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::FailedQuery`] on any native error outcome.
    async fn read(&self, metric: MetricType, range: &TimeRange) -> Result<Vec<Sample>, DataError>;
}

/// Opaque failure reported by a native client.
///
/// Carries whatever detail the host-side bridge chooses to attach. The
/// detail is logged at the adapter boundary and collapsed to a
/// [`DataError`] category; it never reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError(String);

impl NativeError {
    /// Wrap a native failure description.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NativeError {}
