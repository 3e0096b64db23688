// ABOUTME: Native surface consumed from the iOS HealthKit bridge
// ABOUTME: Callback-style client trait plus the request and raw response shapes it exchanges
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::healthkit_permissions;
use crate::types::MetricType;
use serde::{Deserialize, Serialize};

use super::NativeError;

/// Completion callback for a permission request.
///
/// `None` means the native call succeeded. `FnOnce` makes at-most-once
/// invocation a type-level guarantee: a bridge cannot fire the callback
/// twice even if the underlying platform misbehaves.
pub type InitCallback = Box<dyn FnOnce(Option<NativeError>) + Send>;

/// Completion callback for a sample query.
///
/// Exactly one of the two sides is meaningful: an error, or the raw samples.
pub type SamplesCallback = Box<dyn FnOnce(Result<Vec<RawSample>, NativeError>) + Send>;

/// The capability the iOS host bridge implements.
///
/// Mirrors the callback-style `HealthKit` bridge interface: each call
/// invokes its completion callback at most once, off whatever thread the
/// native side chooses.
pub trait HealthKitClient: Send + Sync {
    /// Request read permissions. The callback receives `None` on success.
    fn init_health_kit(&self, options: InitOptions, on_complete: InitCallback);

    /// Query heart rate samples over the range carried by `query`.
    fn get_heart_rate_samples(&self, query: SampleQuery, on_complete: SamplesCallback);
}

/// Permission request shape: `{ "permissions": { "read": [...] } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitOptions {
    /// Requested permission scopes
    pub permissions: PermissionScope,
}

/// Read-permission scope listing `HealthKit` permission tokens in caller order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionScope {
    /// Permission tokens, in the order the caller requested the metrics
    pub read: Vec<&'static str>,
}

/// Sample query shape with ISO-8601 date bounds.
///
/// `HealthKit` expects the range as serialized absolute-time strings, in the
/// exact shape JavaScript's `Date.toISOString()` produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleQuery {
    /// Range start, ISO-8601 with millisecond precision
    pub start_date: String,
    /// Range end, ISO-8601 with millisecond precision
    pub end_date: String,
}

/// Raw sample as delivered by the `HealthKit` bridge.
///
/// Already carries serialized dates; the adapter passes them through into
/// the normalized [`crate::models::Sample`] unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    /// Reading value
    pub value: f64,
    /// Interval start, as serialized by the bridge
    pub start_date: String,
    /// Interval end, as serialized by the bridge
    pub end_date: String,
}

/// `HealthKit` permission token for a metric.
#[must_use]
pub const fn permission_token(metric: MetricType) -> &'static str {
    match metric {
        MetricType::HeartRateBpm => healthkit_permissions::HEART_RATE,
    }
}
