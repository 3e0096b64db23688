// ABOUTME: Closed two-category error vocabulary shared verbatim by both backend adapters
// ABOUTME: Every native failure mode collapses to FailedInit or FailedQuery at the adapter edge
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only error categories this crate surfaces.
///
/// Both backend adapters collapse every native failure mode into one of
/// these two categories at the adapter boundary. No native error object,
/// code, or message crosses that boundary; the Display text below is the
/// canonical category message, identical on both platforms. Native detail
/// is logged via `tracing` inside the adapter and then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataError {
    /// Authorization could not be completed by the native provider.
    #[error("failed to initialize health data access")]
    FailedInit,

    /// A read query could not be completed by the native provider.
    #[error("failed to query health data")]
    FailedQuery,
}

impl DataError {
    /// The canonical category message, as surfaced by `Display`.
    #[must_use]
    pub fn message(self) -> String {
        self.to_string()
    }
}
