// ABOUTME: Main library entry point for the wearables-bridge health data facade
// ABOUTME: Exposes one authorize/read contract over HealthKit and Google Fit backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # wearables-bridge
//!
//! A cross-platform data-access facade for heart-rate samples over two
//! mutually exclusive mobile health backends: `HealthKit` on iOS and
//! Google Fit on Android.
//!
//! The crate's entire surface is one pair of operations — [`HealthData::authorize`]
//! and [`HealthData::read`] — with the guarantee that both backends behave
//! identically from the caller's point of view: same metric vocabulary, same
//! success shape, same two-category failure shape.
//!
//! The native health providers themselves are not part of this crate. The
//! embedding host (the FFI/bridge layer) implements one of two client traits
//! ([`providers::healthkit::HealthKitClient`] or
//! [`providers::google_fit::GoogleFitClient`]) and hands it to [`HealthData`],
//! which binds the matching backend adapter at construction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use wearables_bridge::{HealthData, MetricType, PlatformClient, TimeRange};
//! # use wearables_bridge::providers::google_fit::GoogleFitClient;
//!
//! # async fn example(client: Arc<dyn GoogleFitClient>) -> Result<(), wearables_bridge::DataError> {
//! let data = HealthData::new(PlatformClient::GoogleFit(client));
//!
//! data.authorize(&[MetricType::HeartRateBpm]).await?;
//!
//! let range = TimeRange {
//!     start_date: Utc.with_ymd_and_hms(2018, 5, 1, 0, 0, 0).single().unwrap_or_default(),
//!     end_date: Utc.with_ymd_and_hms(2018, 5, 10, 0, 0, 0).single().unwrap_or_default(),
//! };
//! let samples = data.read(MetricType::HeartRateBpm, &range).await?;
//! # Ok(())
//! # }
//! ```

/// Static lookup tables mapping the metric vocabulary to platform tokens
pub mod constants;

/// Caller-facing facade binding one platform backend at construction
pub mod data;

/// The closed two-category error vocabulary shared by both backends
pub mod errors;

/// Logging configuration for embedding hosts
pub mod logging;

/// Shared data model: normalized samples and caller-supplied time ranges
pub mod models;

/// Backend adapters and the native client traits they consume
pub mod providers;

/// The closed metric vocabulary shared by both backends
pub mod types;

pub use data::{HealthData, Platform, PlatformClient};
pub use errors::DataError;
pub use models::{Sample, TimeRange};
pub use providers::HealthDataProvider;
pub use types::MetricType;
