// ABOUTME: Static lookup tables mapping the metric vocabulary to platform tokens
// ABOUTME: Plain immutable key-value data, no logic beyond lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Backend provider names as reported by `HealthDataProvider::name`
pub mod provider_names {
    /// The iOS backend
    pub const HEALTHKIT: &str = "healthkit";
    /// The Android backend
    pub const GOOGLE_FIT: &str = "google_fit";
}

/// `HealthKit` read-permission tokens
pub mod healthkit_permissions {
    /// Heart rate samples permission
    pub const HEART_RATE: &str = "HeartRate";
}

/// Google Fit data type tokens
pub mod google_fit_data_types {
    /// Heart rate in beats per minute
    pub const HEART_RATE_BPM: &str = "com.google.heart_rate.bpm";
}
