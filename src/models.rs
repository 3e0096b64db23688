// ABOUTME: Shared data model for normalized health readings and query time ranges
// ABOUTME: Samples are produced only by backend adapters, never constructed by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized health reading.
///
/// Produced by a backend adapter from raw provider output. The date fields
/// are serialized absolute-time strings in the form the native bridge
/// delivers them (ISO-8601); the adapters guarantee both platforms emit the
/// same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Reading value in the metric's unit (beats per minute for heart rate)
    pub value: f64,
    /// Start of the interval the reading covers, ISO-8601
    pub start_date: String,
    /// End of the interval the reading covers, ISO-8601
    pub end_date: String,
}

/// Caller-supplied time range bounding a read query.
///
/// Adapters pass the range through unmodified — no mutation, defaulting, or
/// validation. Supplying `start_date` after `end_date` is a caller error;
/// the range reaches the native provider as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// Inclusive start instant
    pub start_date: DateTime<Utc>,
    /// Inclusive end instant
    pub end_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sample_serializes_camel_case() {
        let sample = Sample {
            value: 95.0,
            start_date: "2018-06-06T13:59:47.375Z".to_owned(),
            end_date: "2018-06-06T13:59:47.375Z".to_owned(),
        };
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["value"], 95.0);
        assert_eq!(json["startDate"], "2018-06-06T13:59:47.375Z");
        assert_eq!(json["endDate"], "2018-06-06T13:59:47.375Z");
    }

    #[test]
    fn time_range_round_trips_through_serde() {
        let range = TimeRange {
            start_date: Utc.with_ymd_and_hms(2018, 5, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2018, 5, 10, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&range).unwrap();
        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
