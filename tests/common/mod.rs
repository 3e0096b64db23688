// ABOUTME: Shared test stubs and fixtures for the backend adapter tests
// ABOUTME: Stub native clients record exact requests and replay scripted outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;
use wearables_bridge::providers::google_fit::{
    DataReadRequest, DataReadResult, FitnessOptions, GoogleFitClient, RawDataPoint,
};
use wearables_bridge::providers::healthkit::{
    HealthKitClient, InitCallback, InitOptions, RawSample, SampleQuery, SamplesCallback,
};
use wearables_bridge::providers::NativeError;
use wearables_bridge::{Sample, TimeRange};

/// The caller-supplied query range used throughout the scenario battery.
pub fn may_2018_range() -> TimeRange {
    TimeRange {
        start_date: Utc.with_ymd_and_hms(2018, 5, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2018, 5, 10, 0, 0, 0).unwrap(),
    }
}

/// The three readings every success scenario must surface, in this order.
pub fn expected_samples() -> Vec<Sample> {
    vec![
        Sample {
            value: 95.0,
            start_date: "2018-06-06T12:59:47.375Z".to_owned(),
            end_date: "2018-06-06T12:59:47.375Z".to_owned(),
        },
        Sample {
            value: 97.0,
            start_date: "2018-06-06T12:56:01.375Z".to_owned(),
            end_date: "2018-06-06T12:56:01.375Z".to_owned(),
        },
        Sample {
            value: 96.0,
            start_date: "2018-06-06T12:47:45.498Z".to_owned(),
            end_date: "2018-06-06T12:47:45.498Z".to_owned(),
        },
    ]
}

/// Raw samples as the HealthKit bridge would deliver them.
pub fn healthkit_raw_samples() -> Vec<RawSample> {
    expected_samples()
        .into_iter()
        .map(|s| RawSample {
            value: s.value,
            start_date: s.start_date,
            end_date: s.end_date,
        })
        .collect()
}

/// Raw points as the Google Fit bridge would deliver them (epoch millis).
pub fn google_fit_raw_points() -> Vec<RawDataPoint> {
    vec![
        RawDataPoint {
            value: 95.0,
            start_time_millis: 1_528_289_987_375,
            end_time_millis: 1_528_289_987_375,
        },
        RawDataPoint {
            value: 97.0,
            start_time_millis: 1_528_289_761_375,
            end_time_millis: 1_528_289_761_375,
        },
        RawDataPoint {
            value: 96.0,
            start_time_millis: 1_528_289_265_498,
            end_time_millis: 1_528_289_265_498,
        },
    ]
}

/// Scripted behavior for one stubbed native operation.
pub enum Script<T> {
    /// Complete with this outcome
    Respond(T),
    /// Drop the callback / reject without detail
    Abandon,
}

/// Stub HealthKit bridge recording the exact requests it receives.
pub struct StubHealthKit {
    init_outcome: Script<Option<NativeError>>,
    samples_outcome: Script<Result<Vec<RawSample>, NativeError>>,
    pub init_requests: Mutex<Vec<InitOptions>>,
    pub sample_queries: Mutex<Vec<SampleQuery>>,
}

impl StubHealthKit {
    /// Grants permissions and serves the standard fixture samples.
    pub fn healthy() -> Self {
        Self {
            init_outcome: Script::Respond(None),
            samples_outcome: Script::Respond(Ok(healthkit_raw_samples())),
            init_requests: Mutex::new(Vec::new()),
            sample_queries: Mutex::new(Vec::new()),
        }
    }

    /// Serves the given raw samples on query.
    pub fn serving(samples: Vec<RawSample>) -> Self {
        let mut stub = Self::healthy();
        stub.samples_outcome = Script::Respond(Ok(samples));
        stub
    }

    /// Reports a native error on both operations.
    pub fn failing() -> Self {
        let mut stub = Self::healthy();
        stub.init_outcome = Script::Respond(Some(NativeError::new("HKError 4: not authorized")));
        stub.samples_outcome = Script::Respond(Err(NativeError::new("HKError 11: query failed")));
        stub
    }

    /// Drops its callbacks without ever invoking them.
    pub fn unresponsive() -> Self {
        let mut stub = Self::healthy();
        stub.init_outcome = Script::Abandon;
        stub.samples_outcome = Script::Abandon;
        stub
    }
}

impl HealthKitClient for StubHealthKit {
    fn init_health_kit(&self, options: InitOptions, on_complete: InitCallback) {
        self.init_requests.lock().unwrap().push(options);
        match &self.init_outcome {
            Script::Respond(outcome) => on_complete(outcome.clone()),
            Script::Abandon => drop(on_complete),
        }
    }

    fn get_heart_rate_samples(&self, query: SampleQuery, on_complete: SamplesCallback) {
        self.sample_queries.lock().unwrap().push(query);
        match &self.samples_outcome {
            Script::Respond(outcome) => on_complete(outcome.clone()),
            Script::Abandon => drop(on_complete),
        }
    }
}

/// Stub Google Fit bridge recording the finalized requests it receives.
pub struct StubGoogleFit {
    permission_outcome: Script<Result<(), NativeError>>,
    read_outcome: Script<Result<DataReadResult, NativeError>>,
    pub permission_requests: Mutex<Vec<FitnessOptions>>,
    pub read_requests: Mutex<Vec<DataReadRequest>>,
}

impl StubGoogleFit {
    /// Grants permissions and serves the standard fixture points in one data set.
    pub fn healthy() -> Self {
        Self {
            permission_outcome: Script::Respond(Ok(())),
            read_outcome: Script::Respond(Ok(DataReadResult {
                data_sets: vec![google_fit_raw_points()],
            })),
            permission_requests: Mutex::new(Vec::new()),
            read_requests: Mutex::new(Vec::new()),
        }
    }

    /// Resolves reads with the given nested data sets.
    pub fn serving(data_sets: Vec<Vec<RawDataPoint>>) -> Self {
        let mut stub = Self::healthy();
        stub.read_outcome = Script::Respond(Ok(DataReadResult { data_sets }));
        stub
    }

    /// Rejects both operations with a native error.
    pub fn failing() -> Self {
        let mut stub = Self::healthy();
        stub.permission_outcome =
            Script::Respond(Err(NativeError::new("SIGN_IN_REQUIRED")));
        stub.read_outcome = Script::Respond(Err(NativeError::new("API_UNAVAILABLE")));
        stub
    }
}

#[async_trait]
impl GoogleFitClient for StubGoogleFit {
    async fn request_permissions(&self, options: FitnessOptions) -> Result<(), NativeError> {
        self.permission_requests.lock().unwrap().push(options);
        match &self.permission_outcome {
            Script::Respond(outcome) => outcome.clone(),
            Script::Abandon => Err(NativeError::new("abandoned")),
        }
    }

    async fn read_data(&self, request: DataReadRequest) -> Result<DataReadResult, NativeError> {
        self.read_requests.lock().unwrap().push(request);
        match &self.read_outcome {
            Script::Respond(outcome) => outcome.clone(),
            Script::Abandon => Err(NativeError::new("abandoned")),
        }
    }
}
