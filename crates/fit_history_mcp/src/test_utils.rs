//! In-process `HistoryApi` fakes used by unit tests.
#![cfg(test)]

use async_trait::async_trait;
use serde_json::json;

use fit_history_client::{DataReadResult, HistoryApi, HistoryError, ReadRequest};

/// Serves the same bucket tree for every request.
pub struct FixtureApi(serde_json::Value);

impl FixtureApi {
    /// One walking bucket with a single phone step point, followed by an empty bucket.
    pub fn walking_and_empty() -> Self {
        Self(json!({
            "buckets": [
                {
                    "startTimeMillis": 1000000,
                    "endTimeMillis": 1065000,
                    "activity": "walking",
                    "session": {"activity": "walking", "identifier": "walk-1", "appPackageName": "com.example.app"},
                    "dataSets": [{"dataPoints": [{
                        "dataType": {"name": "com.google.step_count.delta", "fields": [{"name": "steps", "format": "int"}]},
                        "values": [{"intVal": 500}],
                        "originalDataSource": {"appPackageName": "com.example.app", "device": {"type": 1}}
                    }]}]
                },
                {"startTimeMillis": 1065000, "endTimeMillis": 1070000, "activity": "still", "dataSets": []}
            ]
        }))
    }
}

#[async_trait]
impl HistoryApi for FixtureApi {
    async fn read_data(&self, _request: &ReadRequest) -> Result<DataReadResult, HistoryError> {
        Ok(serde_json::from_value(self.0.clone()).expect("fixture"))
    }
}

/// Upstream that is never reachable.
pub struct FailingApi;

#[async_trait]
impl HistoryApi for FailingApi {
    async fn read_data(&self, _request: &ReadRequest) -> Result<DataReadResult, HistoryError> {
        Err(HistoryError::DataUnavailable("not connected".into()))
    }
}
