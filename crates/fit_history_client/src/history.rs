//! Activity and session history reads.

use std::sync::Arc;
use std::time::Duration;

use crate::flatten;
use crate::model::DataReadResult;
use crate::records::{ActivitySample, SessionSample};
use crate::request::{ReadRequest, TimeRange};
use crate::{HistoryApi, HistoryError};

/// Upper bound on a single upstream read. Not retried.
pub const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Reads history from a [`HistoryApi`] and flattens it into samples.
///
/// Every call issues exactly one upstream read and builds its output from
/// scratch; nothing is shared between calls besides the client.
#[derive(Clone)]
pub struct ActivityHistory {
    api: Arc<dyn HistoryApi>,
}

impl ActivityHistory {
    pub fn new(api: Arc<dyn HistoryApi>) -> Self {
        Self { api }
    }

    /// Steps, distance and calories per activity segment in `[start_time, end_time)`.
    pub async fn get_activity_samples(
        &self,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<ActivitySample>, HistoryError> {
        let range = TimeRange::new(start_time, end_time)?;
        let result = self.read(ReadRequest::activity_segments(range)).await?;
        let samples = flatten::activity_samples(&result.buckets);
        tracing::debug!(
            "activity history {}: {} buckets -> {} samples",
            range,
            result.buckets.len(),
            samples.len()
        );
        Ok(samples)
    }

    /// Per-session aggregates, including speed summary, in `[start_time, end_time)`.
    pub async fn get_session_samples(
        &self,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<SessionSample>, HistoryError> {
        let range = TimeRange::new(start_time, end_time)?;
        let result = self.read(ReadRequest::sessions(range)).await?;
        let samples = flatten::session_samples(&result.buckets);
        tracing::debug!(
            "session history {}: {} buckets -> {} samples",
            range,
            result.buckets.len(),
            samples.len()
        );
        Ok(samples)
    }

    async fn read(&self, request: ReadRequest) -> Result<DataReadResult, HistoryError> {
        match tokio::time::timeout(READ_TIMEOUT, self.api.read_data(&request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    "history read timed out after {:?} ({}..{})",
                    READ_TIMEOUT,
                    request.start_time_millis,
                    request.end_time_millis
                );
                Err(HistoryError::Timeout(READ_TIMEOUT))
            }
        }
    }
}
