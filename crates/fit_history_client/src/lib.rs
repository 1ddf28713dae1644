//! Fitness history client: reads aggregated activity and session buckets from
//! an upstream history API and flattens them into JSON-ready sample records.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod config;
pub mod device;
pub mod fields;
pub mod flatten;
pub mod history;
pub mod http_client;
pub mod model;
pub mod records;
pub mod request;

pub use history::{ActivityHistory, READ_TIMEOUT};
pub use model::DataReadResult;
pub use records::{ActivityMeasurements, ActivitySample, Measurements, SessionSample};
pub use request::{ReadRequest, TimeRange};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),
    #[error("history data unavailable: {0}")]
    DataUnavailable(String),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("invalid time range: start {start} is after end {end} or negative")]
    InvalidTimeRange { start: i64, end: i64 },
    #[error("configuration error: {0}")]
    Config(String),
}

/// Upstream aggregated history query interface.
///
/// Implementors are assumed to be authenticated and connected already; the
/// connection lifecycle is not managed here.
#[async_trait]
pub trait HistoryApi: Send + Sync + 'static {
    async fn read_data(&self, request: &ReadRequest) -> Result<DataReadResult, HistoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_error_mentions_duration() {
        let e = HistoryError::Timeout(Duration::from_secs(60));
        assert_eq!(e.to_string(), "upstream did not respond within 60s");
    }

    #[test]
    fn invalid_range_error_reports_bounds() {
        let e = HistoryError::InvalidTimeRange { start: 10, end: 5 };
        assert!(e.to_string().contains("start 10"));
        assert!(e.to_string().contains("end 5"));
    }
}
