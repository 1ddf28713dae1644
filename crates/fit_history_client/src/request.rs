//! Read request construction for the aggregated history query.

use std::fmt;

use serde::Serialize;

use crate::HistoryError;

/// Half-open `[start, end)` window in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    start: i64,
    end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Result<Self, HistoryError> {
        if start < 0 || end < 0 || start > end {
            return Err(HistoryError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = chrono::DateTime::from_timestamp_millis(self.start);
        let end = chrono::DateTime::from_timestamp_millis(self.end);
        match (start, end) {
            (Some(s), Some(e)) => write!(f, "{}..{}", s.to_rfc3339(), e.to_rfc3339()),
            _ => write!(f, "{}..{}", self.start, self.end),
        }
    }
}

/// Provider data types read by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataTypeId {
    StepCountDelta,
    CaloriesExpended,
    DistanceDelta,
    Speed,
}

impl DataTypeId {
    pub fn name(self) -> &'static str {
        match self {
            DataTypeId::StepCountDelta => "com.google.step_count.delta",
            DataTypeId::CaloriesExpended => "com.google.calories.expended",
            DataTypeId::DistanceDelta => "com.google.distance.delta",
            DataTypeId::Speed => "com.google.speed",
        }
    }

    /// Output type produced when the provider aggregates this type.
    pub fn aggregate_name(self) -> &'static str {
        match self {
            DataTypeId::Speed => "com.google.speed.summary",
            other => other.name(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateBy {
    pub data_type_name: &'static str,
    pub output_data_type_name: &'static str,
}

impl From<DataTypeId> for AggregateBy {
    fn from(id: DataTypeId) -> Self {
        Self {
            data_type_name: id.name(),
            output_data_type_name: id.aggregate_name(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BucketDuration {
    pub min_duration_millis: i64,
}

/// How the provider groups data into buckets.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Bucketing {
    BucketByActivitySegment(BucketDuration),
    BucketBySession(BucketDuration),
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadRequest {
    pub aggregate_by: Vec<AggregateBy>,
    #[serde(flatten)]
    pub bucketing: Bucketing,
    pub start_time_millis: i64,
    pub end_time_millis: i64,
}

impl ReadRequest {
    /// Steps, calories and distance bucketed by activity segment (1 s minimum).
    pub fn activity_segments(range: TimeRange) -> Self {
        Self {
            aggregate_by: Self::aggregates(&[
                DataTypeId::StepCountDelta,
                DataTypeId::CaloriesExpended,
                DataTypeId::DistanceDelta,
            ]),
            bucketing: Bucketing::BucketByActivitySegment(BucketDuration {
                min_duration_millis: 1_000,
            }),
            start_time_millis: range.start(),
            end_time_millis: range.end(),
        }
    }

    /// Steps, calories, distance and speed summary bucketed by session (5 s minimum).
    pub fn sessions(range: TimeRange) -> Self {
        Self {
            aggregate_by: Self::aggregates(&[
                DataTypeId::StepCountDelta,
                DataTypeId::CaloriesExpended,
                DataTypeId::DistanceDelta,
                DataTypeId::Speed,
            ]),
            bucketing: Bucketing::BucketBySession(BucketDuration {
                min_duration_millis: 5_000,
            }),
            start_time_millis: range.start(),
            end_time_millis: range.end(),
        }
    }

    fn aggregates(ids: &[DataTypeId]) -> Vec<AggregateBy> {
        ids.iter().copied().map(AggregateBy::from).collect()
    }
}
