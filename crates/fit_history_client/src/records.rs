//! Flat output records handed to the application layer.

use schemars::JsonSchema;
use serde::Serialize;

/// Numeric measurements collected from a bucket's fields. Absent values are
/// omitted from the serialized record.
#[derive(Clone, Debug, Default, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_average: Option<f64>,
}

/// Measurements an activity sample can carry; speed summaries are session-only.
#[derive(Clone, Debug, Default, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMeasurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl From<Measurements> for ActivityMeasurements {
    fn from(m: Measurements) -> Self {
        Self {
            quantity: m.quantity,
            distance: m.distance,
            calories: m.calories,
        }
    }
}

/// One activity-segment bucket.
#[derive(Clone, Debug, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySample {
    pub start: i64,
    pub end: i64,
    pub activity_name: String,
    #[serde(flatten)]
    pub measurements: ActivityMeasurements,
    pub device: String,
    /// Same value as `device`.
    pub source_name: String,
    pub source_id: String,
    pub tracked: bool,
}

/// One session bucket.
#[derive(Clone, Debug, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionSample {
    pub start: i64,
    pub end: i64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub activity_id: String,
    pub activity_name: Option<String>,
    pub source_id: Option<String>,
    pub is_ongoing: bool,
    /// Seconds, truncated.
    pub elapsed_time: i64,
    /// Seconds of active time; serialized as `null` when the session has none.
    pub moving_time: Option<i64>,
    #[serde(flatten)]
    pub measurements: Measurements,
    /// `"{manufacturer}:{model}"` of the last point that reported both.
    pub device: String,
    /// Device category label (phone, watch, ...).
    pub source_name: String,
    pub tracked: bool,
    pub user_input: bool,
}

/// Whole-second aligned bounds mark a bucket as untracked.
pub fn is_tracked(start: i64, end: i64) -> bool {
    !(start.rem_euclid(1_000) == 0 && end.rem_euclid(1_000) == 0)
}
