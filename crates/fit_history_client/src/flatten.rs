//! Bucket flattening.
//!
//! Each non-empty bucket becomes exactly one record. Data points are folded
//! into a per-bucket accumulator in data set order, then point order, so a
//! later point overwrites any value an earlier point already set. Metadata a
//! point cannot provide leaves the accumulated value as it was.

use crate::device;
use crate::fields::{SampleKind, map_field};
use crate::model::{Bucket, DataPoint};
use crate::records::{ActivitySample, Measurements, SessionSample, is_tracked};

pub fn activity_samples(buckets: &[Bucket]) -> Vec<ActivitySample> {
    buckets.iter().filter_map(activity_sample).collect()
}

pub fn session_samples(buckets: &[Bucket]) -> Vec<SessionSample> {
    buckets.iter().filter_map(session_sample).collect()
}

/// Flatten one activity-segment bucket; `None` if it holds no data points.
pub fn activity_sample(bucket: &Bucket) -> Option<ActivitySample> {
    if !bucket.has_data() {
        return None;
    }
    let acc = bucket
        .data_points()
        .fold(ActivityFold::default(), ActivityFold::absorb);
    let device = acc.device.unwrap_or_default().to_string();
    Some(ActivitySample {
        start: bucket.start_time_millis,
        end: bucket.end_time_millis,
        activity_name: bucket.activity.clone(),
        measurements: acc.measurements.into(),
        source_name: device.clone(),
        device,
        source_id: acc.source_id.unwrap_or_default(),
        tracked: is_tracked(bucket.start_time_millis, bucket.end_time_millis),
    })
}

/// Flatten one session bucket; `None` if it holds no data points or carries
/// no session.
pub fn session_sample(bucket: &Bucket) -> Option<SessionSample> {
    if !bucket.has_data() {
        return None;
    }
    let Some(session) = bucket.session.as_ref() else {
        tracing::warn!(
            "skipping session bucket {}..{} without session metadata",
            bucket.start_time_millis,
            bucket.end_time_millis
        );
        return None;
    };
    let acc = bucket
        .data_points()
        .fold(SessionFold::default(), SessionFold::absorb);
    Some(SessionSample {
        start: bucket.start_time_millis,
        end: bucket.end_time_millis,
        activity_type: session.activity.clone(),
        activity_id: session.identifier.clone(),
        activity_name: session.name.clone(),
        source_id: session.app_package_name.clone(),
        is_ongoing: session.ongoing,
        elapsed_time: bucket.end_time_millis.saturating_sub(bucket.start_time_millis) / 1_000,
        moving_time: session.active_time_secs(),
        measurements: acc.measurements,
        device: acc.device.unwrap_or_default(),
        source_name: acc.source_name.unwrap_or_default().to_string(),
        tracked: is_tracked(bucket.start_time_millis, bucket.end_time_millis),
        user_input: acc.user_input,
    })
}

#[derive(Default)]
struct ActivityFold {
    measurements: Measurements,
    device: Option<&'static str>,
    source_id: Option<String>,
}

impl ActivityFold {
    fn absorb(mut self, point: &DataPoint) -> Self {
        if let Some(kind) = device::classify(point) {
            self.device = Some(kind.platform_label());
        }
        if let Some(package) = point.app_package_name() {
            self.source_id = Some(package.to_string());
        }
        for (field, value) in point.field_values() {
            map_field(&field.name, value, SampleKind::Activity, &mut self.measurements);
        }
        self
    }
}

#[derive(Default)]
struct SessionFold {
    measurements: Measurements,
    device: Option<String>,
    source_name: Option<&'static str>,
    user_input: bool,
}

impl SessionFold {
    fn absorb(mut self, point: &DataPoint) -> Self {
        // sticky: never reset by a later point
        if point.stream_name() == Some("user_input") {
            self.user_input = true;
        }
        if let Some(descriptor) = point.device().and_then(|d| d.descriptor()) {
            self.device = Some(descriptor);
        }
        if let Some(label) = device::classify(point).and_then(|kind| kind.category_label()) {
            self.source_name = Some(label);
        }
        for (field, value) in point.field_values() {
            map_field(&field.name, value, SampleKind::Session, &mut self.measurements);
        }
        self
    }
}
