//! Wire model of the upstream history result tree.
//!
//! Buckets hold data sets, data sets hold data points, and every data point
//! carries its data type's ordered field list with a parallel list of values.
//! Metadata that the provider may omit is modelled as `Option` and exposed via
//! accessors so callers fall back to defaults instead of failing.

use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataReadResult {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(deserialize_with = "deserialize_millis")]
    pub start_time_millis: i64,
    #[serde(deserialize_with = "deserialize_millis")]
    pub end_time_millis: i64,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
}

impl Bucket {
    /// True when at least one data set holds a data point.
    pub fn has_data(&self) -> bool {
        self.data_sets.iter().any(|ds| !ds.data_points.is_empty())
    }

    /// All data points in data set order, then point order.
    pub fn data_points(&self) -> impl Iterator<Item = &DataPoint> {
        self.data_sets.iter().flat_map(|ds| ds.data_points.iter())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub app_package_name: Option<String>,
    #[serde(default)]
    pub ongoing: bool,
    #[serde(default, deserialize_with = "deserialize_opt_millis")]
    pub active_time_millis: Option<i64>,
}

impl Session {
    /// Active time in whole seconds, when the session reports one.
    pub fn active_time_secs(&self) -> Option<i64> {
        self.active_time_millis.map(|ms| ms / 1_000)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub data_type: DataType,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub original_data_source: Option<DataSource>,
}

impl DataPoint {
    /// Pair each declared field with its value. Fields without a value are skipped.
    pub fn field_values(&self) -> impl Iterator<Item = (&Field, &Value)> {
        self.data_type.fields.iter().zip(self.values.iter())
    }

    pub fn device(&self) -> Option<&Device> {
        self.original_data_source.as_ref()?.device.as_ref()
    }

    /// Type code of the originating device. A device that omits its type
    /// reports the provider's unknown code (0).
    pub fn device_type_code(&self) -> Option<i32> {
        self.device().map(|d| d.device_type.unwrap_or(0))
    }

    pub fn app_package_name(&self) -> Option<&str> {
        self.original_data_source.as_ref()?.app_package_name.as_deref()
    }

    pub fn stream_name(&self) -> Option<&str> {
        self.original_data_source.as_ref()?.stream_name.as_deref()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DataType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
}

/// One field value; the provider fills whichever slot matches the field format.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(default)]
    pub int_val: Option<i64>,
    #[serde(default)]
    pub fp_val: Option<f64>,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        self.int_val.or_else(|| self.fp_val.map(|v| v as i64))
    }

    pub fn as_float(&self) -> Option<f64> {
        self.fp_val.or_else(|| self.int_val.map(|v| v as f64))
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(default)]
    pub app_package_name: Option<String>,
    #[serde(default)]
    pub stream_name: Option<String>,
    #[serde(default)]
    pub device: Option<Device>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Device {
    #[serde(default, rename = "type")]
    pub device_type: Option<i32>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl Device {
    /// `"{manufacturer}:{model}"` when both are known.
    pub fn descriptor(&self) -> Option<String> {
        let manufacturer = self.manufacturer.as_deref()?;
        let model = self.model.as_deref()?;
        Some(format!("{manufacturer}:{model}"))
    }
}

// The provider encodes 64-bit millisecond counters as decimal strings; plain
// JSON numbers are accepted too.
fn deserialize_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = serde_json::Value::deserialize(deserializer)?;
    millis_from_json(&value).ok_or_else(|| {
        D::Error::custom(format!("expected millisecond number or string, got {value}"))
    })
}

fn deserialize_opt_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => millis_from_json(&v).map(Some).ok_or_else(|| {
            D::Error::custom(format!("expected millisecond number or string, got {v}"))
        }),
    }
}

fn millis_from_json(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
