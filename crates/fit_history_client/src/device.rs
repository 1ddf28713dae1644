//! Device classification from provider device-type codes.

use crate::model::DataPoint;

/// Provider device classes. Codes follow the provider's `Device.TYPE_*` constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    Unknown,
    Phone,
    Tablet,
    Watch,
    ChestStrap,
    Scale,
    HeadMounted,
}

impl DeviceType {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => DeviceType::Phone,
            2 => DeviceType::Tablet,
            3 => DeviceType::Watch,
            4 => DeviceType::ChestStrap,
            5 => DeviceType::Scale,
            6 => DeviceType::HeadMounted,
            _ => DeviceType::Unknown,
        }
    }

    /// Coarse platform label used by activity samples.
    pub fn platform_label(self) -> &'static str {
        match self {
            DeviceType::Watch => "Android Wear",
            _ => "Android",
        }
    }

    /// Device category label used by session samples; `None` for unknown codes.
    pub fn category_label(self) -> Option<&'static str> {
        match self {
            DeviceType::Phone => Some("phone"),
            DeviceType::Tablet => Some("tablet"),
            DeviceType::Watch => Some("watch"),
            DeviceType::ChestStrap => Some("chest_strap"),
            DeviceType::Scale => Some("scale"),
            DeviceType::HeadMounted => Some("head_mounted"),
            DeviceType::Unknown => None,
        }
    }
}

/// Device class of the point's originating source, if the source reports one.
pub fn classify(point: &DataPoint) -> Option<DeviceType> {
    let code = point.device_type_code();
    if code.is_none() {
        tracing::debug!(
            "device metadata unavailable for data point of type {}",
            point.data_type.name
        );
    }
    code.map(DeviceType::from_code)
}
