//! Field-name to output-key mapping.

use crate::model::Value;
use crate::records::Measurements;

/// Which record shape a field is being mapped for. Speed summary fields are
/// only recognized for sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    Activity,
    Session,
}

/// Recognized provider fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappedField {
    Steps,
    Distance,
    Calories,
    SpeedMax,
    SpeedMin,
    SpeedAverage,
}

impl MappedField {
    pub fn resolve(name: &str, kind: SampleKind) -> Option<Self> {
        let field = match name {
            "steps" => MappedField::Steps,
            "distance" => MappedField::Distance,
            "calories" => MappedField::Calories,
            "max" => MappedField::SpeedMax,
            "min" => MappedField::SpeedMin,
            "average" => MappedField::SpeedAverage,
            _ => return None,
        };
        if field.is_speed() && kind == SampleKind::Activity {
            return None;
        }
        Some(field)
    }

    pub fn is_speed(self) -> bool {
        matches!(
            self,
            MappedField::SpeedMax | MappedField::SpeedMin | MappedField::SpeedAverage
        )
    }

    /// JSON key this field is written under.
    pub fn output_key(self) -> &'static str {
        match self {
            MappedField::Steps => "quantity",
            MappedField::Distance => "distance",
            MappedField::Calories => "calories",
            MappedField::SpeedMax => "speedMax",
            MappedField::SpeedMin => "speedMin",
            MappedField::SpeedAverage => "speedAverage",
        }
    }

    /// Overwrite the matching measurement with `value`. A value of the wrong
    /// shape leaves the previous measurement untouched.
    pub fn apply(self, value: &Value, into: &mut Measurements) {
        match self {
            MappedField::Steps => into.quantity = value.as_int().or(into.quantity),
            MappedField::Distance => into.distance = value.as_float().or(into.distance),
            MappedField::Calories => into.calories = value.as_float().or(into.calories),
            MappedField::SpeedMax => into.speed_max = value.as_float().or(into.speed_max),
            MappedField::SpeedMin => into.speed_min = value.as_float().or(into.speed_min),
            MappedField::SpeedAverage => {
                into.speed_average = value.as_float().or(into.speed_average)
            }
        }
    }
}

/// Map one named field value into `into`, logging and dropping unknown names.
pub fn map_field(name: &str, value: &Value, kind: SampleKind, into: &mut Measurements) {
    match MappedField::resolve(name, kind) {
        Some(field) => field.apply(value, into),
        None => tracing::warn!("unhandled field in {:?} sample: {}", kind, name),
    }
}
