use super::field::Field;
use super::slot::Slot;
use serde::Serialize;

/// What the entry form shows for a requested date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayState {
    pub fields: Vec<Field>,
    /// Path hint (`input/DDMMYYYY`) to a previous day with a missing punch.
    pub last_day_error: String,
    /// Best known odometer reading before this day.
    pub last_day_km: i32,
}

impl DayState {
    /// Four empty rows, one per slot.
    pub fn blank() -> Self {
        Self {
            fields: Slot::ALL.iter().map(|s| Field::blank(*s)).collect(),
            ..Default::default()
        }
    }
}
