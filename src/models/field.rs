use super::slot::Slot;
use crate::utils::time::UNSET_TIME;
use serde::{Deserialize, Serialize};

/// One row of the entry form, as posted by and sent to the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Field {
    pub name: String,
    pub km: i32,
    pub time: String,
}

impl Field {
    /// Empty form row for a slot.
    pub fn blank(slot: Slot) -> Self {
        Self {
            name: slot.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn new(slot: Slot, km: i32, time: impl Into<String>) -> Self {
        Self {
            name: slot.as_str().to_string(),
            km,
            time: time.into(),
        }
    }

    /// The slot this field addresses, `None` for unrecognised names.
    pub fn slot(&self) -> Option<Slot> {
        self.name.parse().ok()
    }

    /// Posted time, `None` when left empty (or echoed back as the unset marker).
    pub fn time_value(&self) -> Option<&str> {
        let t = self.time.trim();
        if t.is_empty() || t == UNSET_TIME {
            None
        } else {
            Some(t)
        }
    }
}
