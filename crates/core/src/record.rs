//! The boat entry record and its on-disk column layout.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Column headers of the backing file, in fixed order.
pub const COLUMNS: [&str; 4] = [
    "Last Name",
    "First Name",
    "Number of Pennies",
    "Boat Volume",
];

/// One validated boat entry.
///
/// Field renames match [`COLUMNS`] so the record (de)serializes directly
/// against the backing file's header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatRecord {
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Number of Pennies")]
    pub penny_count: i64,
    #[serde(rename = "Boat Volume")]
    pub boat_volume: f64,
}

impl BoatRecord {
    /// Re-check the record invariants.
    ///
    /// Used by the store when loading rows that did not come through the
    /// form validator (e.g. a hand-edited file).
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.last_name.is_empty() || self.first_name.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if !self.boat_volume.is_finite() {
            return Err(ValidationError::ParseError);
        }
        if self.penny_count <= 0 || self.boat_volume <= 0.0 {
            return Err(ValidationError::OutOfRange);
        }
        Ok(())
    }
}
