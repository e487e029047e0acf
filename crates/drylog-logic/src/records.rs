//! Records read from the job's record store.
//!
//! The store owns these rows; this crate only reads them. Field names follow
//! the store's snake_case JSON so rows deserialize directly.

use serde::{Deserialize, Serialize};

use crate::constants::{ChamberColor, MaterialCode};

/// Identifier assigned by the record store.
pub type RecordId = String;

/// Where an atmospheric reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    /// Unaffected area of the structure (the dry reference).
    Unaffected,
    Outside,
    /// Air entering a chamber's dehumidifiers.
    ChamberIntake,
    /// Air leaving one dehumidifier, identified by `dehu_number`.
    ChamberDehuExhaust,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericReading {
    pub reading_type: ReadingType,
    #[serde(default)]
    pub chamber_id: Option<RecordId>,
    /// 1-based dehumidifier number within the chamber.
    #[serde(default)]
    pub dehu_number: Option<u32>,
    pub temp_f: f64,
    pub rh_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureReading {
    pub ref_point_id: RecordId,
    /// Percent moisture content.
    pub reading_value: f64,
}

/// A numbered spot in a room where moisture is read on every visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub id: RecordId,
    pub room_id: RecordId,
    pub material_code: MaterialCode,
    pub ref_number: u32,
}

/// Normal moisture value for one material on a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub material_code: MaterialCode,
    pub baseline_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chamber {
    pub id: RecordId,
    pub name: String,
    pub color: ChamberColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RecordId,
    /// Empty until the room is assigned to a chamber.
    #[serde(default)]
    pub chamber_id: Option<RecordId>,
    pub name: String,
}

impl Room {
    /// An empty `chamber_id` counts as unassigned.
    pub fn is_assigned(&self) -> bool {
        self.chamber_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: RecordId,
    pub visit_number: u32,
}
