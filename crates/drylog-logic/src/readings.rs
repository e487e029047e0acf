//! Atmospheric readings per chamber — GPP, dehumidifier count, grain depression.

use serde::{Deserialize, Serialize};

use crate::psychrometrics::{calculate_gpp, grain_depression};
use crate::records::{AtmosphericReading, ReadingType};

impl AtmosphericReading {
    /// Derived absolute humidity; `None` when the pair is unusable.
    pub fn gpp(&self) -> Option<f64> {
        calculate_gpp(self.temp_f, self.rh_percent)
    }

    fn is_for_chamber(&self, chamber_id: &str) -> bool {
        self.chamber_id.as_deref() == Some(chamber_id)
    }
}

/// Number of dehumidifiers in a chamber, inferred from the highest
/// `dehu_number` among its recorded exhaust readings. Zero when none.
pub fn infer_dehu_count(readings: &[AtmosphericReading], chamber_id: &str) -> u32 {
    readings
        .iter()
        .filter(|r| {
            r.reading_type == ReadingType::ChamberDehuExhaust && r.is_for_chamber(chamber_id)
        })
        .filter_map(|r| r.dehu_number)
        .max()
        .unwrap_or(0)
}

/// First reading of the given type that is not tied to a chamber.
pub fn site_reading(
    readings: &[AtmosphericReading],
    reading_type: ReadingType,
) -> Option<&AtmosphericReading> {
    readings
        .iter()
        .find(|r| r.reading_type == reading_type && r.chamber_id.is_none())
}

/// Exhaust result for one dehumidifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DehuExhaust {
    pub dehu_number: u32,
    pub gpp: Option<f64>,
    /// Intake GPP minus this unit's exhaust GPP.
    pub grain_depression: Option<f64>,
}

/// Derived atmospheric picture of one chamber for a visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamberAtmosphere {
    pub chamber_id: String,
    pub intake_gpp: Option<f64>,
    pub dehu_count: u32,
    /// One entry per dehu number `1..=dehu_count`, in order.
    pub exhausts: Vec<DehuExhaust>,
}

/// Summarize a chamber's intake and per-dehumidifier exhaust readings.
///
/// Dehumidifiers without an exhaust reading still get an entry, with
/// `None` values.
pub fn summarize_chamber(readings: &[AtmosphericReading], chamber_id: &str) -> ChamberAtmosphere {
    let intake_gpp = readings
        .iter()
        .find(|r| r.reading_type == ReadingType::ChamberIntake && r.is_for_chamber(chamber_id))
        .and_then(AtmosphericReading::gpp);

    let dehu_count = infer_dehu_count(readings, chamber_id);
    let exhausts = (1..=dehu_count)
        .map(|n| {
            let gpp = readings
                .iter()
                .find(|r| {
                    r.reading_type == ReadingType::ChamberDehuExhaust
                        && r.is_for_chamber(chamber_id)
                        && r.dehu_number == Some(n)
                })
                .and_then(AtmosphericReading::gpp);
            DehuExhaust {
                dehu_number: n,
                gpp,
                grain_depression: grain_depression(intake_gpp, gpp),
            }
        })
        .collect();

    ChamberAtmosphere {
        chamber_id: chamber_id.to_string(),
        intake_gpp,
        dehu_count,
        exhausts,
    }
}
