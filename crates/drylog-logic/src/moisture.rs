//! Dry-standard evaluation of material moisture readings.
//!
//! A material counts as dry once its reading is within a fixed tolerance of
//! the job's baseline for that material. Baselines are keyed by material
//! code, one per code per job.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::MaterialCode;
use crate::records::{Baseline, MoistureReading, RecordId, ReferencePoint};

/// Percentage points above baseline still considered dry.
pub const DRY_STANDARD_TOLERANCE: f64 = 4.0;

/// `true` when `reading <= baseline + DRY_STANDARD_TOLERANCE`.
/// Missing values are never dry.
pub fn meets_dry_standard(reading_value: Option<f64>, baseline_value: Option<f64>) -> bool {
    meets_dry_standard_within(reading_value, baseline_value, DRY_STANDARD_TOLERANCE)
}

pub fn meets_dry_standard_within(
    reading_value: Option<f64>,
    baseline_value: Option<f64>,
    tolerance: f64,
) -> bool {
    match (reading_value, baseline_value) {
        (Some(reading), Some(baseline)) => reading <= baseline + tolerance,
        _ => false,
    }
}

/// Job baselines, at most one per material code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineSet {
    values: BTreeMap<MaterialCode, f64>,
}

impl BaselineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from store rows. Later rows for the same code win.
    pub fn from_records(baselines: &[Baseline]) -> Self {
        let mut set = Self::new();
        for b in baselines {
            set.upsert(b.material_code, b.baseline_value);
        }
        set
    }

    /// Insert or replace the baseline for `code`. Returns the previous value.
    pub fn upsert(&mut self, code: MaterialCode, value: f64) -> Option<f64> {
        self.values.insert(code, value)
    }

    pub fn get(&self, code: MaterialCode) -> Option<f64> {
        self.values.get(&code).copied()
    }

    pub fn contains(&self, code: MaterialCode) -> bool {
        self.values.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Material codes used by `ref_points` that have no baseline yet,
    /// in code order.
    pub fn missing_codes(&self, ref_points: &[ReferencePoint]) -> Vec<MaterialCode> {
        used_material_codes(ref_points)
            .into_iter()
            .filter(|code| !self.contains(*code))
            .collect()
    }

    pub fn to_records(&self) -> Vec<Baseline> {
        self.values
            .iter()
            .map(|(code, value)| Baseline {
                material_code: *code,
                baseline_value: *value,
            })
            .collect()
    }
}

/// Distinct material codes across a set of reference points.
pub fn used_material_codes(ref_points: &[ReferencePoint]) -> BTreeSet<MaterialCode> {
    ref_points.iter().map(|rp| rp.material_code).collect()
}

/// Dry-standard result for one moisture reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureStatus {
    pub ref_point_id: RecordId,
    /// `None` when the reading points at an unknown reference point.
    pub ref_number: Option<u32>,
    pub material_code: Option<MaterialCode>,
    pub reading_value: f64,
    pub baseline_value: Option<f64>,
    pub dry: bool,
}

/// Evaluate each reading against the baseline for its reference point's
/// material. Readings with no matching reference point or baseline are
/// reported as not dry.
pub fn evaluate_moisture(
    readings: &[MoistureReading],
    ref_points: &[ReferencePoint],
    baselines: &BaselineSet,
    tolerance: f64,
) -> Vec<MoistureStatus> {
    readings
        .iter()
        .map(|reading| {
            let ref_point = ref_points.iter().find(|rp| rp.id == reading.ref_point_id);
            let material_code = ref_point.map(|rp| rp.material_code);
            let baseline_value = material_code.and_then(|code| baselines.get(code));
            MoistureStatus {
                ref_point_id: reading.ref_point_id.clone(),
                ref_number: ref_point.map(|rp| rp.ref_number),
                material_code,
                reading_value: reading.reading_value,
                baseline_value,
                dry: meets_dry_standard_within(
                    Some(reading.reading_value),
                    baseline_value,
                    tolerance,
                ),
            }
        })
        .collect()
}

/// Whether every evaluated reading is dry. An empty evaluation is not.
pub fn drying_goal_met(statuses: &[MoistureStatus]) -> bool {
    !statuses.is_empty() && statuses.iter().all(|s| s.dry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ref_point(id: &str, code: MaterialCode, number: u32) -> ReferencePoint {
        ReferencePoint {
            id: id.into(),
            room_id: "r1".into(),
            material_code: code,
            ref_number: number,
        }
    }

    fn reading(ref_point_id: &str, value: f64) -> MoistureReading {
        MoistureReading {
            ref_point_id: ref_point_id.into(),
            reading_value: value,
        }
    }

    #[test]
    fn test_dry_standard_boundary() {
        assert!(meets_dry_standard(Some(16.0), Some(12.0)));
        assert!(!meets_dry_standard(Some(17.0), Some(12.0)));
        assert!(meets_dry_standard(Some(8.0), Some(12.0)));
    }

    #[test]
    fn test_dry_standard_missing_values() {
        assert!(!meets_dry_standard(None, Some(12.0)));
        assert!(!meets_dry_standard(Some(10.0), None));
        assert!(!meets_dry_standard(None, None));
    }

    #[test]
    fn test_custom_tolerance() {
        assert!(!meets_dry_standard_within(Some(15.0), Some(12.0), 2.0));
        assert!(meets_dry_standard_within(Some(14.0), Some(12.0), 2.0));
    }

    #[test]
    fn test_baseline_upsert_replaces() {
        let mut set = BaselineSet::new();
        assert_eq!(set.upsert(MaterialCode::Drywall, 10.0), None);
        assert_eq!(set.upsert(MaterialCode::Drywall, 12.0), Some(10.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(MaterialCode::Drywall), Some(12.0));
    }

    #[test]
    fn test_baseline_from_records_one_per_code() {
        let rows = vec![
            Baseline { material_code: MaterialCode::Drywall, baseline_value: 10.0 },
            Baseline { material_code: MaterialCode::Subfloor, baseline_value: 14.0 },
            Baseline { material_code: MaterialCode::Drywall, baseline_value: 11.0 },
        ];
        let set = BaselineSet::from_records(&rows);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(MaterialCode::Drywall), Some(11.0));
        assert_eq!(set.to_records().len(), 2);
    }

    #[test]
    fn test_missing_codes() {
        let points = vec![
            ref_point("p1", MaterialCode::Drywall, 1),
            ref_point("p2", MaterialCode::Drywall, 2),
            ref_point("p3", MaterialCode::Carpet, 3),
        ];
        let mut set = BaselineSet::new();
        assert_eq!(
            set.missing_codes(&points),
            vec![MaterialCode::Drywall, MaterialCode::Carpet]
        );
        set.upsert(MaterialCode::Carpet, 6.0);
        assert_eq!(set.missing_codes(&points), vec![MaterialCode::Drywall]);
        set.upsert(MaterialCode::Drywall, 9.0);
        assert!(set.missing_codes(&points).is_empty());
    }

    #[test]
    fn test_evaluate_moisture() {
        let points = vec![
            ref_point("p1", MaterialCode::Drywall, 1),
            ref_point("p2", MaterialCode::WoodFraming, 2),
        ];
        let mut baselines = BaselineSet::new();
        baselines.upsert(MaterialCode::Drywall, 12.0);

        let statuses = evaluate_moisture(
            &[reading("p1", 15.5), reading("p2", 10.0), reading("gone", 1.0)],
            &points,
            &baselines,
            DRY_STANDARD_TOLERANCE,
        );
        assert_eq!(statuses.len(), 3);
        assert!(statuses[0].dry);
        assert_eq!(statuses[0].ref_number, Some(1));
        assert!(!statuses[1].dry, "no baseline for wood framing");
        assert_eq!(statuses[1].baseline_value, None);
        assert!(!statuses[2].dry, "unknown reference point");
        assert_eq!(statuses[2].material_code, None);
        assert!(!drying_goal_met(&statuses));
    }

    #[test]
    fn test_drying_goal() {
        assert!(!drying_goal_met(&[]));
        let points = vec![ref_point("p1", MaterialCode::Drywall, 1)];
        let mut baselines = BaselineSet::new();
        baselines.upsert(MaterialCode::Drywall, 12.0);
        let statuses =
            evaluate_moisture(&[reading("p1", 13.0)], &points, &baselines, DRY_STANDARD_TOLERANCE);
        assert!(drying_goal_met(&statuses));
    }
}
