//! Drying setup wizard — where to resume from partially saved setup.
//!
//! The wizard has nine fixed steps. Each step saves to the record store as
//! it goes, so a reopened wizard has to work out from the saved chambers,
//! rooms, reference points, and baselines which step is still unfinished.
//!
//! # Resume Rules
//!
//! Checked in order, first match wins:
//!
//! 1. No rooms → [`WizardStep::RoomsReview`]
//! 2. No chambers → [`WizardStep::CreateChambers`]
//! 3. A room without a chamber → [`WizardStep::AssignRooms`]
//! 4. No reference points → [`WizardStep::ReferencePoints`]
//! 5. A used material without a baseline → [`WizardStep::Baselines`]
//! 6. Otherwise the configured fallback, [`WizardStep::EquipmentPerRoom`]
//!    by default.
//!
//! Dehumidifier counts (step 3) only live in the open wizard, so they are
//! never a resume target. Equipment and both reading steps can always be
//! re-entered, so none of them is checked.
//!
//! ```
//! use drylog_logic::setup::{detect_first_incomplete_step, WizardStep};
//!
//! let step = detect_first_incomplete_step(&[], &[], &[], &[]);
//! assert_eq!(step, WizardStep::RoomsReview);
//! assert_eq!(step.index(), 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{DryLogConfig, ResolverConfig};
use crate::error::{DryLogError, InvalidStep, Result};
use crate::moisture::BaselineSet;
use crate::records::{Baseline, Chamber, ReferencePoint, Room, Visit};

/// Steps of the setup wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    RoomsReview = 0,
    CreateChambers = 1,
    AssignRooms = 2,
    DehuCounts = 3,
    ReferencePoints = 4,
    Baselines = 5,
    EquipmentPerRoom = 6,
    AtmosphericReadings = 7,
    MoistureReadings = 8,
}

impl WizardStep {
    pub const ALL: [WizardStep; 9] = [
        WizardStep::RoomsReview,
        WizardStep::CreateChambers,
        WizardStep::AssignRooms,
        WizardStep::DehuCounts,
        WizardStep::ReferencePoints,
        WizardStep::Baselines,
        WizardStep::EquipmentPerRoom,
        WizardStep::AtmosphericReadings,
        WizardStep::MoistureReadings,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::RoomsReview => "Rooms Review",
            Self::CreateChambers => "Create Chambers",
            Self::AssignRooms => "Assign Rooms to Chambers",
            Self::DehuCounts => "Dehumidifiers per Chamber",
            Self::ReferencePoints => "Reference Points",
            Self::Baselines => "Baselines",
            Self::EquipmentPerRoom => "Equipment per Room",
            Self::AtmosphericReadings => "Atmospheric Readings",
            Self::MoistureReadings => "Moisture Readings",
        }
    }

    /// Steps the user can always go back into without losing saved work.
    pub fn is_reenterable(self) -> bool {
        matches!(
            self,
            Self::EquipmentPerRoom | Self::AtmosphericReadings | Self::MoistureReadings
        )
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> u8 {
        step.index()
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = InvalidStep;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_index(index).ok_or(InvalidStep(index))
    }
}

/// Saved setup state for one job, as fetched from the record store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupSnapshot {
    #[serde(default)]
    pub chambers: Vec<Chamber>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub ref_points: Vec<ReferencePoint>,
    #[serde(default)]
    pub baselines: Vec<Baseline>,
}

impl SetupSnapshot {
    /// Step to reopen the wizard at.
    pub fn resume_step(&self, config: &ResolverConfig) -> WizardStep {
        resume_from(
            &self.chambers,
            &self.rooms,
            &self.ref_points,
            &self.baselines,
            config,
        )
    }
}

/// Step to reopen the wizard at, with the default fallback.
///
/// Never call this for a job that already has visits; see [`open_wizard`].
pub fn detect_first_incomplete_step(
    chambers: &[Chamber],
    rooms: &[Room],
    ref_points: &[ReferencePoint],
    baselines: &[Baseline],
) -> WizardStep {
    resume_from(
        chambers,
        rooms,
        ref_points,
        baselines,
        &ResolverConfig::default(),
    )
}

fn resume_from(
    chambers: &[Chamber],
    rooms: &[Room],
    ref_points: &[ReferencePoint],
    baselines: &[Baseline],
    config: &ResolverConfig,
) -> WizardStep {
    if rooms.is_empty() {
        log::debug!("resume at rooms review: no rooms");
        return WizardStep::RoomsReview;
    }
    if chambers.is_empty() {
        log::debug!("resume at create chambers: no chambers");
        return WizardStep::CreateChambers;
    }
    if let Some(room) = rooms.iter().find(|r| !r.is_assigned()) {
        log::debug!("resume at assign rooms: room {} has no chamber", room.id);
        return WizardStep::AssignRooms;
    }
    if ref_points.is_empty() {
        log::debug!("resume at reference points: none saved");
        return WizardStep::ReferencePoints;
    }

    let missing = BaselineSet::from_records(baselines).missing_codes(ref_points);
    if let Some(code) = missing.first() {
        log::debug!("resume at baselines: no baseline for {}", code.code());
        return WizardStep::Baselines;
    }

    log::debug!(
        "setup complete through baselines, resume at {}",
        config.fallback_step.title()
    );
    config.fallback_step
}

/// Decide where the setup wizard opens.
///
/// Any visit means initial setup already finished, and the wizard is
/// refused rather than resumed.
pub fn open_wizard(
    visits: &[Visit],
    snapshot: &SetupSnapshot,
    config: &DryLogConfig,
) -> Result<WizardStep> {
    if !visits.is_empty() {
        log::warn!(
            "setup wizard refused: {} visit(s) already recorded",
            visits.len()
        );
        return Err(DryLogError::SetupAlreadyStarted {
            visits: visits.len(),
        });
    }
    Ok(snapshot.resume_step(&config.resolver))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ChamberColor, MaterialCode};

    fn chamber(id: &str) -> Chamber {
        Chamber {
            id: id.into(),
            name: "Main".into(),
            color: ChamberColor::Blue,
        }
    }

    fn room(id: &str, chamber_id: Option<&str>) -> Room {
        Room {
            id: id.into(),
            chamber_id: chamber_id.map(Into::into),
            name: "Kitchen".into(),
        }
    }

    fn ref_point(id: &str, code: MaterialCode) -> ReferencePoint {
        ReferencePoint {
            id: id.into(),
            room_id: "r1".into(),
            material_code: code,
            ref_number: 1,
        }
    }

    fn baseline(code: MaterialCode) -> Baseline {
        Baseline {
            material_code: code,
            baseline_value: 12.0,
        }
    }

    #[test]
    fn test_step_indices() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index() as usize, i);
            assert_eq!(WizardStep::from_index(i as u8), Some(*step));
        }
        assert_eq!(WizardStep::from_index(9), None);
        assert_eq!(WizardStep::MoistureReadings.next(), None);
        assert_eq!(WizardStep::Baselines.next(), Some(WizardStep::EquipmentPerRoom));
    }

    #[test]
    fn test_step_serde_as_index() {
        assert_eq!(serde_json::to_string(&WizardStep::Baselines).unwrap(), "5");
        let step: WizardStep = serde_json::from_str("7").unwrap();
        assert_eq!(step, WizardStep::AtmosphericReadings);
        assert!(serde_json::from_str::<WizardStep>("9").is_err());
    }

    #[test]
    fn test_no_rooms() {
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[],
            &[ref_point("p1", MaterialCode::Drywall)],
            &[baseline(MaterialCode::Drywall)],
        );
        assert_eq!(step.index(), 0);
    }

    #[test]
    fn test_no_chambers() {
        let step = detect_first_incomplete_step(&[], &[room("r1", None)], &[], &[]);
        assert_eq!(step, WizardStep::CreateChambers);
    }

    #[test]
    fn test_unassigned_room() {
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[room("r1", Some("c1")), room("r2", None)],
            &[ref_point("p1", MaterialCode::Drywall)],
            &[baseline(MaterialCode::Drywall)],
        );
        assert_eq!(step, WizardStep::AssignRooms);
    }

    #[test]
    fn test_no_ref_points_skips_dehu_step() {
        let step =
            detect_first_incomplete_step(&[chamber("c1")], &[room("r1", Some("c1"))], &[], &[]);
        assert_eq!(step.index(), 4);
    }

    #[test]
    fn test_missing_baseline() {
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[room("r1", Some("c1"))],
            &[ref_point("p1", MaterialCode::Drywall)],
            &[],
        );
        assert_eq!(step.index(), 5);
    }

    #[test]
    fn test_baseline_for_unused_material_does_not_count() {
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[room("r1", Some("c1"))],
            &[
                ref_point("p1", MaterialCode::Drywall),
                ref_point("p2", MaterialCode::Carpet),
            ],
            &[baseline(MaterialCode::Drywall), baseline(MaterialCode::Concrete)],
        );
        assert_eq!(step, WizardStep::Baselines);
    }

    #[test]
    fn test_complete_falls_back_to_equipment() {
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[room("r1", Some("c1"))],
            &[ref_point("p1", MaterialCode::Drywall)],
            &[baseline(MaterialCode::Drywall)],
        );
        assert_eq!(step.index(), 6);
    }

    #[test]
    fn test_dangling_references_not_validated() {
        // Rooms may point at chambers that no longer exist.
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[room("r1", Some("deleted"))],
            &[ref_point("p1", MaterialCode::Drywall)],
            &[baseline(MaterialCode::Drywall)],
        );
        assert_eq!(step, WizardStep::EquipmentPerRoom);
    }

    #[test]
    fn test_configured_fallback() {
        let snapshot = SetupSnapshot {
            chambers: vec![chamber("c1")],
            rooms: vec![room("r1", Some("c1"))],
            ref_points: vec![ref_point("p1", MaterialCode::Drywall)],
            baselines: vec![baseline(MaterialCode::Drywall)],
        };
        let config = ResolverConfig {
            fallback_step: WizardStep::MoistureReadings,
        };
        assert_eq!(snapshot.resume_step(&config), WizardStep::MoistureReadings);

        // Fallback never overrides an earlier incomplete step.
        let partial = SetupSnapshot {
            baselines: vec![],
            ..snapshot
        };
        assert_eq!(partial.resume_step(&config), WizardStep::Baselines);
    }

    #[test]
    fn test_empty_chamber_id_reopens_assignment() {
        let step = detect_first_incomplete_step(
            &[chamber("c1")],
            &[room("r1", Some(""))],
            &[ref_point("p1", MaterialCode::Drywall)],
            &[baseline(MaterialCode::Drywall)],
        );
        assert_eq!(step, WizardStep::AssignRooms);
    }

    #[test]
    fn test_hex_chamber_color_snapshot_resolves() {
        let snapshot: SetupSnapshot = serde_json::from_str(
            r##"{
                "chambers": [{"id": "c1", "name": "Main", "color": "#3B82F6"}],
                "rooms": [{"id": "r1", "chamber_id": "c1", "name": "Kitchen"}]
            }"##,
        )
        .unwrap();
        assert_eq!(
            snapshot.resume_step(&ResolverConfig::default()),
            WizardStep::ReferencePoints
        );
    }

    #[test]
    fn test_slices_and_snapshot_agree() {
        let chambers = vec![chamber("c1")];
        let rooms = vec![room("r1", Some("c1"))];
        let points = vec![
            ref_point("p1", MaterialCode::Drywall),
            ref_point("p2", MaterialCode::Carpet),
        ];
        for baselines in [
            vec![],
            vec![baseline(MaterialCode::Carpet)],
            vec![baseline(MaterialCode::Carpet), baseline(MaterialCode::Drywall)],
        ] {
            let snapshot = SetupSnapshot {
                chambers: chambers.clone(),
                rooms: rooms.clone(),
                ref_points: points.clone(),
                baselines: baselines.clone(),
            };
            assert_eq!(
                detect_first_incomplete_step(&chambers, &rooms, &points, &baselines),
                snapshot.resume_step(&ResolverConfig::default())
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let snapshot = SetupSnapshot {
            chambers: vec![chamber("c1")],
            rooms: vec![room("r1", Some("c1"))],
            ref_points: vec![ref_point("p1", MaterialCode::Drywall)],
            baselines: vec![],
        };
        let config = ResolverConfig::default();
        assert_eq!(snapshot.resume_step(&config), snapshot.resume_step(&config));
    }

    #[test]
    fn test_open_wizard_refused_with_visits() {
        let visits = vec![Visit {
            id: "v1".into(),
            visit_number: 1,
        }];
        let result = open_wizard(&visits, &SetupSnapshot::default(), &DryLogConfig::default());
        assert!(matches!(
            result,
            Err(DryLogError::SetupAlreadyStarted { visits: 1 })
        ));
    }

    #[test]
    fn test_open_wizard_without_visits() {
        let result = open_wizard(&[], &SetupSnapshot::default(), &DryLogConfig::default());
        assert_eq!(result.unwrap(), WizardStep::RoomsReview);
    }

    #[test]
    fn test_reenterable_steps() {
        let steps: Vec<_> = WizardStep::ALL
            .iter()
            .filter(|s| s.is_reenterable())
            .map(|s| s.index())
            .collect();
        assert_eq!(steps, vec![6, 7, 8]);
    }
}
