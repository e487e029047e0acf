//! Drying-log vocabulary — material codes, equipment types, chamber colors.
//!
//! These are small closed tables. They are enums rather than free-form
//! strings so that every match over them is checked for exhaustiveness.
//! The serde representation is the short code the record store uses.

use serde::{Deserialize, Serialize};

use crate::records::Chamber;

/// Material type of a reference point or baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaterialCode {
    #[serde(rename = "D")]
    Drywall,
    #[serde(rename = "W")]
    WoodFraming,
    #[serde(rename = "SF")]
    Subfloor,
    #[serde(rename = "HW")]
    Hardwood,
    #[serde(rename = "C")]
    Carpet,
    #[serde(rename = "CP")]
    CarpetPad,
    #[serde(rename = "CT")]
    CeilingTile,
    #[serde(rename = "I")]
    Insulation,
    #[serde(rename = "P")]
    Plaster,
    #[serde(rename = "CN")]
    Concrete,
    #[serde(rename = "T")]
    Trim,
    #[serde(rename = "CB")]
    Cabinetry,
}

impl MaterialCode {
    /// Every material code in display order.
    pub const ALL: [MaterialCode; 12] = [
        MaterialCode::Drywall,
        MaterialCode::WoodFraming,
        MaterialCode::Subfloor,
        MaterialCode::Hardwood,
        MaterialCode::Carpet,
        MaterialCode::CarpetPad,
        MaterialCode::CeilingTile,
        MaterialCode::Insulation,
        MaterialCode::Plaster,
        MaterialCode::Concrete,
        MaterialCode::Trim,
        MaterialCode::Cabinetry,
    ];

    /// Short code as stored in the record store.
    pub fn code(self) -> &'static str {
        match self {
            Self::Drywall => "D",
            Self::WoodFraming => "W",
            Self::Subfloor => "SF",
            Self::Hardwood => "HW",
            Self::Carpet => "C",
            Self::CarpetPad => "CP",
            Self::CeilingTile => "CT",
            Self::Insulation => "I",
            Self::Plaster => "P",
            Self::Concrete => "CN",
            Self::Trim => "T",
            Self::Cabinetry => "CB",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Drywall => "Drywall",
            Self::WoodFraming => "Wood Framing",
            Self::Subfloor => "Subfloor",
            Self::Hardwood => "Hardwood Flooring",
            Self::Carpet => "Carpet",
            Self::CarpetPad => "Carpet Pad",
            Self::CeilingTile => "Ceiling Tile",
            Self::Insulation => "Insulation",
            Self::Plaster => "Plaster",
            Self::Concrete => "Concrete",
            Self::Trim => "Trim / Baseboard",
            Self::Cabinetry => "Cabinetry",
        }
    }

    /// Look up a material by its short code (case-sensitive, as stored).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.code() == code)
    }
}

/// Equipment that can be placed in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    /// Low-grain refrigerant dehumidifier.
    Dehumidifier,
    DesiccantDehumidifier,
    AirMover,
    AirScrubber,
    Heater,
    /// Injection / wall-cavity drying system.
    InjectionDryer,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 6] = [
        EquipmentType::Dehumidifier,
        EquipmentType::DesiccantDehumidifier,
        EquipmentType::AirMover,
        EquipmentType::AirScrubber,
        EquipmentType::Heater,
        EquipmentType::InjectionDryer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dehumidifier => "Dehumidifier (LGR)",
            Self::DesiccantDehumidifier => "Desiccant Dehumidifier",
            Self::AirMover => "Air Mover",
            Self::AirScrubber => "Air Scrubber",
            Self::Heater => "Heater",
            Self::InjectionDryer => "Injection Dryer",
        }
    }

    /// Whether this unit removes moisture from the air (and so gets
    /// exhaust readings).
    pub fn is_dehumidifier(self) -> bool {
        matches!(self, Self::Dehumidifier | Self::DesiccantDehumidifier)
    }
}

/// Fixed 8-color palette used to tell chambers apart.
///
/// Serializes as the color name; rows storing the hex value also parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChamberColor {
    #[serde(alias = "#3B82F6", alias = "#3b82f6")]
    Blue,
    #[serde(alias = "#10B981", alias = "#10b981")]
    Green,
    #[serde(alias = "#F59E0B", alias = "#f59e0b")]
    Amber,
    #[serde(alias = "#EF4444", alias = "#ef4444")]
    Red,
    #[serde(alias = "#8B5CF6", alias = "#8b5cf6")]
    Purple,
    #[serde(alias = "#EC4899", alias = "#ec4899")]
    Pink,
    #[serde(alias = "#14B8A6", alias = "#14b8a6")]
    Teal,
    #[serde(alias = "#F97316", alias = "#f97316")]
    Orange,
}

impl ChamberColor {
    /// Palette in assignment order.
    pub const PALETTE: [ChamberColor; 8] = [
        ChamberColor::Blue,
        ChamberColor::Green,
        ChamberColor::Amber,
        ChamberColor::Red,
        ChamberColor::Purple,
        ChamberColor::Pink,
        ChamberColor::Teal,
        ChamberColor::Orange,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#3B82F6",
            Self::Green => "#10B981",
            Self::Amber => "#F59E0B",
            Self::Red => "#EF4444",
            Self::Purple => "#8B5CF6",
            Self::Pink => "#EC4899",
            Self::Teal => "#14B8A6",
            Self::Orange => "#F97316",
        }
    }
}

/// Pick the color for a newly created chamber.
///
/// Returns the first palette color no existing chamber uses. Once all eight
/// are taken, colors repeat in palette order by chamber count.
pub fn next_chamber_color(existing: &[Chamber]) -> ChamberColor {
    ChamberColor::PALETTE
        .iter()
        .copied()
        .find(|c| !existing.iter().any(|ch| ch.color == *c))
        .unwrap_or(ChamberColor::PALETTE[existing.len() % ChamberColor::PALETTE.len()])
}
