//! Pure drying-log logic for water-damage mitigation jobs.
//!
//! This crate holds the calculations behind the drying log: psychrometric
//! conversions for live reading entry, dry-standard checks against
//! material baselines, and deciding where a partially completed setup
//! wizard should resume. Functions take plain records fetched elsewhere
//! and return results, with no storage, network, or UI dependency.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Dry-standard tolerance and resolver fallback, JSON loading |
//! | [`constants`] | Material codes, equipment types, chamber color palette |
//! | [`error`] | Error type for config parsing and wizard opening |
//! | [`format`] | GPP and visit-delta display strings |
//! | [`moisture`] | Dry standard, baseline upsert, moisture evaluation |
//! | [`psychrometrics`] | Temperature + RH → grains per pound, grain depression |
//! | [`readings`] | Per-chamber intake/exhaust GPP and dehumidifier count |
//! | [`records`] | Chamber, room, reference point, baseline, reading rows |
//! | [`setup`] | Nine-step setup wizard and its resume-step resolver |

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod moisture;
pub mod psychrometrics;
pub mod readings;
pub mod records;
pub mod setup;

pub use error::{DryLogError, Result};
