//! Error types for the fallible entry points.
//!
//! Calculations never return these; they signal missing data with `None`.

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, DryLogError>;

#[derive(Error, Debug)]
pub enum DryLogError {
    /// Config or record JSON did not parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but failed validation.
    #[error("invalid config: {0:?}")]
    InvalidConfig(Vec<ConfigError>),

    /// The job already has visits, so initial setup cannot be reopened.
    #[error("setup already started: {visits} visit(s) recorded")]
    SetupAlreadyStarted { visits: usize },
}

/// Wizard step index outside `0..=8`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("wizard step {0} out of range 0..=8")]
pub struct InvalidStep(pub u8);
