//! Drying-log configuration and validation.
//!
//! Defaults reproduce standard behavior: a 4-point dry standard and
//! resuming completed setups at the equipment step.
//!
//! ```
//! use drylog_logic::config::{validate_config, DryLogConfig};
//!
//! let config = DryLogConfig::from_json_str(r#"{"resolver": {"fallback_step": 7}}"#).unwrap();
//! assert_eq!(config.resolver.fallback_step.index(), 7);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DryLogError, Result};
use crate::moisture::DRY_STANDARD_TOLERANCE;
use crate::setup::WizardStep;

/// Tunables for the setup resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Step used once everything through baselines is saved.
    /// Must be one of the re-enterable steps (6, 7, 8).
    pub fallback_step: WizardStep,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_step: WizardStep::EquipmentPerRoom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DryLogConfig {
    /// Percentage points above baseline still counted as dry.
    pub dry_standard_tolerance: f64,
    pub resolver: ResolverConfig,
}

impl Default for DryLogConfig {
    fn default() -> Self {
        Self {
            dry_standard_tolerance: DRY_STANDARD_TOLERANCE,
            resolver: ResolverConfig::default(),
        }
    }
}

impl DryLogConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DryLogConfig = serde_json::from_str(json)?;
        let errors = validate_config(&config);
        if !errors.is_empty() {
            return Err(DryLogError::InvalidConfig(errors));
        }
        log::info!(
            "drying config loaded: tolerance={}, fallback step={}",
            config.dry_standard_tolerance,
            config.resolver.fallback_step.index()
        );
        Ok(config)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Tolerance negative or not finite.
    InvalidTolerance(f64),
    /// Fallback step is not re-enterable.
    InvalidFallbackStep(u8),
}

/// Validate a configuration, returning all errors found.
pub fn validate_config(config: &DryLogConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let tolerance = config.dry_standard_tolerance;
    if !tolerance.is_finite() || tolerance < 0.0 {
        errors.push(ConfigError::InvalidTolerance(tolerance));
    }
    if !config.resolver.fallback_step.is_reenterable() {
        errors.push(ConfigError::InvalidFallbackStep(
            config.resolver.fallback_step.index(),
        ));
    }

    errors
}
