//! Psychrometric conversions — temperature and relative humidity to GPP.
//!
//! GPP (grains of water vapor per pound of dry air) is absolute humidity.
//! Unlike relative humidity it does not move with temperature, so intake
//! and exhaust air at different temperatures can be compared directly.
//!
//! Called on every keystroke of a reading form. Partially typed input is
//! normal there, so nothing here errors: unusable input yields `None`.

/// Offset from degrees Fahrenheit to degrees Rankine.
pub const RANKINE_OFFSET: f64 = 459.67;

/// Standard atmospheric pressure in psia.
pub const ATMOSPHERIC_PRESSURE_PSIA: f64 = 14.696;

/// Ratio of molecular weights of water vapor and dry air.
pub const MOLECULAR_WEIGHT_RATIO: f64 = 0.62198;

/// Grains in one pound.
pub const GRAINS_PER_POUND: f64 = 7000.0;

/// Saturation vapor pressure fit over liquid water (Rankine, psia).
pub mod saturation {
    pub const C8: f64 = -10440.397;
    pub const C9: f64 = -11.29465;
    pub const C10: f64 = -0.027022355;
    pub const C11: f64 = 0.00001289036;
    pub const C12: f64 = -0.0000000024780681;
    pub const C13: f64 = 6.5459673;
}

/// Round to one decimal place, halves away from zero.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Saturation vapor pressure (psia) at a temperature in degrees Rankine.
pub fn saturation_pressure(temp_r: f64) -> f64 {
    use saturation::*;

    let ln_pws = C8 / temp_r
        + C9
        + C10 * temp_r
        + C11 * temp_r * temp_r
        + C12 * temp_r * temp_r * temp_r
        + C13 * temp_r.ln();
    ln_pws.exp()
}

/// Absolute humidity in grains per pound, rounded to one decimal.
///
/// Returns `None` when either input is not finite, when `rh_percent` is
/// outside `[0, 100]`, or when the result itself is not finite.
pub fn calculate_gpp(temp_f: f64, rh_percent: f64) -> Option<f64> {
    if !temp_f.is_finite() || !rh_percent.is_finite() {
        return None;
    }
    if !(0.0..=100.0).contains(&rh_percent) {
        return None;
    }

    let temp_r = temp_f + RANKINE_OFFSET;
    let pws = saturation_pressure(temp_r);
    let pw = (rh_percent / 100.0) * pws;
    let humidity_ratio = MOLECULAR_WEIGHT_RATIO * pw / (ATMOSPHERIC_PRESSURE_PSIA - pw);

    let gpp = round_tenths(humidity_ratio * GRAINS_PER_POUND);
    gpp.is_finite().then_some(gpp)
}

/// Same as [`calculate_gpp`] for inputs that may be missing.
pub fn calculate_gpp_opt(temp_f: Option<f64>, rh_percent: Option<f64>) -> Option<f64> {
    calculate_gpp(temp_f?, rh_percent?)
}

/// Moisture pulled out of the air by one dehumidifier: intake GPP minus
/// exhaust GPP, one decimal. Positive means the unit is removing water.
pub fn grain_depression(intake_gpp: Option<f64>, exhaust_gpp: Option<f64>) -> Option<f64> {
    Some(round_tenths(intake_gpp? - exhaust_gpp?))
}
