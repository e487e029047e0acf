//! Display strings for GPP values and visit-over-visit deltas.

use crate::psychrometrics::round_tenths;

/// Placeholder shown when a value is not yet computable.
pub const PLACEHOLDER: &str = "--";

/// Format to exactly one decimal, rounding the same way [`calculate_gpp`] does.
///
/// [`calculate_gpp`]: crate::psychrometrics::calculate_gpp
pub fn format_tenths(value: f64) -> String {
    format!("{:.1}", round_tenths(value))
}

pub fn format_gpp(gpp: Option<f64>) -> String {
    match gpp {
        Some(v) => format_tenths(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Change from the prior visit, e.g. `"↓2.0"` or `"↑1.5"`.
///
/// No change renders as `"↓0.0"`: only a strict increase gets the up arrow.
pub fn format_delta(current: Option<f64>, prior: Option<f64>) -> String {
    let (Some(current), Some(prior)) = (current, prior) else {
        return PLACEHOLDER.to_string();
    };
    let diff = format_tenths((current - prior).abs());
    if current <= prior {
        format!("↓{}", diff)
    } else {
        format!("↑{}", diff)
    }
}
