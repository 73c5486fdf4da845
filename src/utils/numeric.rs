//! Numeric helpers shared by the classifiers
//!
//! Measurements arrive as free text from an input form. Anything that is not a
//! finite number is treated as "not provided" so that it can never take part in
//! a threshold comparison.

/// Parse a raw measurement field into a finite number
///
/// Blank, whitespace-only, unparseable and non-finite text (`NaN`, `inf`)
/// all normalize to `None`.
#[must_use]
pub fn normalize_measurement(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().and_then(|value| finite(Some(value)))
}

/// Drop non-finite values
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Inclusive range check
#[must_use]
pub fn in_range(value: f64, low: f64, high: f64) -> bool {
    value >= low && value <= high
}

/// Percent change from `previous` to `current`
///
/// Returns `None` when the result is not a finite number (a zero baseline).
#[must_use]
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    let change = (current - previous) / previous * 100.0;
    change.is_finite().then_some(change)
}

/// Format a value with a fixed number of decimals, rounding halves away from zero
///
/// Rounding works on the exact binary value, so `1.45` (stored just below
/// 1.45) prints as `1.4`. Only exact ties round away from zero: `54.5` prints
/// as `55` where `format!("{:.0}")` would give `54`.
#[must_use]
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let prec = decimals as usize;
    if is_exact_tie(value, decimals) {
        let scale = 10_f64.powi(decimals as i32);
        let rounded = (value * scale).round() / scale;
        return format!("{rounded:.prec$}");
    }
    format!("{value:.prec$}")
}

/// Whether `value` lies exactly halfway between two `decimals`-place numbers
///
/// A tie has a terminating expansion ending in 5 at place `decimals + 1`,
/// which requires `value * 2^(decimals + 1)` to be an integer.
fn is_exact_tie(value: f64, decimals: u32) -> bool {
    let halves = value * 2_f64.powi(decimals as i32 + 1);
    halves.is_finite()
        && halves.fract() == 0.0
        && format!("{value:.prec$}", prec = decimals as usize + 1).ends_with('5')
}
