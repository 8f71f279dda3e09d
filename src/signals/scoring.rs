//! Confidence arithmetic.

/// Aggregated strength at which base confidence saturates.
pub const STRENGTH_SCALE: f64 = 3.0;

/// `|strength| / 3`, saturating at 1.0.
pub fn base_confidence(strength: f64) -> f64 {
    (strength.abs() / STRENGTH_SCALE).min(1.0)
}

/// Add `bonus` to `base` without exceeding `cap`.
pub fn boosted(base: f64, bonus: f64, cap: f64) -> f64 {
    (base + bonus).min(cap)
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
