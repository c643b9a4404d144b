//! Angle normalization.

/// Normalize an angle to [0, 360) degrees.
///
/// A remainder that rounds up to exactly 360 is folded to 0. Non-finite
/// input yields NaN.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}
