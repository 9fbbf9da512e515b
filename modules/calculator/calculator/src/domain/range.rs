//! Symmetric bound checks.

/// Whether `value` lies within `-limit..=limit`. `NaN` never does.
#[must_use]
pub fn in_range(value: f64, limit: f64) -> bool {
    (-limit..=limit).contains(&value)
}
