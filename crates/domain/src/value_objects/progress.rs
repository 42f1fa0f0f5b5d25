//! Ratio arithmetic shared by bundle and perfection roll-ups.
//!
//! A zero total is a valid empty state and always yields 0, never a fault.

/// Whole-number percentage, rounded to nearest (half away from zero).
///
/// `rounded_percent(1, 3) == 33`, `rounded_percent(2, 3) == 67`.
pub fn rounded_percent(complete: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(complete) * 100.0 / f64::from(total)).round() as u32
}

/// Fractional percentage in `0.0..=100.0` when `current <= total`.
pub fn ratio_percent(current: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(current) * 100.0 / f64::from(total)
}
