/// Standard gravity used to convert specific impulse (s) into effective exhaust velocity (m/s).
pub const STANDARD_GRAVITY: f64 = 9.82;

/// Normalizes a value within a given range.
///
/// # Arguments
/// - `value`: The value to normalize.
/// - `min`: The lower bound of the range.
/// - `max`: The upper bound of the range.
///
/// # Returns
/// - `Some(f64)` with the position of `value` relative to `[min, max]`, unclamped.
/// - `None` if `min` and `max` coincide (to prevent division by zero).
pub fn normalize_f64(value: f64, min: f64, max: f64) -> Option<f64> {
    if (max - min).abs() <= f64::EPSILON { None } else { Some((value - min) / (max - min)) }
}

/// Normalizes a value within a given range and clamps the result to `[0.0, 1.0]`.
///
/// Degenerate ranges map everything below `max` to `0.0` and everything else to `1.0`.
pub fn unit_fraction(value: f64, min: f64, max: f64) -> f64 {
    match normalize_f64(value, min, max) {
        Some(frac) => frac.clamp(0.0, 1.0),
        None if value < max => 0.0,
        None => 1.0,
    }
}

/// Relative difference between `a` and a reference value `b`.
pub fn relative_error(a: f64, b: f64) -> f64 {
    if b == 0.0 { a.abs() } else { ((a - b) / b).abs() }
}
