/// Scaled values at or above this magnitude carry no fractional digits in an
/// `f64`, so they are returned unchanged.
const PRECISION_LIMIT: f64 = 1e15;

/// Fractional parts within this many ulps of the scaled value from one half
/// count as ties, absorbing the error of the scaling multiplication
const TIE_ULPS: f64 = 4.0;

/// Round `value` to `places` decimal places, resolving ties towards zero
///
/// Negative `places` round to the left of the decimal point
/// (`round_half_down(67.5, -1) == 70.0`). Exact halves are rounded towards
/// zero (`round_half_down(2.5, 0) == 2.0`, `round_half_down(-2.5, 0) == -2.0`),
/// which none of the `f64` rounding methods in `std` provide.
pub fn round_half_down(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places.saturating_abs());
    let scaled = if places >= 0 {
        value * factor
    } else {
        value / factor
    };

    if !scaled.is_finite() || scaled.abs() >= PRECISION_LIMIT {
        return value;
    }

    let magnitude = scaled.abs();
    let floor = magnitude.floor();
    let tolerance = magnitude * f64::EPSILON * TIE_ULPS;
    let rounded = if magnitude - floor > 0.5 + tolerance {
        floor + 1.0
    } else {
        floor
    };
    let rounded = rounded.copysign(scaled);

    if places >= 0 {
        rounded / factor
    } else {
        rounded * factor
    }
}

/// Convert a formatter precision to the signed place count used for rounding
pub(crate) fn places(precision: usize) -> i32 {
    i32::try_from(precision).unwrap_or(i32::MAX)
}
