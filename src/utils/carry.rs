use super::places;

/// Carry a minutes or seconds value that would print as `60` into its unit
///
/// `part` is about to be printed with `precision` decimals. If that shows as
/// 60 or more, `unit` is incremented and the remainder is returned in its place.
pub(crate) fn carry_sixty(unit: u8, part: f64, precision: usize) -> (u8, f64) {
    let half_step = 0.5 * 10f64.powi(-places(precision));
    if part >= 60.0 - half_step {
        (unit.saturating_add(1), (part - 60.0).max(0.0))
    } else {
        (unit, part)
    }
}
