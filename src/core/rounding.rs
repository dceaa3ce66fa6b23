/// Round half up (toward +inf): `0.5 -> 1`, `-0.5 -> 0`, `-1.5 -> -1`.
///
/// `f64::round` rounds halves away from zero, which gives `-1` for `-0.5`,
/// so the rounding is done by hand from `floor`. Comparing `value - floor`
/// avoids `floor(value + 0.5)`, which turns 0.49999999999999994 into 1.
///
/// The result is never `-0.0`. Non-finite input comes back unchanged;
/// the dispatcher rejects it before rounding.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0.0 + 0.0 == +0.0
    rounded + 0.0
}
