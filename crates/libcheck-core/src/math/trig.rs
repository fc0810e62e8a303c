//! Trigonometric functions.

/// Tangent of `x` (radians).
///
/// Equivalent to C `tan`. NaN and infinite inputs are domain errors and
/// yield NaN. At the rounded asymptotes `±FRAC_PI_2` the result is finite
/// and large, since `FRAC_PI_2` is not exactly pi/2.
#[inline]
pub fn tan(x: f64) -> f64 {
    x.tan()
}
