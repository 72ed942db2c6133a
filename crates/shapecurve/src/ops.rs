//! Support operations for parameter normalization.
//!
//! Every shaper runs its raw parameters through these helpers exactly once, at
//! construction. Nothing here ever fails: out-of-range values are pulled back
//! to the nearest legal value.

/// Margin keeping divisor parameters away from exact 0 and 1.
pub const EPSILON: f64 = 1e-5;

/// Clamp `v` into the closed unit interval `[0, 1]`.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Clamp `v` into `[EPSILON, 1 - EPSILON]`.
///
/// Used for parameters that later appear as `a` or `1 - a` in a denominator.
#[inline]
pub fn clamp_open(v: f64) -> f64 {
    v.clamp(EPSILON, 1.0 - EPSILON)
}

/// Mirror a unit-interval value, `v -> 1 - v`.
///
/// Several families flip their `b` parameter so that raising it visually
/// raises the curve's plateau.
#[inline]
pub fn invert(v: f64) -> f64 {
    1.0 - v
}

/// Square root with the radicand floored at zero.
///
/// Circle and ellipse evaluations take roots of `r² - dx²`, which dips below
/// zero for inputs outside the arc's span.
#[inline]
pub fn sqrt_floor(v: f64) -> f64 {
    v.max(0.0).sqrt()
}
