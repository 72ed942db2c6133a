//! Polynomial shaping functions.
//!
//! Seats and sigmoids built from pairs of polynomial arcs joined at a control
//! abscissa, plus the Blinn-Wyvill cosine approximation.

use crate::{
    ops::{clamp_open, clamp_unit, invert},
    shaper::Shaper,
};

/// Blinn-Wyvill polynomial approximation to the raised inverted cosine.
///
/// Tracks `0.5 * (1 - cos(πx))` to within 0.003 on `[0, 1]` using only
/// multiplications.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinnWyvillCosine;

impl BlinnWyvillCosine {
    /// Sixth-order coefficient.
    const FA: f64 = 4.0 / 9.0;
    /// Fourth-order coefficient.
    const FB: f64 = 17.0 / 9.0;
    /// Second-order coefficient.
    const FC: f64 = 22.0 / 9.0;

    /// Construct the shaper. It takes no parameters.
    pub fn new() -> Self {
        Self
    }
}

impl Shaper for BlinnWyvillCosine {
    fn name(&self) -> &'static str {
        "Blinn-Wyvill Cosine"
    }

    fn info(&self) -> &'static str {
        "Sixth-order polynomial approximation of the raised inverted cosine.\n\
        Flat at both ends, passes through (0.5, 0.5)."
    }

    fn eval(&self, x: f64) -> f64 {
        let x2 = x * x;
        let x4 = x2 * x2;
        let x6 = x4 * x2;
        Self::FA * x6 - Self::FB * x4 + Self::FC * x2
    }
}

/// Two cubic arcs meeting with a horizontal tangent at `(a, 1 - b)`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleCubicSeat {
    /// Inflection abscissa, in `[ε, 1-ε]`.
    a: f64,
    /// Plateau height after inversion.
    b: f64,
}

impl DoubleCubicSeat {
    /// Construct a seat with its inflection at `a`.
    ///
    /// `b` is inverted, so the plateau sits at height `1 - b`.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: clamp_open(a),
            b: invert(clamp_unit(b)),
        }
    }
}

impl Shaper for DoubleCubicSeat {
    fn name(&self) -> &'static str {
        "Double-Cubic Seat"
    }

    fn info(&self) -> &'static str {
        "Two cubic curves joined by a flat inflection at (a, 1-b)."
    }

    fn eval(&self, x: f64) -> f64 {
        let Self { a, b } = *self;
        if x <= a {
            b - b * (1.0 - x / a).powi(3)
        } else {
            b + (1.0 - b) * ((x - a) / (1.0 - a)).powi(3)
        }
    }
}

/// A double-cubic seat blended with the identity line.
///
/// The blend weight tilts the plateau, which makes the curve useful for
/// lensing evenly spaced data.
#[derive(Debug, Clone, Copy)]
pub struct DoubleCubicSeatLinearBlend {
    /// Inflection abscissa on the diagonal, in `[ε, 1-ε]`.
    a: f64,
    /// Weight of the identity line after inversion.
    b: f64,
}

impl DoubleCubicSeatLinearBlend {
    /// Construct a blended seat. Larger `b` means more cubic, less line.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: clamp_open(a),
            b: invert(clamp_unit(b)),
        }
    }
}

impl Shaper for DoubleCubicSeatLinearBlend {
    fn name(&self) -> &'static str {
        "Double-Cubic Seat with Linear Blend"
    }

    fn info(&self) -> &'static str {
        "Cubic seat at (a, a) mixed with y = x; b controls the plateau slope."
    }

    fn eval(&self, x: f64) -> f64 {
        let Self { a, b } = *self;
        if x <= a {
            b * x + (1.0 - b) * a * (1.0 - (1.0 - x / a).powi(3))
        } else {
            b * x + (1.0 - b) * (a + (1.0 - a) * ((x - a) / (1.0 - a)).powi(3))
        }
    }
}

/// The double-cubic seat generalised to any odd exponent `2n + 1`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleOddPolynomialSeat {
    /// Inflection abscissa, in `[ε, 1-ε]`.
    a: f64,
    /// Plateau height (not inverted).
    b: f64,
    /// Odd exponent `2n + 1`.
    p: i32,
}

impl DoubleOddPolynomialSeat {
    /// Construct a seat through `(a, b)`. `n` widens the plateau; 1 to 20 is
    /// the useful range.
    pub fn new(a: f64, b: f64, n: u32) -> Self {
        Self {
            a: clamp_open(a),
            b: clamp_unit(b),
            p: i32::try_from(2 * u64::from(n) + 1).unwrap_or(i32::MAX),
        }
    }

    /// The odd exponent in use.
    pub fn exponent(&self) -> i32 {
        self.p
    }
}

impl Shaper for DoubleOddPolynomialSeat {
    fn name(&self) -> &'static str {
        "Double-Odd-Polynomial Seat"
    }

    fn info(&self) -> &'static str {
        "Seat through (a, b) built from odd powers 2n+1; larger n flattens\n\
        a wider plateau."
    }

    fn eval(&self, x: f64) -> f64 {
        let Self { a, b, p } = *self;
        if x <= a {
            b - b * (1.0 - x / a).powi(p)
        } else {
            b + (1.0 - b) * ((x - a) / (1.0 - a)).powi(p)
        }
    }
}

/// Symmetric sigmoid from two order-`n` polynomials joined at `x = 0.5`.
#[derive(Debug, Clone, Copy)]
pub struct DoublePolynomialSigmoid {
    /// Polynomial order, at least 1.
    n: i32,
}

impl DoublePolynomialSigmoid {
    /// Construct a sigmoid of order `n` (raised to 1 if zero).
    pub fn new(n: u32) -> Self {
        Self {
            n: i32::try_from(n.max(1)).unwrap_or(i32::MAX),
        }
    }
}

impl Shaper for DoublePolynomialSigmoid {
    fn name(&self) -> &'static str {
        "Double-Polynomial Sigmoid"
    }

    fn info(&self) -> &'static str {
        "S-curve of order n joined at the centre; f(0.5) = 0.5 for every n.\n\
        n = 2 is closest to the raised cosine."
    }

    fn eval(&self, x: f64) -> f64 {
        let n = self.n;
        if x <= 0.5 {
            return (2.0 * x).powi(n) / 2.0;
        }
        let tail = (2.0 * (x - 1.0)).powi(n) / 2.0;
        if n % 2 == 0 { 1.0 - tail } else { 1.0 + tail }
    }
}

/// Axis-aligned parabola through `(0, 0)`, `(a, 1 - b)` and `(1, 1)`.
///
/// Not every point keeps the parabola inside the unit square, so the output
/// is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticThroughPoint {
    /// Quadratic coefficient.
    big_a: f64,
    /// Linear coefficient (subtracted).
    big_b: f64,
}

impl QuadraticThroughPoint {
    /// Construct the parabola through the inverted point `(a, 1 - b)`.
    pub fn new(a: f64, b: f64) -> Self {
        let a = clamp_open(a);
        let b = invert(clamp_unit(b));
        let big_a = (1.0 - b) / (1.0 - a) - b / a;
        let big_b = (big_a * a * a - b) / a;
        Self { big_a, big_b }
    }
}

impl Shaper for QuadraticThroughPoint {
    fn name(&self) -> &'static str {
        "Quadratic Through a Point"
    }

    fn info(&self) -> &'static str {
        "Parabola through a chosen point; clamped where it leaves the square."
    }

    fn eval(&self, x: f64) -> f64 {
        clamp_unit(self.big_a * x * x - self.big_b * x)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    const GRID: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

    #[test]
    fn blinn_wyvill_tracks_cosine() {
        let s = BlinnWyvillCosine::new();
        for i in 0..=100 {
            let x = f64::from(i) / 100.0;
            let cosine = 0.5 * (1.0 - (PI * x).cos());
            assert_abs_diff_eq!(s.eval(x), cosine, epsilon = 3e-3);
        }
        assert_abs_diff_eq!(s.eval(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn cubic_seat_centred() {
        // Meets the diagonal at 0, 0.5 and 1 and is point-symmetric about the
        // centre; in between it is a seat, not the identity.
        let s = DoubleCubicSeat::new(0.5, 0.5);
        for x in [0.0, 0.5, 1.0] {
            assert_abs_diff_eq!(s.eval(x), x, epsilon = 1e-12);
        }
        for x in GRID {
            assert_abs_diff_eq!(s.eval(x), 1.0 - s.eval(1.0 - x), epsilon = 1e-12);
        }
        assert_abs_diff_eq!(s.eval(0.25), 0.4375, epsilon = 1e-12);
    }

    #[test]
    fn cubic_seat_passes_through_inverted_point() {
        for (a, b) in [(0.2, 0.3), (0.5, 0.9), (0.8, 0.1)] {
            let s = DoubleCubicSeat::new(a, b);
            assert_abs_diff_eq!(s.eval(a), 1.0 - b, epsilon = 1e-12);
            assert_eq!(s.eval(0.0), 0.0);
            assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cubic_seat_clamps_parameters() {
        // a = 0 would divide by zero; it is nudged to EPSILON instead.
        let s = DoubleCubicSeat::new(0.0, 2.0);
        assert!(s.eval(0.5).is_finite());
        assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_blend_endpoints() {
        for (a, b) in [(0.3, 0.2), (0.5, 0.5), (0.7, 1.0)] {
            let s = DoubleCubicSeatLinearBlend::new(a, b);
            assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);
            // The inflection lies on the diagonal regardless of the blend.
            assert_abs_diff_eq!(s.eval(a), a, epsilon = 1e-12);
        }
        // b = 0 inverts to a pure identity blend.
        let line = DoubleCubicSeatLinearBlend::new(0.3, 0.0);
        for x in GRID {
            assert_abs_diff_eq!(line.eval(x), x, epsilon = 1e-12);
        }
    }

    #[test]
    fn odd_seat_hits_control_point() {
        for n in 0..6 {
            let s = DoubleOddPolynomialSeat::new(0.4, 0.7, n);
            assert_eq!(s.exponent(), 2 * n as i32 + 1);
            assert_abs_diff_eq!(s.eval(0.4), 0.7, epsilon = 1e-12);
            assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);
        }
        // n = 1 is the cubic seat without inversion.
        let odd = DoubleOddPolynomialSeat::new(0.3, 0.6, 1);
        let cubic = DoubleCubicSeat::new(0.3, 0.4);
        for x in GRID {
            assert_abs_diff_eq!(odd.eval(x), cubic.eval(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn polynomial_sigmoid_midpoint() {
        for n in 0..10 {
            let s = DoublePolynomialSigmoid::new(n);
            assert_abs_diff_eq!(s.eval(0.5), 0.5, epsilon = 1e-12);
            assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);
            // Point symmetry about the centre.
            assert_abs_diff_eq!(s.eval(0.2), 1.0 - s.eval(0.8), epsilon = 1e-12);
        }
    }

    #[test]
    fn quadratic_through_point() {
        let s = QuadraticThroughPoint::new(0.3, 0.4);
        assert_abs_diff_eq!(s.eval(0.3), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);

        // A point far above the diagonal pushes the parabola out of the
        // square; the output is clamped.
        let steep = QuadraticThroughPoint::new(0.2, 0.0);
        for i in 0..=20 {
            let y = steep.eval(f64::from(i) / 20.0);
            assert!((0.0..=1.0).contains(&y));
        }
    }
}
