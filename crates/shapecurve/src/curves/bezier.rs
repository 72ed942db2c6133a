/*
Bezier shaping functions.

A Bezier curve gives x and y as functions of a parameter t. To use one as a
shaper we must recover t from x first: directly for the quadratic, by
Newton-Raphson for the cubic. Both inversions follow Don Lancaster's Bezmath
notes.
*/

use crate::{
    ops::{EPSILON, clamp_open, clamp_unit, invert},
    point::Point,
    shaper::Shaper,
};

/// Quadratic Bezier from `(0, 0)` to `(1, 1)` with one control point.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticBezier {
    /// Control point abscissa, never exactly 0.5.
    a: f64,
    /// Control point ordinate, inverted.
    b: f64,
    /// Cached `1 - 2a`, the inversion denominator.
    om2a: f64,
}

impl QuadraticBezier {
    /// Construct the curve with control point `(a, 1 - b)`.
    ///
    /// `a = 0.5` makes the inversion denominator vanish, so values within
    /// `EPSILON` of it are moved to `0.5 + EPSILON`.
    pub fn new(a: f64, b: f64) -> Self {
        let mut a = clamp_unit(a);
        if (a - 0.5).abs() < EPSILON {
            a = 0.5 + EPSILON;
        }
        Self {
            a,
            b: invert(clamp_unit(b)),
            om2a: 1.0 - 2.0 * a,
        }
    }
}

impl Shaper for QuadraticBezier {
    fn name(&self) -> &'static str {
        "Quadratic Bezier"
    }

    fn info(&self) -> &'static str {
        "Second-order Bezier with control point (a, 1 - b); matches the slopes of\n\
        the double-linear interpolator at both ends."
    }

    fn eval(&self, x: f64) -> f64 {
        let Self { a, b, om2a } = *self;
        let t = ((a * a + om2a * x).max(0.0).sqrt() - a) / om2a;
        (1.0 - 2.0 * b) * t * t + 2.0 * b * t
    }
}

/// Number of Newton-Raphson steps used to invert x(t).
///
/// Fixed rather than convergence-driven so results are reproducible.
pub const NEWTON_ITERATIONS: usize = 5;

/// Power-basis coefficients of one coordinate of a cubic Bezier.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cubic {
    /// `t³` coefficient.
    c3: f64,
    /// `t²` coefficient.
    c2: f64,
    /// `t` coefficient.
    c1: f64,
    /// Constant term.
    c0: f64,
}

impl Cubic {
    /// Coefficients for control values `p0..p3`.
    fn from_controls(p0: f64, p1: f64, p2: f64, p3: f64) -> Self {
        Self {
            c3: p3 - 3.0 * p2 + 3.0 * p1 - p0,
            c2: 3.0 * p2 - 6.0 * p1 + 3.0 * p0,
            c1: 3.0 * p1 - 3.0 * p0,
            c0: p0,
        }
    }

    /// Value at `t`.
    fn at(&self, t: f64) -> f64 {
        self.c3 * (t * t * t) + self.c2 * (t * t) + self.c1 * t + self.c0
    }

    /// First derivative at `t`.
    fn slope(&self, t: f64) -> f64 {
        3.0 * self.c3 * t * t + 2.0 * self.c2 * t + self.c1
    }
}

/// Cubic Bezier from `(0, 0)` to `(1, 1)` with two control points.
#[derive(Debug, Clone, Copy)]
pub struct CubicBezier {
    /// x(t) coefficients (A, B, C, D).
    x: Cubic,
    /// y(t) coefficients (E, F, G, H).
    y: Cubic,
}

impl CubicBezier {
    /// Construct the curve with control points `(a, b)` and `(c, d)`.
    ///
    /// Coordinates are clamped to the unit square, which keeps x(t)
    /// monotonic and the inversion well defined.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::from_points(
            Point::new(clamp_unit(a), clamp_unit(b)),
            Point::new(clamp_unit(c), clamp_unit(d)),
        )
    }

    /// Construct from control points without clamping.
    fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            x: Cubic::from_controls(0.0, p1.x, p2.x, 1.0),
            y: Cubic::from_controls(0.0, p1.y, p2.y, 1.0),
        }
    }

    /// Solve x(t) = x for t, starting from `t = x`.
    ///
    /// Runs exactly [`NEWTON_ITERATIONS`] steps, clamping t to `[0, 1]` after
    /// each. A step at a flat point leaves t where it is.
    pub fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = self.x.slope(t);
            if slope != 0.0 {
                let dtdx = 1.0 / slope;
                t -= (self.x.at(t) - x) * dtdx;
            }
            t = t.clamp(0.0, 1.0);
        }
        t
    }

    /// The point on the curve at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(self.x.at(t), self.y.at(t))
    }
}

impl Shaper for CubicBezier {
    fn name(&self) -> &'static str {
        "Cubic Bezier"
    }

    fn info(&self) -> &'static str {
        "Third-order Bezier with control points (a, b) and (c, d); produces\n\
        sigmoids, seats, ease-ins and ease-outs."
    }

    fn eval(&self, x: f64) -> f64 {
        self.y.at(self.solve_t(x))
    }
}

/// Parameter at which the curve should pass near the first target.
const T1: f64 = 0.3;
/// Parameter at which the curve should pass near the second target.
const T2: f64 = 0.7;

/// Cubic Bernstein basis values at `t`.
fn bernstein(t: f64) -> [f64; 4] {
    let mt = 1.0 - t;
    [mt * mt * mt, 3.0 * t * mt * mt, 3.0 * t * t * mt, t * t * t]
}

/// Cubic Bezier fitted to pass close to two target points.
///
/// The fit places the targets at `t = 0.3` and `t = 0.7` and solves for the
/// interior control points, so the curve comes close to, but is not
/// guaranteed to hit, the targets.
#[derive(Debug, Clone, Copy)]
pub struct CubicBezierThroughPoints {
    /// Interior control points after clamping.
    controls: (Point, Point),
    /// The fitted curve.
    curve: CubicBezier,
}

impl CubicBezierThroughPoints {
    /// Construct the curve aimed at `(a, 1 - b)` and `(c, 1 - d)`.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        let first = Point::new(clamp_open(a), 1.0 - clamp_open(b));
        let second = Point::new(clamp_open(c), 1.0 - clamp_open(d));
        let (p1, p2) = Self::fit(first, second);
        // Only x is clamped: it keeps x(t) monotonic. y may leave the square.
        let p1 = Point::new(clamp_open(p1.x), p1.y);
        let p2 = Point::new(clamp_open(p2.x), p2.y);
        Self {
            controls: (p1, p2),
            curve: CubicBezier::from_points(p1, p2),
        }
    }

    /// Solve for interior control points putting the curve through `first`
    /// at `T1` and `second` at `T2`.
    fn fit(first: Point, second: Point) -> (Point, Point) {
        let [b0t1, b1t1, b2t1, b3t1] = bernstein(T1);
        let [b0t2, b1t2, b2t2, b3t2] = bernstein(T2);
        let (start, end) = (Point::ORIGIN, Point::UNIT);

        let cc = first - start * b0t1 - end * b3t1;
        let ff = second - start * b0t2 - end * b3t2;

        let denom = b2t1 - (b1t1 * b2t2) / b1t2;
        let p2 = (cc - ff * (b1t1 / b1t2)) * (1.0 / denom);
        let p1 = (cc - p2 * b2t1) * (1.0 / b1t1);
        (p1, p2)
    }

    /// The fitted curve's interior control points.
    pub fn control_points(&self) -> (Point, Point) {
        self.controls
    }
}

impl Shaper for CubicBezierThroughPoints {
    fn name(&self) -> &'static str {
        "Cubic Bezier Through Two Points"
    }

    fn info(&self) -> &'static str {
        "Cubic Bezier fitted to pass close to (a, 1-b) and (c, 1-d)."
    }

    fn eval(&self, x: f64) -> f64 {
        clamp_unit(self.curve.eval(x))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn quadratic_near_midpoint_is_finite() {
        for a in [0.5, 0.5 + EPSILON, 0.5 - EPSILON / 2.0] {
            let s = QuadraticBezier::new(a, 0.8);
            for i in 0..=10 {
                let y = s.eval(f64::from(i) / 10.0);
                assert!(y.is_finite(), "a={a} produced {y}");
            }
        }
    }

    #[test]
    fn quadratic_endpoints() {
        for (a, b) in [(0.2, 0.9), (0.8, 0.1), (0.5, 0.5)] {
            let s = QuadraticBezier::new(a, b);
            assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn quadratic_matches_parametric_form() {
        let (a, b) = (0.2, 0.9);
        let s = QuadraticBezier::new(a, b);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let x = 2.0 * (1.0 - t) * t * a + t * t;
            let y = 2.0 * (1.0 - t) * t * (1.0 - b) + t * t;
            assert_abs_diff_eq!(s.eval(x), y, epsilon = 1e-9);
        }
    }

    #[test]
    fn quadratic_raising_b_lowers_the_curve() {
        // Control point (0.2, 0.1) after inversion.
        assert_abs_diff_eq!(
            QuadraticBezier::new(0.2, 0.9).eval(0.5),
            0.4538360058419276,
            epsilon = 1e-12
        );
        let low = QuadraticBezier::new(0.4, 0.2);
        let high = QuadraticBezier::new(0.4, 0.8);
        for x in [0.25, 0.5, 0.75] {
            assert!(high.eval(x) < low.eval(x), "x={x}");
        }
    }

    #[test]
    fn cubic_on_diagonal_is_identity() {
        for v in [0.1, 0.3, 0.5, 0.8] {
            let s = CubicBezier::new(v, v, v, v);
            for i in 0..=10 {
                let x = f64::from(i) / 10.0;
                assert_abs_diff_eq!(s.eval(x), x, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn cubic_ease_is_monotone() {
        let s = CubicBezier::new(0.25, 0.1, 0.75, 0.9);
        let ys: Vec<f64> = [0.0, 0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|&x| s.eval(x))
            .collect();
        assert!((0.0..=1.0).contains(&ys[2]));
        assert!(ys.windows(2).all(|w| w[0] <= w[1]), "{ys:?}");
        assert_abs_diff_eq!(ys[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ys[4], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_runs_exactly_five_newton_steps() {
        // Both curves are flat in x at t = 0, so five steps from t = x stop
        // short of the root near the origin.
        let s = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(s.solve_t(0.001), 0.01909131246593379, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(0.001), 0.00107951790016365, epsilon = 1e-12);

        let s = CubicBezier::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(s.solve_t(0.01), 0.2453741355711228, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(0.01), 0.15107819842433073, epsilon = 1e-12);
    }

    #[test]
    fn cubic_inverts_x() {
        let s = CubicBezier::new(0.1, 0.9, 0.6, 0.2);
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            let t = s.solve_t(x);
            assert_abs_diff_eq!(s.point_at(t).x, x, epsilon = 1e-6);
        }
    }

    #[test]
    fn cubic_flat_start_does_not_stall_on_nan() {
        // Control point at the origin makes dx/dt vanish at t = 0.
        let s = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            assert!(s.eval(f64::from(i) / 10.0).is_finite());
        }
    }

    #[test]
    fn through_points_passes_close() {
        let targets = [(0.3, 0.2), (0.7, 0.6)];
        let s = CubicBezierThroughPoints::new(
            targets[0].0,
            1.0 - targets[0].1,
            targets[1].0,
            1.0 - targets[1].1,
        );
        for (x, y) in targets {
            assert_abs_diff_eq!(s.eval(x), y, epsilon = 0.05);
        }
        assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn through_points_fit_hits_parameters() {
        let first = Point::new(0.25, 0.4);
        let second = Point::new(0.6, 0.9);
        let (p1, p2) = CubicBezierThroughPoints::fit(first, second);
        let curve = CubicBezier::from_points(p1, p2);
        let at1 = curve.point_at(T1);
        let at2 = curve.point_at(T2);
        assert_abs_diff_eq!(at1.x, first.x, epsilon = 1e-12);
        assert_abs_diff_eq!(at1.y, first.y, epsilon = 1e-12);
        assert_abs_diff_eq!(at2.x, second.x, epsilon = 1e-12);
        assert_abs_diff_eq!(at2.y, second.y, epsilon = 1e-12);
    }

    #[test]
    fn through_points_output_is_clamped() {
        let s = CubicBezierThroughPoints::new(0.1, 0.0, 0.9, 1.0);
        for i in 0..=20 {
            let y = s.eval(f64::from(i) / 20.0);
            assert!((0.0..=1.0).contains(&y));
        }
        let (p1, p2) = s.control_points();
        assert!((EPSILON..=1.0 - EPSILON).contains(&p1.x));
        assert!((EPSILON..=1.0 - EPSILON).contains(&p2.x));
    }
}
