//! Double-linear interpolator with a circular fillet at the corner.
//!
//! Two segments run from `(0, 0)` to `(a, b)` and from `(a, b)` to `(1, 1)`.
//! The corner is rounded by an arc of the requested radius, tangent to both
//! segments. Construction follows Miller's "Joining Two Lines with a Circular
//! Arc Fillet" (Graphics Gems III).

use tracing::debug;

use crate::{
    ops::{clamp_open, clamp_unit, sqrt_floor},
    point::{Line, Point},
    shaper::Shaper,
};

/// The rounding arc of a fillet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilletArc {
    /// Centre of the arc's circle.
    pub center: Point,
    /// Arc radius.
    pub radius: f64,
    /// Angle of `start` about the centre, in radians.
    pub start_angle: f64,
    /// Angle of `end` about the centre, in radians.
    pub end_angle: f64,
    /// Tangent point on the first segment, where the arc begins.
    pub start: Point,
    /// Tangent point on the second segment, where the arc ends.
    pub end: Point,
}

impl FilletArc {
    /// Build the arc tangent to `l1` and `l2` with the given radius.
    ///
    /// `mid1` and `mid2` are the midpoints of the segments on `l1` and `l2`.
    /// The arc sits on the side of each line facing the other segment.
    /// Returns `None` for a zero radius, for parallel lines, or when either
    /// midpoint lies on the other line.
    fn between(l1: Line, l2: Line, mid1: Point, mid2: Point, radius: f64) -> Option<Self> {
        if radius == 0.0 || l1.is_parallel(&l2) {
            return None;
        }
        let d1 = l1.signed_distance(mid2);
        if d1 == 0.0 {
            return None;
        }
        let d2 = l2.signed_distance(mid1);
        if d2 == 0.0 {
            return None;
        }

        let side = |d: f64| if d <= 0.0 { -radius } else { radius };
        let center = l1.offset(side(d1)).intersect(&l2.offset(side(d2)))?;

        let gv1 = l1.project(center) - center;
        let gv2 = l2.project(center) - center;

        let mut start_angle = gv1.angle();
        let dd = (gv1.dot(&gv1) * gv2.dot(&gv2)).sqrt();
        let sweep = if dd == 0.0 {
            0.0
        } else {
            (gv1.dot(&gv2) / dd).clamp(-1.0, 1.0).acos()
        };
        let (from, to) = if gv1.cross(&gv2) < 0.0 {
            start_angle -= sweep;
            (start_angle + sweep, start_angle)
        } else {
            (start_angle, start_angle + sweep)
        };

        Some(Self {
            center,
            radius,
            start_angle: from,
            end_angle: to,
            start: center.polar_offset(radius, from),
            end: center.polar_offset(radius, to),
        })
    }
}

/// How the two segments are joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilletGeometry {
    /// Segments joined by a tangent arc.
    Arc(FilletArc),
    /// No fillet could be built; the segments meet at a sharp corner.
    Corner,
}

/// Two straight segments meeting near `(a, b)`, joined by a circular arc.
#[derive(Debug, Clone, Copy)]
pub struct CircularFillet {
    /// Corner point the segments would share without the fillet.
    corner: Point,
    /// The join.
    geometry: FilletGeometry,
}

impl CircularFillet {
    /// Construct the fillet with corner `(a, b)` and arc radius `radius`.
    ///
    /// A negative radius is treated as zero. When the corner lies on the
    /// diagonal the segments are colinear and no arc exists, so the shaper
    /// falls back to the plain double-linear join.
    pub fn new(a: f64, b: f64, radius: f64) -> Self {
        let corner = Point::new(clamp_open(a), clamp_open(b));
        let radius = radius.max(0.0);

        let l1 = Line::through(Point::ORIGIN, corner);
        let l2 = Line::through(corner, Point::UNIT);
        let mid1 = Point::ORIGIN.midpoint(&corner);
        let mid2 = corner.midpoint(&Point::UNIT);

        let geometry = match FilletArc::between(l1, l2, mid1, mid2, radius) {
            Some(arc) => FilletGeometry::Arc(arc),
            None => {
                debug!(
                    a = corner.x,
                    b = corner.y,
                    radius,
                    "fillet is degenerate, using double-linear join"
                );
                FilletGeometry::Corner
            }
        };
        Self { corner, geometry }
    }

    /// The computed join geometry.
    pub fn geometry(&self) -> FilletGeometry {
        self.geometry
    }

    /// Sharp-cornered double-linear interpolation through the corner.
    fn corner_eval(&self, x: f64) -> f64 {
        let Point { x: a, y: b } = self.corner;
        if x <= a {
            b * (x / a)
        } else {
            b + (1.0 - b) * ((x - a) / (1.0 - a))
        }
    }
}

impl Shaper for CircularFillet {
    fn name(&self) -> &'static str {
        "Double-Linear with Circular Fillet"
    }

    fn info(&self) -> &'static str {
        "Two lines meeting near (a, b), the corner rounded by an arc of radius c."
    }

    fn eval(&self, x: f64) -> f64 {
        let x = clamp_unit(x);
        let FilletGeometry::Arc(arc) = self.geometry else {
            return self.corner_eval(x);
        };
        let FilletArc {
            center,
            radius,
            start,
            end,
            ..
        } = arc;

        if x <= start.x {
            let t = if start.x > 0.0 { x / start.x } else { 0.0 };
            t * start.y
        } else if x >= end.x {
            let t = if end.x < 1.0 {
                (x - end.x) / (1.0 - end.x)
            } else {
                0.0
            };
            end.y + t * (1.0 - end.y)
        } else {
            let dx = x - center.x;
            let dy = sqrt_floor(radius * radius - dx * dx);
            if x >= center.x {
                center.y - dy
            } else {
                center.y + dy
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn diagonal_corner_is_identity() {
        let s = CircularFillet::new(0.5, 0.5, 0.25);
        assert_eq!(s.geometry(), FilletGeometry::Corner);
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            assert_abs_diff_eq!(s.eval(x), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn arc_is_tangent_to_both_segments() {
        let s = CircularFillet::new(0.3, 0.7, 0.2);
        let FilletGeometry::Arc(arc) = s.geometry() else {
            panic!("expected an arc");
        };
        assert_abs_diff_eq!(arc.radius, 0.2);
        // Both tangent points sit on the circle and on their segment.
        assert_abs_diff_eq!(arc.start.distance(&arc.center), 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.end.distance(&arc.center), 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.start.y, arc.start.x * 0.7 / 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(
            arc.end.y,
            0.7 + (arc.end.x - 0.3) * 0.3 / 0.7,
            epsilon = 1e-9
        );
        assert!(arc.start.x < 0.3 && arc.end.x > 0.3);
    }

    #[test]
    fn follows_segments_away_from_corner() {
        let s = CircularFillet::new(0.3, 0.7, 0.2);
        assert_abs_diff_eq!(s.eval(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(0.1), 0.7 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.eval(0.9), 0.7 + 0.6 * 0.3 / 0.7, epsilon = 1e-9);
        // The arc cuts below the sharp corner.
        assert!(s.eval(0.3) < 0.7);
    }

    #[test]
    fn continuous_and_monotone() {
        for (a, b, r) in [(0.3, 0.7, 0.2), (0.7, 0.3, 0.2), (0.5, 0.8, 0.5)] {
            let s = CircularFillet::new(a, b, r);
            let mut prev = s.eval(0.0);
            for i in 1..=1000 {
                let y = s.eval(f64::from(i) / 1000.0);
                assert!(y >= prev - 1e-9, "({a}, {b}, {r}) drops at step {i}");
                assert!(y - prev < 0.01, "({a}, {b}, {r}) jumps at step {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn zero_radius_is_a_sharp_corner() {
        let s = CircularFillet::new(0.2, 0.9, -1.0);
        assert_eq!(s.geometry(), FilletGeometry::Corner);
        assert_eq!(CircularFillet::new(0.2, 0.9, 0.0).geometry(), FilletGeometry::Corner);
        for x in [0.0, 0.1, 0.2, 0.6, 1.0] {
            assert_abs_diff_eq!(s.eval(x), s.corner_eval(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn input_is_clamped() {
        let s = CircularFillet::new(0.3, 0.7, 0.2);
        assert_eq!(s.eval(-1.0), s.eval(0.0));
        assert_eq!(s.eval(2.0), s.eval(1.0));
    }
}
