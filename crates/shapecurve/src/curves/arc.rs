//! Circular arc through `(0, 0)`, a control point, and `(1, 1)`.
//!
//! The circle comes from Bourke's three-point construction. Only points near
//! the main diagonal give a circle that stays inside the unit square; others
//! fall back to a unit quarter circle.

use tracing::debug;

use crate::{
    ops::{EPSILON, clamp_open, invert, sqrt_floor},
    point::Point,
    shaper::Shaper,
};

/// A circle by centre and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCircle {
    /// Centre of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
}

impl ArcCircle {
    /// Unit quarter circle easing out, centred at `(1, 0)`.
    const EASE_OUT: Self = Self {
        center: Point::new(1.0, 0.0),
        radius: 1.0,
    };

    /// Unit quarter circle easing in, centred at `(0, 1)`.
    const EASE_IN: Self = Self {
        center: Point::new(0.0, 1.0),
        radius: 1.0,
    };

    /// Circle through `p1`, `p2`, and `p3`, or `None` if they are colinear.
    ///
    /// The chords `p1 → p2` and `p2 → p3` must not be axis-aligned, except for
    /// the case where the first is vertical and the second horizontal, which
    /// is solved directly.
    fn through(p1: Point, p2: Point, p3: Point) -> Option<Self> {
        let da = p2 - p1;
        let db = p3 - p2;

        if da.x.abs() <= EPSILON && db.y.abs() <= EPSILON {
            let center = Point::new(0.5 * (p2.x + p3.x), 0.5 * (p1.y + p2.y));
            return Some(Self {
                center,
                radius: center.distance(&p1),
            });
        }

        let a_slope = da.y / da.x;
        let b_slope = db.y / db.x;
        if (a_slope - b_slope).abs() <= EPSILON {
            return None;
        }

        let cx = (a_slope * b_slope * (p1.y - p3.y) + b_slope * (p1.x + p2.x)
            - a_slope * (p2.x + p3.x))
            / (2.0 * (b_slope - a_slope));
        let cy = -(cx - (p1.x + p2.x) / 2.0) / a_slope + (p1.y + p2.y) / 2.0;
        let center = Point::new(cx, cy);
        Some(Self {
            center,
            radius: center.distance(&p1),
        })
    }
}

/// Whether the chords `p1 → p2` and `p2 → p3` defeat the slope formula.
fn is_perpendicular(p1: Point, p2: Point, p3: Point) -> bool {
    let da = p2 - p1;
    let db = p3 - p2;
    if da.x.abs() <= EPSILON && db.y.abs() <= EPSILON {
        return false;
    }
    [da.y, db.y, da.x, db.x].iter().any(|d| d.abs() <= EPSILON)
}

/// Circle through three points, trying orderings until one avoids
/// axis-aligned chords.
///
/// Returns `None` for colinear points or when every ordering fails.
fn circle_from_points(p1: Point, p2: Point, p3: Point) -> Option<ArcCircle> {
    let orderings = [
        (p1, p2, p3),
        (p1, p3, p2),
        (p2, p1, p3),
        (p2, p3, p1),
        (p3, p2, p1),
        (p3, p1, p2),
    ];
    let (q1, q2, q3) = orderings
        .into_iter()
        .find(|&(q1, q2, q3)| !is_perpendicular(q1, q2, q3))?;
    ArcCircle::through(q1, q2, q3)
}

/// Circular arc through `(0, 0)`, `(a, 1 - b)`, and `(1, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct CircularArcThroughPoint {
    /// The arc's circle; `None` when the shaper is the identity line.
    circle: Option<ArcCircle>,
}

impl CircularArcThroughPoint {
    /// Construct the arc through `(a, 1 - b)`.
    ///
    /// If the three points are colinear the shaper is the identity line. If
    /// the circle's centre lands strictly inside `0 < x < 1` the arc would
    /// leave the square, so a unit quarter circle is used instead.
    pub fn new(a: f64, b: f64) -> Self {
        let a = clamp_open(a);
        let b = invert(clamp_open(b));

        let Some(mut circle) = circle_from_points(Point::ORIGIN, Point::new(a, b), Point::UNIT)
        else {
            debug!(a, b, "arc control point is colinear, using identity");
            return Self { circle: None };
        };

        let cx = circle.center.x;
        if cx > 0.0 && cx < 1.0 {
            debug!(a, b, cx, "arc centre inside the square, using quarter circle");
            circle = if a < cx {
                ArcCircle::EASE_OUT
            } else {
                ArcCircle::EASE_IN
            };
        }
        Self {
            circle: Some(circle),
        }
    }

    /// The circle in use, or `None` for the identity line.
    pub fn circle(&self) -> Option<ArcCircle> {
        self.circle
    }
}

impl Shaper for CircularArcThroughPoint {
    fn name(&self) -> &'static str {
        "Circular Arc Through a Point"
    }

    fn info(&self) -> &'static str {
        "Circular arc through (0, 0), (a, 1-b), and (1, 1); best for points\n\
        near the diagonal."
    }

    fn eval(&self, x: f64) -> f64 {
        let Some(ArcCircle { center, radius }) = self.circle else {
            return x;
        };
        let x = clamp_open(x);
        let dx = x - center.x;
        let dy = sqrt_floor(radius * radius - dx * dx);
        if x >= center.x {
            center.y - dy
        } else {
            center.y + dy
        }
    }
}
