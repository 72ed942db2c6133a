//! Lightweight 2D points and lines used by the geometric shapers.

use std::ops::{Add, Mul, Sub};

/// A point (or vector) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
    /// The far corner of the unit square, `(1, 1)`.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Length of the point treated as a vector from the origin.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Midpoint of the segment `self`–`other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Angle of the vector measured from the positive x axis.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The point at `angle` on a circle of `radius` around `self`.
    pub fn polar_offset(&self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An infinite line in implicit form `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Line {
    /// The line through `p1` and `p2`.
    pub fn through(p1: Point, p2: Point) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// Length of the normal vector `(a, b)`.
    pub fn norm(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Signed distance from the line to `p`.
    ///
    /// The sign tells which side of the line `p` is on. A degenerate line
    /// (zero normal) reports a distance of zero.
    pub fn signed_distance(&self, p: Point) -> f64 {
        let d = self.norm();
        if d == 0.0 {
            return 0.0;
        }
        (self.a * p.x + self.b * p.y + self.c) / d
    }

    /// Whether two lines share a direction (parallel or coincident).
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.a * other.b == other.a * self.b
    }

    /// The line shifted along its normal by `offset` units.
    pub fn offset(&self, offset: f64) -> Self {
        Self {
            c: self.c - offset * self.norm(),
            ..*self
        }
    }

    /// Intersection point of two lines, or `None` if they are parallel.
    pub fn intersect(&self, other: &Self) -> Option<Point> {
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            return None;
        }
        Some(Point::new(
            (other.c * self.b - self.c * other.b) / det,
            (self.c * other.a - other.c * self.a) / det,
        ))
    }

    /// Foot of the perpendicular dropped from `p` onto the line.
    ///
    /// Returns the origin for a degenerate line.
    pub fn project(&self, p: Point) -> Point {
        let d = self.a * self.a + self.b * self.b;
        if d == 0.0 {
            return Point::ORIGIN;
        }
        let cp = self.a * p.y - self.b * p.x;
        Point::new(
            (-self.a * self.c - self.b * cp) / d,
            (self.a * cp - self.b * self.c) / d,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn distance() {
        let a = Point::new(2.0, 2.0);
        let b = Point::new(2.0, 1.0);
        assert_eq!(a.distance(&b), 1.0);

        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&b), 0.0);
    }

    #[test]
    fn vector_ops() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), 1.0);
        assert_eq!(b.cross(&a), -1.0);
        assert_eq!(a.midpoint(&b), Point::new(0.5, 0.5));
        assert_abs_diff_eq!(b.angle(), FRAC_PI_2);
    }

    #[test]
    fn signed_distance() {
        // y = x, written as x - y = 0 up to scale.
        let diag = Line::through(Point::ORIGIN, Point::UNIT);
        let above = diag.signed_distance(Point::new(0.0, 1.0));
        let below = diag.signed_distance(Point::new(1.0, 0.0));
        assert_abs_diff_eq!(above.abs(), FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(above, -below, epsilon = 1e-12);
        assert_eq!(diag.signed_distance(Point::new(0.3, 0.3)), 0.0);

        let degenerate = Line::through(Point::UNIT, Point::UNIT);
        assert_eq!(degenerate.signed_distance(Point::ORIGIN), 0.0);
    }

    #[test]
    fn intersection_and_projection() {
        let horizontal = Line::through(Point::new(0.0, 0.5), Point::new(1.0, 0.5));
        let vertical = Line::through(Point::new(0.25, 0.0), Point::new(0.25, 1.0));
        let p = horizontal.intersect(&vertical).expect("lines cross");
        assert_abs_diff_eq!(p.x, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.5, epsilon = 1e-12);

        let other = Line::through(Point::new(0.0, 0.7), Point::new(1.0, 0.7));
        assert!(horizontal.is_parallel(&other));
        assert!(horizontal.intersect(&other).is_none());

        let foot = horizontal.project(Point::new(0.8, 0.1));
        assert_abs_diff_eq!(foot.x, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(foot.y, 0.5, epsilon = 1e-12);
    }
}
