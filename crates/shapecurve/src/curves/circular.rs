//! Circular and elliptic shaping functions.
//!
//! All of these evaluate an arc directly from the input coordinate. Radicands
//! are floored at zero, so inputs outside the arc's span give a finite value
//! rather than NaN.

use crate::{
    ops::{clamp_open, clamp_unit, sqrt_floor},
    shaper::Shaper,
};

/// Quarter circle easing in: slow start, vertical finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularEaseIn;

impl CircularEaseIn {
    /// Construct the shaper. It takes no parameters.
    pub fn new() -> Self {
        Self
    }
}

impl Shaper for CircularEaseIn {
    fn name(&self) -> &'static str {
        "Circular Ease-In"
    }

    fn info(&self) -> &'static str {
        "Quarter circle centred at (0, 1)."
    }

    fn eval(&self, x: f64) -> f64 {
        1.0 - sqrt_floor(1.0 - x * x)
    }
}

/// Quarter circle easing out: vertical start, slow finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularEaseOut;

impl CircularEaseOut {
    /// Construct the shaper. It takes no parameters.
    pub fn new() -> Self {
        Self
    }
}

impl Shaper for CircularEaseOut {
    fn name(&self) -> &'static str {
        "Circular Ease-Out"
    }

    fn info(&self) -> &'static str {
        "Quarter circle centred at (1, 0)."
    }

    fn eval(&self, x: f64) -> f64 {
        sqrt_floor(1.0 - (1.0 - x) * (1.0 - x))
    }
}

/// Two circular arcs meeting with a horizontal tangent at `(a, a)`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleCircleSeat {
    /// Join abscissa in `[0, 1]`.
    a: f64,
}

impl DoubleCircleSeat {
    /// Construct the seat joined at `(a, a)`.
    pub fn new(a: f64) -> Self {
        Self { a: clamp_unit(a) }
    }
}

impl Shaper for DoubleCircleSeat {
    fn name(&self) -> &'static str {
        "Double-Circle Seat"
    }

    fn info(&self) -> &'static str {
        "Two circular arcs joined flat on the diagonal at x = a."
    }

    fn eval(&self, x: f64) -> f64 {
        let a = self.a;
        let dx = x - a;
        if x <= a {
            sqrt_floor(a * a - dx * dx)
        } else {
            1.0 - sqrt_floor((1.0 - a) * (1.0 - a) - dx * dx)
        }
    }
}

/// Two circular arcs meeting with a vertical tangent at `(a, a)`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleCircleSigmoid {
    /// Join abscissa in `[0, 1]`.
    a: f64,
}

impl DoubleCircleSigmoid {
    /// Construct the sigmoid joined at `(a, a)`.
    pub fn new(a: f64) -> Self {
        Self { a: clamp_unit(a) }
    }
}

impl Shaper for DoubleCircleSigmoid {
    fn name(&self) -> &'static str {
        "Double-Circle Sigmoid"
    }

    fn info(&self) -> &'static str {
        "Two circular arcs joined vertically on the diagonal at x = a."
    }

    fn eval(&self, x: f64) -> f64 {
        let a = self.a;
        if x <= a {
            a - sqrt_floor(a * a - x * x)
        } else {
            a + sqrt_floor((1.0 - a) * (1.0 - a) - (x - 1.0) * (x - 1.0))
        }
    }
}

/// Two elliptic arcs meeting with a horizontal tangent at `(a, b)`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleEllipticSeat {
    /// Join abscissa in `[ε, 1-ε]`.
    a: f64,
    /// Join ordinate in `[0, 1]`.
    b: f64,
}

impl DoubleEllipticSeat {
    /// Construct the seat joined at `(a, b)`.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: clamp_open(a),
            b: clamp_unit(b),
        }
    }
}

impl Shaper for DoubleEllipticSeat {
    fn name(&self) -> &'static str {
        "Double-Elliptic Seat"
    }

    fn info(&self) -> &'static str {
        "Generalised circle seat: two elliptic arcs joined flat at (a, b)."
    }

    fn eval(&self, x: f64) -> f64 {
        let Self { a, b } = *self;
        let dx = x - a;
        if x <= a {
            (b / a) * sqrt_floor(a * a - dx * dx)
        } else {
            1.0 - ((1.0 - b) / (1.0 - a)) * sqrt_floor((1.0 - a) * (1.0 - a) - dx * dx)
        }
    }
}

/// Two elliptic arcs meeting with a vertical tangent at `(a, b)`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleEllipticSigmoid {
    /// Join abscissa in `[ε, 1-ε]`.
    a: f64,
    /// Join ordinate in `[0, 1]`.
    b: f64,
}

impl DoubleEllipticSigmoid {
    /// Construct the sigmoid joined at `(a, b)`.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: clamp_open(a),
            b: clamp_unit(b),
        }
    }
}

impl Shaper for DoubleEllipticSigmoid {
    fn name(&self) -> &'static str {
        "Double-Elliptic Sigmoid"
    }

    fn info(&self) -> &'static str {
        "Generalised circle sigmoid: two elliptic arcs joined vertically at (a, b)."
    }

    fn eval(&self, x: f64) -> f64 {
        let Self { a, b } = *self;
        if x <= a {
            b * (1.0 - sqrt_floor(a * a - x * x) / a)
        } else {
            b + ((1.0 - b) / (1.0 - a)) * sqrt_floor((1.0 - a) * (1.0 - a) - (x - 1.0) * (x - 1.0))
        }
    }
}
