//! Exponential and logistic shaping functions.

use crate::{
    ops::{clamp_open, clamp_unit, invert},
    shaper::Shaper,
};

/// Power-law ease that swings from ease-out to ease-in as `a` grows.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialEasing {
    /// Exponent applied to the input.
    exponent: f64,
}

impl ExponentialEasing {
    /// Construct the ease. `a < 0.5` emphasises (exponent `2a`), `a >= 0.5`
    /// de-emphasises (exponent `1 / (1 - 2(a - 0.5))`); `a = 0.5` is linear.
    pub fn new(a: f64) -> Self {
        let a = clamp_open(a);
        let exponent = if a < 0.5 {
            2.0 * a
        } else {
            1.0 / (1.0 - 2.0 * (a - 0.5))
        };
        Self { exponent }
    }

    /// The exponent in use.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Shaper for ExponentialEasing {
    fn name(&self) -> &'static str {
        "Exponential Easing"
    }

    fn info(&self) -> &'static str {
        "y = x^k. Below a = 0.5 the curve eases out, above it eases in."
    }

    fn eval(&self, x: f64) -> f64 {
        x.powf(self.exponent)
    }
}

/// Split-at-centre shape shared by the double-exponential seat and sigmoid.
#[inline]
fn double_exponential(x: f64, exponent: f64) -> f64 {
    if x <= 0.5 {
        (2.0 * x).powf(exponent) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - x)).powf(exponent) / 2.0
    }
}

/// Seat formed by two mirrored power curves meeting at the centre.
#[derive(Debug, Clone, Copy)]
pub struct DoubleExponentialSeat {
    /// Exponent `1 - a`.
    exponent: f64,
}

impl DoubleExponentialSeat {
    /// Construct the seat; larger `a` gives a flatter plateau.
    pub fn new(a: f64) -> Self {
        Self {
            exponent: 1.0 - clamp_open(a),
        }
    }
}

impl Shaper for DoubleExponentialSeat {
    fn name(&self) -> &'static str {
        "Double-Exponential Seat"
    }

    fn info(&self) -> &'static str {
        "Two exponential arcs joined flat at (0.5, 0.5); smoother derivatives\n\
        than the cubic seat."
    }

    fn eval(&self, x: f64) -> f64 {
        double_exponential(x, self.exponent)
    }
}

/// Sigmoid formed by two mirrored power curves meeting at the centre.
#[derive(Debug, Clone, Copy)]
pub struct DoubleExponentialSigmoid {
    /// Exponent `1 / (1 - a)`.
    exponent: f64,
}

impl DoubleExponentialSigmoid {
    /// Construct the sigmoid; larger `a` gives a steeper wall. `a` near 0.426
    /// approximates the raised cosine to within 1%.
    pub fn new(a: f64) -> Self {
        Self {
            exponent: 1.0 / invert(clamp_open(a)),
        }
    }
}

impl Shaper for DoubleExponentialSigmoid {
    fn name(&self) -> &'static str {
        "Double-Exponential Sigmoid"
    }

    fn info(&self) -> &'static str {
        "Adjustable-contrast S-curve from two exponential arcs."
    }

    fn eval(&self, x: f64) -> f64 {
        double_exponential(x, self.exponent)
    }
}

/// Logistic curve normalised so that `f(0) = 0`, `f(0.5) = 0.5`, `f(1) = 1`.
#[derive(Debug, Clone, Copy)]
pub struct LogisticSigmoid {
    /// Growth rate derived from `a`.
    rate: f64,
    /// Raw logistic value at `x = 0`.
    low: f64,
    /// Raw logistic value at `x = 1`.
    high: f64,
}

impl LogisticSigmoid {
    /// Construct the sigmoid. `a` regulates the growth rate; as `a` tends to
    /// zero the curve collapses to the identity line.
    pub fn new(a: f64) -> Self {
        let a = clamp_open(a);
        let rate = 1.0 / (1.0 - a) - 1.0;
        Self {
            rate,
            low: 1.0 / (1.0 + rate.exp()),
            high: 1.0 / (1.0 + (-rate).exp()),
        }
    }
}

impl Shaper for LogisticSigmoid {
    fn name(&self) -> &'static str {
        "Logistic Sigmoid"
    }

    fn info(&self) -> &'static str {
        "Normalised logistic growth curve; a sets the slope, a = 0 is linear."
    }

    fn eval(&self, x: f64) -> f64 {
        let raw = 1.0 / (1.0 + (-((x - 0.5) * self.rate * 2.0)).exp());
        clamp_unit((raw - self.low) / (self.high - self.low))
    }
}
