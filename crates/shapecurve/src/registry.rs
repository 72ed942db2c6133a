//! Central registry of shaper metadata and constructors.
//!
//! Every shaper is reachable by a short kebab-case key. The registry knows each
//! shaper's parameters, their defaults and nominal ranges, and how to build the
//! shaper from a flat slice of values.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    curves::{
        BlinnWyvillCosine, CircularArcThroughPoint, CircularEaseIn, CircularEaseOut,
        CircularFillet, CubicBezier, CubicBezierThroughPoints, DoubleCircleSeat,
        DoubleCircleSigmoid, DoubleCubicSeat, DoubleCubicSeatLinearBlend, DoubleEllipticSeat,
        DoubleEllipticSigmoid, DoubleExponentialSeat, DoubleExponentialSigmoid,
        DoubleOddPolynomialSeat, DoublePolynomialSigmoid, ExponentialEasing, LogisticSigmoid,
        QuadraticBezier, QuadraticThroughPoint,
    },
    error::{Error, Result},
    ops::EPSILON,
    shaper::Shaper,
};

/// Description of one shaper parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Short parameter name, as used in documentation.
    pub name: &'static str,
    /// Value used when no parameters are supplied.
    pub default: f64,
    /// Smallest value the shaper uses; lower values are clamped.
    pub min: f64,
    /// Largest value the shaper uses; higher values are clamped.
    pub max: f64,
}

/// A parameter clamped to `[EPSILON, 1 - EPSILON]`.
const fn open(name: &'static str, default: f64) -> Param {
    Param {
        name,
        default,
        min: EPSILON,
        max: 1.0 - EPSILON,
    }
}

/// A parameter clamped to `[0, 1]`.
const fn unit(name: &'static str, default: f64) -> Param {
    Param {
        name,
        default,
        min: 0.0,
        max: 1.0,
    }
}

/// A non-negative integer parameter with a lower bound.
const fn order(name: &'static str, default: f64, min: f64) -> Param {
    Param {
        name,
        default,
        min,
        max: u32::MAX as f64,
    }
}

/// Round a parameter value to the integer a shaper expects.
fn to_order(v: f64) -> u32 {
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Metadata and constructor for one shaper.
#[derive(Debug, Clone, Copy)]
pub struct ShaperEntry {
    /// Registry key, e.g. `cubic-seat`.
    pub key: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// Parameters in positional order.
    pub params: &'static [Param],
    /// Build the shaper from exactly `params.len()` values.
    build: fn(&[f64]) -> Box<dyn Shaper>,
}

impl ShaperEntry {
    /// Number of parameters the shaper takes.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Default parameter values in positional order.
    pub fn defaults(&self) -> SmallVec<[f64; 4]> {
        self.params.iter().map(|p| p.default).collect()
    }

    /// Parameter list with defaults, e.g. `a=0.4, b=0.5`.
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(|p| format!("{}={}", p.name, p.default))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// All known shapers, in presentation order.
pub const REGISTRY: &[ShaperEntry] = &[
    ShaperEntry {
        key: "blinn-wyvill",
        display: "Blinn-Wyvill Cosine",
        params: &[],
        build: |_| Box::new(BlinnWyvillCosine::new()),
    },
    ShaperEntry {
        key: "cubic-seat",
        display: "Double-Cubic Seat",
        params: &[open("a", 0.4), unit("b", 0.5)],
        build: |p| Box::new(DoubleCubicSeat::new(p[0], p[1])),
    },
    ShaperEntry {
        key: "cubic-seat-blend",
        display: "Double-Cubic Seat with Linear Blend",
        params: &[open("a", 0.4), unit("b", 0.3)],
        build: |p| Box::new(DoubleCubicSeatLinearBlend::new(p[0], p[1])),
    },
    ShaperEntry {
        key: "odd-seat",
        display: "Double-Odd-Polynomial Seat",
        params: &[open("a", 0.5), unit("b", 0.5), order("n", 2.0, 0.0)],
        build: |p| Box::new(DoubleOddPolynomialSeat::new(p[0], p[1], to_order(p[2]))),
    },
    ShaperEntry {
        key: "poly-sigmoid",
        display: "Double-Polynomial Sigmoid",
        params: &[order("n", 3.0, 1.0)],
        build: |p| Box::new(DoublePolynomialSigmoid::new(to_order(p[0]))),
    },
    ShaperEntry {
        key: "quadratic-point",
        display: "Quadratic Through a Point",
        params: &[open("a", 0.25), unit("b", 0.5)],
        build: |p| Box::new(QuadraticThroughPoint::new(p[0], p[1])),
    },
    ShaperEntry {
        key: "exponential",
        display: "Exponential Easing",
        params: &[open("a", 0.75)],
        build: |p| Box::new(ExponentialEasing::new(p[0])),
    },
    ShaperEntry {
        key: "exp-seat",
        display: "Double-Exponential Seat",
        params: &[open("a", 0.5)],
        build: |p| Box::new(DoubleExponentialSeat::new(p[0])),
    },
    ShaperEntry {
        key: "exp-sigmoid",
        display: "Double-Exponential Sigmoid",
        params: &[open("a", 0.426)],
        build: |p| Box::new(DoubleExponentialSigmoid::new(p[0])),
    },
    ShaperEntry {
        key: "logistic",
        display: "Logistic Sigmoid",
        params: &[open("a", 0.8)],
        build: |p| Box::new(LogisticSigmoid::new(p[0])),
    },
    ShaperEntry {
        key: "circular-in",
        display: "Circular Ease-In",
        params: &[],
        build: |_| Box::new(CircularEaseIn::new()),
    },
    ShaperEntry {
        key: "circular-out",
        display: "Circular Ease-Out",
        params: &[],
        build: |_| Box::new(CircularEaseOut::new()),
    },
    ShaperEntry {
        key: "circle-seat",
        display: "Double-Circle Seat",
        params: &[unit("a", 0.5)],
        build: |p| Box::new(DoubleCircleSeat::new(p[0])),
    },
    ShaperEntry {
        key: "circle-sigmoid",
        display: "Double-Circle Sigmoid",
        params: &[unit("a", 0.5)],
        build: |p| Box::new(DoubleCircleSigmoid::new(p[0])),
    },
    ShaperEntry {
        key: "ellipse-seat",
        display: "Double-Elliptic Seat",
        params: &[open("a", 0.3), unit("b", 0.7)],
        build: |p| Box::new(DoubleEllipticSeat::new(p[0], p[1])),
    },
    ShaperEntry {
        key: "ellipse-sigmoid",
        display: "Double-Elliptic Sigmoid",
        params: &[open("a", 0.7), unit("b", 0.3)],
        build: |p| Box::new(DoubleEllipticSigmoid::new(p[0], p[1])),
    },
    ShaperEntry {
        key: "quadratic-bezier",
        display: "Quadratic Bezier",
        params: &[unit("a", 0.2), unit("b", 0.8)],
        build: |p| Box::new(QuadraticBezier::new(p[0], p[1])),
    },
    ShaperEntry {
        key: "cubic-bezier",
        display: "Cubic Bezier",
        params: &[
            unit("a", 0.25),
            unit("b", 0.1),
            unit("c", 0.75),
            unit("d", 0.9),
        ],
        build: |p| Box::new(CubicBezier::new(p[0], p[1], p[2], p[3])),
    },
    ShaperEntry {
        key: "cubic-bezier-points",
        display: "Cubic Bezier Through Two Points",
        params: &[
            open("a", 0.3),
            open("b", 0.8),
            open("c", 0.7),
            open("d", 0.4),
        ],
        build: |p| Box::new(CubicBezierThroughPoints::new(p[0], p[1], p[2], p[3])),
    },
    ShaperEntry {
        key: "fillet",
        display: "Double-Linear with Circular Fillet",
        params: &[
            open("a", 0.3),
            open("b", 0.7),
            Param {
                name: "radius",
                default: 0.2,
                min: 0.0,
                max: f64::INFINITY,
            },
        ],
        build: |p| Box::new(CircularFillet::new(p[0], p[1], p[2])),
    },
    ShaperEntry {
        key: "arc-point",
        display: "Circular Arc Through a Point",
        params: &[open("a", 0.3), open("b", 0.3)],
        build: |p| Box::new(CircularArcThroughPoint::new(p[0], p[1])),
    },
];

/// Registry keys, in the same order as [`REGISTRY`].
pub const SHAPER_NAMES: &[&str] = &[
    "blinn-wyvill",
    "cubic-seat",
    "cubic-seat-blend",
    "odd-seat",
    "poly-sigmoid",
    "quadratic-point",
    "exponential",
    "exp-seat",
    "exp-sigmoid",
    "logistic",
    "circular-in",
    "circular-out",
    "circle-seat",
    "circle-sigmoid",
    "ellipse-seat",
    "ellipse-sigmoid",
    "quadratic-bezier",
    "cubic-bezier",
    "cubic-bezier-points",
    "fillet",
    "arc-point",
];

/// Find the entry for `key`.
pub fn lookup(key: &str) -> Result<&'static ShaperEntry> {
    REGISTRY
        .iter()
        .find(|e| e.key == key)
        .ok_or_else(|| Error::UnknownShaper(key.to_string()))
}

/// Check a parameter list against the shaper's arity and reject non-finite
/// values.
///
/// An empty list is always accepted and stands for the defaults. Values
/// outside a parameter's range are accepted; the shaper clamps them.
pub fn validate(key: &str, params: &[f64]) -> Result<&'static ShaperEntry> {
    let entry = lookup(key)?;
    if params.is_empty() {
        return Ok(entry);
    }
    if params.len() != entry.arity() {
        return Err(Error::Arity {
            key: key.to_string(),
            expected: entry.arity(),
            got: params.len(),
        });
    }
    if let Some((index, &value)) = params.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::Param {
            key: key.to_string(),
            index,
            value,
        });
    }
    Ok(entry)
}

/// Construct a shaper by key.
///
/// An empty `params` uses the registry defaults.
pub fn construct(key: &str, params: &[f64]) -> Result<Box<dyn Shaper>> {
    let entry = validate(key, params)?;
    let values = if params.is_empty() {
        entry.defaults()
    } else {
        SmallVec::from_slice(params)
    };
    for (param, &value) in entry.params.iter().zip(values.iter()) {
        if value < param.min || value > param.max {
            debug!(
                shaper = key,
                param = param.name,
                value,
                min = param.min,
                max = param.max,
                "parameter out of range, clamping"
            );
        }
    }
    trace!(shaper = key, params = ?values.as_slice(), "constructing shaper");
    Ok((entry.build)(values.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_registry() {
        let keys: Vec<_> = REGISTRY.iter().map(|e| e.key).collect();
        assert_eq!(keys, SHAPER_NAMES);
    }

    #[test]
    fn defaults_are_in_range() {
        for entry in REGISTRY {
            for p in entry.params {
                assert!(
                    p.min <= p.default && p.default <= p.max,
                    "{}: {} default out of range",
                    entry.key,
                    p.name
                );
            }
        }
    }

    #[test]
    fn every_entry_constructs() {
        for entry in REGISTRY {
            let shaper = construct(entry.key, &[]).expect("defaults construct");
            assert_eq!(shaper.name(), entry.display);
            let explicit = construct(entry.key, &entry.defaults()).expect("explicit");
            assert_eq!(shaper.eval(0.37), explicit.eval(0.37));
        }
    }

    #[test]
    fn rejects_bad_requests() {
        assert_eq!(
            construct("nope", &[]).err(),
            Some(Error::UnknownShaper("nope".into()))
        );
        assert_eq!(
            validate("cubic-seat", &[0.5]).err(),
            Some(Error::Arity {
                key: "cubic-seat".into(),
                expected: 2,
                got: 1,
            })
        );
        assert!(matches!(
            validate("fillet", &[0.5, f64::NAN, 0.1]),
            Err(Error::Param { index: 1, .. })
        ));
        assert!(validate("blinn-wyvill", &[0.5]).is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped_not_rejected() {
        let wild = construct("cubic-seat", &[-4.0, 9.0]).expect("clamped");
        let tame = construct("cubic-seat", &[0.0, 1.0]).expect("in range");
        assert_eq!(wild.eval(0.3), tame.eval(0.3));
    }

    #[test]
    fn integer_parameters_round() {
        assert_eq!(to_order(2.4), 2);
        assert_eq!(to_order(2.6), 3);
        assert_eq!(to_order(-1.0), 0);
        let a = construct("poly-sigmoid", &[3.2]).expect("poly");
        let b = construct("poly-sigmoid", &[3.0]).expect("poly");
        assert_eq!(a.eval(0.2), b.eval(0.2));
    }

    #[test]
    fn signature_lists_defaults() {
        let entry = lookup("cubic-seat").expect("entry");
        assert_eq!(entry.signature(), "a=0.4, b=0.5");
        assert_eq!(lookup("blinn-wyvill").expect("entry").signature(), "");
    }
}
