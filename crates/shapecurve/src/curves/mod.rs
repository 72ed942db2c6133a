/// Circular arc through a control point.
pub mod arc;
/// Quadratic and cubic Bezier shapers.
pub mod bezier;
/// Circle and ellipse based seats and sigmoids.
pub mod circular;
/// Exponential and logistic shapers.
pub mod exponential;
/// Double-linear join with a rounded corner.
pub mod fillet;
/// Polynomial seats, sigmoids, and the Blinn-Wyvill cosine.
pub mod polynomial;

pub use self::{
    arc::CircularArcThroughPoint,
    bezier::{CubicBezier, CubicBezierThroughPoints, QuadraticBezier},
    circular::{
        CircularEaseIn, CircularEaseOut, DoubleCircleSeat, DoubleCircleSigmoid,
        DoubleEllipticSeat, DoubleEllipticSigmoid,
    },
    exponential::{
        DoubleExponentialSeat, DoubleExponentialSigmoid, ExponentialEasing, LogisticSigmoid,
    },
    fillet::CircularFillet,
    polynomial::{
        BlinnWyvillCosine, DoubleCubicSeat, DoubleCubicSeatLinearBlend, DoubleOddPolynomialSeat,
        DoublePolynomialSigmoid, QuadraticThroughPoint,
    },
};
