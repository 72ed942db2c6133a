//! Shaping and easing functions over the unit square.
//!
//! Each shaper is built once from a handful of parameters and then maps an
//! input in `[0, 1]` to an output, usually also in `[0, 1]`. Constructors never
//! fail: out-of-range parameters are clamped. All shapers implement the
//! [`Shaper`] trait and are reachable by name through the [`registry`].
//!
//! # Supported Shapers
//!
//! - Polynomial: Blinn-Wyvill cosine, double-cubic seat (plain and blended),
//!   double-odd-polynomial seat, double-polynomial sigmoid, quadratic through a
//!   point
//! - Exponential: exponential easing, double-exponential seat and sigmoid,
//!   logistic sigmoid
//! - Circular: ease-in/out, double-circle and double-elliptic seats and
//!   sigmoids
//! - Bezier: quadratic, cubic, cubic through two points
//! - Geometric: double-linear with circular fillet, circular arc through a
//!   point

/// Implementations of specific shaping functions.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Parameter normalization shared by shaper implementations.
#[doc(hidden)]
pub mod ops;
/// 2D points and lines used by the geometric shapers.
pub mod point;
/// The `Shaper` trait and related utilities.
mod shaper;
/// Textual shaper specifications.
pub mod spec;

pub use crate::shaper::{Inspect, Shaper, ShaperExt};

/// Central registry of shaper metadata and constructors.
pub mod registry;

/// Construct a shaper by registry key.
///
/// An empty `params` slice selects the shaper's defaults. Returns an error if
/// the name is unknown, the parameter count is wrong, or a value is not
/// finite.
pub fn shaper_from_name(name: &str, params: &[f64]) -> error::Result<Box<dyn Shaper + 'static>> {
    registry::construct(name, params)
}
