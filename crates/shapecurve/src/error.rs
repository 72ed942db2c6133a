//! Error types for shaper lookup and configuration.
//!
//! Shaper constructors never fail; they clamp. Errors only arise when a shaper
//! is requested by name or parsed from a textual specification.

use std::result;

use thiserror::Error;

/// Errors raised by the registry and the specification parser.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No shaper is registered under this key.
    #[error("unknown shaper '{0}'")]
    UnknownShaper(String),
    /// The number of parameters does not match the shaper's arity.
    #[error("shaper '{key}' takes {expected} parameter(s), got {got}")]
    Arity {
        /// Registry key of the shaper.
        key: String,
        /// Number of parameters the shaper takes.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },
    /// A parameter was NaN or infinite and cannot be clamped.
    #[error("parameter {index} of shaper '{key}' is not finite: {value}")]
    Param {
        /// Registry key of the shaper.
        key: String,
        /// Zero-based position of the offending parameter.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// A textual shaper specification could not be parsed.
    #[error("invalid shaper spec: {0}")]
    Spec(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = result::Result<T, Error>;
