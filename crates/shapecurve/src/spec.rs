//! Textual shaper specifications.
//!
//! A specification names a registry key and, optionally, its parameters:
//! `cubic-seat` or `cubic-seat:0.3,0.6`. Whitespace around the key and each
//! value is ignored.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    registry,
    shaper::Shaper,
};

/// A shaper key plus an optional parameter list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaperSpec {
    /// Registry key.
    pub key: String,
    /// Parameter values; empty means the registry defaults.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: SmallVec<[f64; 4]>,
}

impl ShaperSpec {
    /// A specification using the shaper's default parameters.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: SmallVec::new(),
        }
    }

    /// A specification with explicit parameters.
    pub fn with_params(key: impl Into<String>, params: &[f64]) -> Self {
        Self {
            key: key.into(),
            params: SmallVec::from_slice(params),
        }
    }

    /// Check the specification against the registry without building it.
    pub fn validate(&self) -> Result<()> {
        registry::validate(&self.key, &self.params).map(|_| ())
    }

    /// Build the shaper this specification describes.
    pub fn build(&self) -> Result<Box<dyn Shaper>> {
        registry::construct(&self.key, &self.params)
    }
}

impl FromStr for ShaperSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, params) = match s.split_once(':') {
            Some((key, params)) => (key.trim(), Some(params)),
            None => (s.trim(), None),
        };
        if key.is_empty() {
            return Err(Error::Spec(format!("missing shaper name in '{s}'")));
        }

        let params = match params {
            None => SmallVec::new(),
            Some(list) if list.trim().is_empty() => SmallVec::new(),
            Some(list) => list
                .split(',')
                .map(|v| {
                    let v = v.trim();
                    v.parse::<f64>()
                        .map_err(|_| Error::Spec(format!("invalid number '{v}' in '{s}'")))
                })
                .collect::<Result<_>>()?,
        };

        Ok(Self {
            key: key.to_string(),
            params,
        })
    }
}

impl fmt::Display for ShaperSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        for (i, v) in self.params.iter().enumerate() {
            f.write_str(if i == 0 { ":" } else { "," })?;
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
