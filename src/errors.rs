// Copyright 2025 Cowboy AI, LLC.

//! Error types for the value algebra

use thiserror::Error;

/// Errors surfaced by the algebraic types
///
/// Absence is the only failure the algebra itself produces. `Failure` carries
/// caller supplied descriptions and is the default left payload of
/// [`FpResult`](crate::FpResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum FpError {
    /// An `Optional` was asked for a value it does not hold
    #[error("no value present")]
    NoValuePresent,

    /// Failure described by the caller
    #[error("{0}")]
    Failure(String),
}

impl FpError {
    /// Create a failure with a caller supplied description
    pub fn failure(msg: impl Into<String>) -> Self {
        FpError::Failure(msg.into())
    }

    /// Check if this error reports absence of a value
    pub fn is_absence(&self) -> bool {
        matches!(self, FpError::NoValuePresent)
    }
}

impl From<String> for FpError {
    fn from(msg: String) -> Self {
        FpError::Failure(msg)
    }
}

impl From<&str> for FpError {
    fn from(msg: &str) -> Self {
        FpError::Failure(msg.to_string())
    }
}
