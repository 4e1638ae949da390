// Copyright (c) 2025 - Cowboy AI, LLC.

//! Optional presence of a value.
//!
//! `Optional<T>` follows the same map/flat_map protocol as
//! [`Either`](crate::Either). Absence carries no detail; it surfaces only
//! through [`Optional::get`] as [`FpError::NoValuePresent`] or silently
//! through [`Optional::get_or_else`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::FpError;
use crate::fp_adts::Either;
use crate::fp_result::FpResult;

/// A value of type `T` that may be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum Optional<T> {
    /// A value is present
    Some(T),
    /// No value
    #[default]
    None,
}

impl<T> Optional<T> {
    /// Wrap a present value
    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// An absent value; `T` must be named or inferable
    pub fn none() -> Self {
        Optional::None
    }

    /// Returns true if a value is present
    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns true if no value is present
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Take the held value, or report that none is present
    pub fn get(self) -> Result<T, FpError> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => {
                trace!("optional value requested but absent");
                Err(FpError::NoValuePresent)
            }
        }
    }

    /// Take the held value or fall back to `default`
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    /// Borrow the held value
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Transform the held value; `f` is never called on absence
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Chain a computation returning an `Optional`, without nesting
    pub fn flat_map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Turn absence into a failure carrying `error`
    pub fn ok_or<E>(self, error: E) -> FpResult<T, E> {
        match self {
            Optional::Some(value) => Either::Right(value),
            Optional::None => Either::Left(error),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Some(v),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }
}
