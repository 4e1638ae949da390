// Copyright 2025 Cowboy AI, LLC.

//! # CIM FP
//!
//! Algebraic data types and combinators for the Composable Information Machine.
//!
//! This crate provides the value algebra used by FP style APIs:
//! - **Optional**: presence or absence of a value, with no detail attached to absence
//! - **Either**: exactly one of two tagged alternatives, `Left` or `Right`
//! - **FpResult**: `Either` with the left slot reserved for failure information
//! - **Functor / Monad**: the shared `fmap`/`bind` protocol and Kleisli composition
//! - **Sequence helpers**: `map`, `filter`, `reduce` over ordered collections
//! - **Composition helpers**: `compose`, `pipe`, `compose_many`, `pipe_many`
//!
//! ## Design Principles
//!
//! 1. **Sum Types**: the inactive alternative is structurally absent, never a placeholder
//! 2. **Immutability**: every combinator consumes its input and returns a new value
//! 3. **Right Bias**: `map` and `flat_map` only touch the success slot
//! 4. **Short-Circuit**: absence and `Left` pass through untouched; supplied functions are not called
//! 5. **Single Boundary**: [`attempt`] is the only adapter from a foreign `Result` into the algebra
//!
//! ## Example
//!
//! ```rust
//! use cim_fp::Either;
//!
//! let result = Either::<String, i32>::Right(21)
//!     .map(|x| x * 2)
//!     .flat_map(|x| {
//!         if x > 10 {
//!             Either::Right(x + 1)
//!         } else {
//!             Either::Left("too small".to_string())
//!         }
//!     });
//!
//! assert_eq!(result.get_right(), Some(43));
//! ```

#![warn(missing_docs)]

mod errors;
mod fp_adts;
mod fp_option;
mod fp_result;

pub mod fp_compose;
pub mod fp_monad;
pub mod fp_sequence;

// Re-export core types
pub use errors::FpError;
pub use fp_adts::Either;
pub use fp_monad::{kleisli, Functor, Monad};
pub use fp_option::Optional;
pub use fp_result::{attempt, err, flat_map_result, map_result, ok, FpResult};
