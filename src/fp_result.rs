// Copyright (c) 2025 - Cowboy AI, LLC.

//! Result of a computation, expressed as a right-biased [`Either`].
//!
//! `FpResult<T, E>` is not a separate structure: it is `Either<E, T>` with
//! the left slot reserved for failure information. Every combinator here
//! delegates to the matching `Either` operation, so an error is propagated
//! untouched through any chain of `map_result`/`flat_map_result` calls.

use std::any::type_name;

use tracing::trace;

use crate::errors::FpError;
use crate::fp_adts::Either;

/// Either specialised to failure (left) or success (right)
pub type FpResult<T, E = FpError> = Either<E, T>;

/// Successful result, equivalent to `Either::Right(value)`
pub fn ok<T, E>(value: T) -> FpResult<T, E> {
    Either::Right(value)
}

/// Failed result, equivalent to `Either::Left(error)`
pub fn err<T, E>(error: E) -> FpResult<T, E> {
    Either::Left(error)
}

/// Transform the success value; errors pass through unchanged
pub fn map_result<T, R, E, F>(res: FpResult<T, E>, f: F) -> FpResult<R, E>
where
    F: FnOnce(T) -> R,
{
    res.map(f)
}

/// Chain a fallible computation, stopping at the first error
pub fn flat_map_result<T, R, E, F>(res: FpResult<T, E>, f: F) -> FpResult<R, E>
where
    F: FnOnce(T) -> FpResult<R, E>,
{
    res.flat_map(f)
}

/// Run a conventional fallible call and lift its outcome into the algebra
///
/// This is the only place where a foreign `Result` error becomes the left
/// payload of an `FpResult`.
pub fn attempt<T, E, F>(f: F) -> FpResult<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(value) => ok(value),
        Err(error) => {
            trace!(error_type = type_name::<E>(), "fallible call lifted into Err");
            err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_and_err_are_right_and_left() {
        let success: FpResult<i32> = ok(42);
        let failure: FpResult<i32> = err(FpError::failure("boom"));

        assert_eq!(success, Either::Right(42));
        assert_eq!(failure, Either::Left(FpError::failure("boom")));
    }

    #[test]
    fn test_map_result_delegates() {
        let success: FpResult<i32> = ok(20);
        let failure: FpResult<i32> = err(FpError::failure("boom"));

        assert_eq!(map_result(success.clone(), |x| x + 1), success.map(|x| x + 1));
        assert_eq!(map_result(failure.clone(), |x| x + 1), failure);
    }

    #[test]
    fn test_flat_map_result_stops_at_first_error() {
        let half = |x: i32| -> FpResult<i32> {
            if x % 2 == 0 {
                ok(x / 2)
            } else {
                err(FpError::failure(format!("{x} is odd")))
            }
        };

        let chained = flat_map_result(flat_map_result(ok(12), half), half);
        assert_eq!(chained, ok(3));

        let stopped = flat_map_result(flat_map_result(ok(6), half), half);
        assert_eq!(stopped, err(FpError::failure("3 is odd")));
    }

    #[test]
    fn test_attempt() {
        let success: FpResult<i32, String> = attempt(|| Ok(42));
        assert_eq!(success, ok(42));

        let failure: FpResult<i32, String> = attempt(|| Err("bad input".to_string()));
        assert_eq!(failure, err("bad input".to_string()));
    }

    #[test]
    fn test_attempt_with_std_parse() {
        let parsed = attempt(|| "17".parse::<u32>());
        assert_eq!(parsed.get_right(), Some(17));

        let rejected = attempt(|| "x".parse::<u32>());
        assert!(rejected.is_left());
    }
}
