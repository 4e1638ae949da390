// Copyright (c) 2025 - Cowboy AI, LLC.

//! Point-free function combination
//!
//! `compose` reads right-to-left (`f ∘ g`), `pipe` reads left-to-right.
//! The `_many` variants work over same-typed endofunctions; an empty list
//! yields the identity.

/// Boxed endofunction accepted by [`compose_many`] and [`pipe_many`]
pub type Endo<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// The identity function
pub fn identity<T>(value: T) -> T {
    value
}

/// `compose(f, g)(a) == f(g(a))`
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |a| f(g(a))
}

/// `pipe(f, g)(a) == g(f(a))`
pub fn pipe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Apply `fns` from last to first
pub fn compose_many<'a, T: 'a>(fns: Vec<Endo<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |x| fns.iter().rev().fold(x, |acc, f| f(acc))
}

/// Apply `fns` from first to last
pub fn pipe_many<'a, T: 'a>(fns: Vec<Endo<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |x| fns.iter().fold(x, |acc, f| f(acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: i32) -> i32 {
        x * 2
    }

    fn increment(x: i32) -> i32 {
        x + 1
    }

    fn square(x: i32) -> i32 {
        x * x
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(double, increment)(3), 8);
    }

    #[test]
    fn test_pipe() {
        assert_eq!(pipe(double, increment)(3), 7);
    }

    #[test]
    fn test_compose_changes_type() {
        let describe = compose(|n: usize| format!("{n} chars"), |s: &str| s.len());
        assert_eq!(describe("abcd"), "4 chars");
    }

    #[test]
    fn test_compose_many() {
        let fns: Vec<Endo<'_, i32>> = vec![Box::new(square), Box::new(double), Box::new(increment)];
        assert_eq!(compose_many(fns)(2), 36);
    }

    #[test]
    fn test_pipe_many() {
        let fns: Vec<Endo<'_, i32>> = vec![Box::new(increment), Box::new(double), Box::new(square)];
        assert_eq!(pipe_many(fns)(2), 36);
    }

    #[test]
    fn test_empty_is_identity() {
        assert_eq!(compose_many::<i32>(Vec::new())(5), 5);
        assert_eq!(pipe_many::<i32>(Vec::new())(5), identity(5));
    }
}
