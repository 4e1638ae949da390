// Copyright (c) 2025 - Cowboy AI, LLC.

//! Functor and Monad protocol shared by `Optional` and `Either`
//!
//! Both containers expose the same combinator shape: a covariant `fmap` over
//! the "success" slot and a `bind` that short-circuits on absence or `Left`.
//! The traits make that shape nameable so laws can be stated once.
//!
//! # Monad Laws
//!
//! 1. Left Identity: `pure a >>= f ≡ f a`
//! 2. Right Identity: `m >>= pure ≡ m`
//! 3. Associativity: `(m >>= f) >>= g ≡ m >>= (λx. f x >>= g)`
//!
//! # Functor Laws
//!
//! 1. Identity: `fmap id ≡ id`
//! 2. Composition: `fmap (g ∘ f) ≡ fmap g ∘ fmap f`

use crate::fp_adts::Either;
use crate::fp_option::Optional;

/// A container whose success slot can be mapped
pub trait Functor {
    /// The type held in the success slot
    type Inner;

    /// The same container holding `U` instead
    type Mapped<U>;

    /// Transform the success slot, leaving every other state untouched
    fn fmap<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(Self::Inner) -> U;
}

/// A functor that can lift plain values and chain wrapped computations
pub trait Monad: Functor {
    /// return/pure: Lift a value into the success slot
    fn pure(value: Self::Inner) -> Self;

    /// bind/flatMap: M(A) -> (A -> M(B)) -> M(B)
    fn bind<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(Self::Inner) -> Self::Mapped<U>;
}

impl<T> Functor for Optional<T> {
    type Inner = T;
    type Mapped<U> = Optional<U>;

    fn fmap<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Monad for Optional<T> {
    fn pure(value: T) -> Self {
        Optional::Some(value)
    }

    fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.flat_map(f)
    }
}

impl<L, R> Functor for Either<L, R> {
    type Inner = R;
    type Mapped<U> = Either<L, U>;

    fn fmap<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map(f)
    }
}

impl<L, R> Monad for Either<L, R> {
    fn pure(value: R) -> Self {
        Either::Right(value)
    }

    fn bind<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        self.flat_map(f)
    }
}

/// Kleisli composition: `(A -> M(B)) >=> (B -> M(C))` gives `A -> M(C)`
///
/// The second arrow only runs when the first produced a success.
pub fn kleisli<A, C, MB, F, G>(f: F, g: G) -> impl Fn(A) -> MB::Mapped<C>
where
    MB: Monad,
    F: Fn(A) -> MB,
    G: Fn(MB::Inner) -> MB::Mapped<C>,
{
    move |a| f(a).bind::<C, _>(|b| g(b))
}
