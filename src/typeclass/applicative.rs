//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and `map2`, which combines two computations. For `Try`, `map2` keeps the
//! first `Error` in left-to-right order.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                       // Identity
//! pure(f).apply(pure(x)) == pure(f(x))            // Homomorphism
//! ```

use super::functor::Functor;
use crate::control::Try;

/// A type class for functors that can lift values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use attempt::control::Try;
/// use attempt::typeclass::Applicative;
///
/// let sum = Try::success(1).map2(Try::success(2), |a, b| a + b);
/// assert_eq!(sum, Try::success(3));
///
/// let failed = Try::success(1).map2(Try::<i32>::error("right"), |a, b| a + b);
/// assert!(failed.is_error());
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two computations with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two computations.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two computations, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two computations, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

impl<A> Applicative for Try<A> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::success(value)
    }

    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.bind(move |a| other.map(move |b| function(a, b)))
    }
}
