//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For `Try`, both laws hold as long as `f` and `g` do not panic; a
//! panicking function yields an `Error` on either side.

use super::higher::TypeConstructor;
use crate::control::Try;

/// A type class for types that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use attempt::control::Try;
/// use attempt::typeclass::Functor;
///
/// assert_eq!(Try::success(5).fmap(|x| x * 2), Try::success(10));
/// assert!(Try::<i32>::error("boom").fmap(|x| x * 2).is_error());
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the inner value with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Functor;
    ///
    /// assert_eq!(Try::success(5).replace("done"), Try::success("done"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Try<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}
