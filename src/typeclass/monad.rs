//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::Try;
//! use attempt::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Try<i32> {
//!     Try::from_result(text.parse::<i32>()).filter(|n| *n > 0, || "not positive")
//! }
//!
//! let result = Try::success("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Try::success(n * 2));
//! assert_eq!(result, Try::success(84));
//! ```

use super::applicative::Applicative;
use crate::control::Try;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next`
    /// is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Monad;
    ///
    /// assert_eq!(Try::success(1).then(Try::success("next")), Try::success("next"));
    /// assert!(Try::<i32>::error("first").then(Try::success("next")).is_error());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Try<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Failure;
    use rstest::rstest;

    #[rstest]
    fn try_flat_map_success_to_success() {
        assert_eq!(Try::success(5).flat_map(|n| Try::success(n * 2)), Try::success(10));
    }

    #[rstest]
    fn try_flat_map_success_to_error() {
        let result: Try<i32> = Try::success(5).flat_map(|_| Try::error("nope"));
        assert_eq!(result, Try::Error(Failure::new("nope")));
    }

    #[rstest]
    fn try_and_then_alias() {
        assert_eq!(Try::success(1).and_then(|n| Try::success(n + 1)), Try::success(2));
    }

    #[rstest]
    fn try_flat_map_panic_becomes_error() {
        let result: Try<i32> = Try::success(5).flat_map(|_| panic!("boom"));
        assert_eq!(result, Try::Error(Failure::new("boom")));
    }
}
