//! `MonadError` type class - throwing and catching within a monad.
//!
//! # Laws
//!
//! ## Throw Catch Law
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Failure, Try};
//! use attempt::effect::MonadError;
//!
//! let failed: Try<i32> = <Try<()>>::throw_error(Failure::new("boom"));
//! let recovered = <Try<()>>::catch_error(failed, |f| Try::success(f.message().len() as i32));
//! assert_eq!(recovered, Try::success(4));
//! ```

use crate::control::guard::guarded;
use crate::control::{Failure, Try};
use crate::typeclass::Monad;

/// A type class for monads that can throw and catch errors of type `E`.
pub trait MonadError<E>: Monad {
    /// Creates a computation that failed with `error`.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Recovers from an error by running `handler` on it.
    ///
    /// A successful computation is returned without calling `handler`.
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Lifts a `Result` into the monad.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>;

    /// Fails with `error()` unless `predicate` holds for the success value.
    fn ensure<A, F, P>(computation: Self::WithType<A>, error: F, predicate: P) -> Self::WithType<A>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool;

    /// Replaces a failed computation with `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::effect::MonadError;
    ///
    /// let failed: Try<i32> = Try::error("boom");
    /// assert_eq!(<Try<()>>::recover_with(failed, Try::success(0)), Try::success(0));
    /// ```
    #[inline]
    fn recover_with<A>(
        computation: Self::WithType<A>,
        default: Self::WithType<A>,
    ) -> Self::WithType<A> {
        Self::catch_error(computation, |_| default)
    }

    /// Transforms the error, keeping the computation failed.
    #[inline]
    fn adapt_error<A, F>(computation: Self::WithType<A>, transform: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> E,
    {
        Self::catch_error(computation, |error| Self::throw_error(transform(error)))
    }

    /// Converts an error into a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::effect::MonadError;
    ///
    /// let failed: Try<usize> = Try::error("boom");
    /// assert_eq!(<Try<()>>::handle_error(failed, |f| f.message().len()), Try::success(4));
    /// ```
    #[inline]
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> A,
    {
        Self::catch_error(computation, |error| Self::pure(handler(error)))
    }
}

impl<T> MonadError<Failure> for Try<T> {
    #[inline]
    fn throw_error<A>(error: Failure) -> Try<A> {
        Try::Error(error)
    }

    fn catch_error<A, F>(computation: Try<A>, handler: F) -> Try<A>
    where
        F: FnOnce(Failure) -> Try<A>,
    {
        match computation {
            Try::Error(failure) => guarded(move || handler(failure)).unwrap_or_else(Try::Error),
            success => success,
        }
    }

    #[inline]
    fn from_result<A>(result: Result<A, Failure>) -> Try<A> {
        result.into()
    }

    fn ensure<A, F, P>(computation: Try<A>, error: F, predicate: P) -> Try<A>
    where
        F: FnOnce() -> Failure,
        P: FnOnce(&A) -> bool,
    {
        computation.filter(predicate, error)
    }
}
