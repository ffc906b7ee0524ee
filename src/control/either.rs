//! Either type - the typed-error sibling of `Try`.
//!
//! `Either<L, R>` is either `Left(L)` or `Right(R)`. Following the usual
//! convention, `Left` carries the error and `Right` the success value, so
//! a `Try<A>` converts into an `Either<E, A>` once the caller says how a
//! [`Failure`](super::Failure) becomes an `E`.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Either, Try};
//!
//! #[derive(Debug, PartialEq)]
//! enum LookupError {
//!     Missing(String),
//! }
//!
//! let failed: Try<u32> = Try::error("user 7");
//! let typed = failed.into_either(|f| LookupError::Missing(f.message().to_string()));
//! assert_eq!(typed, Either::Left(LookupError::Missing("user 7".to_string())));
//!
//! let answer = Either::<LookupError, u32>::Right(42).fold(|_| 0, |n| n);
//! assert_eq!(answer, 42);
//! ```

use std::fmt;

/// A value that is either an error (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - The type of the left value, conventionally the error
/// * `R` - The type of the right value, conventionally the success
///
/// # Examples
///
/// ```rust
/// use attempt::control::Either;
///
/// let stock: Either<String, u32> = Either::Right(12);
/// assert_eq!(stock.map_right(|units| units * 2), Either::Right(24));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, discarding a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Either;
    ///
    /// let rejected: Either<&str, u32> = Either::Left("quota exceeded");
    /// assert_eq!(rejected.left(), Some("quota exceeded"));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Either;
    ///
    /// let accepted: Either<&str, u32> = Either::Right(200);
    /// assert_eq!(accepted.right(), Some(200));
    ///
    /// let rejected: Either<&str, u32> = Either::Left("quota exceeded");
    /// assert_eq!(rejected.right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies a function to the error if present.
    ///
    /// Useful for turning a typed error into something [`Try`](super::Try)
    /// accepts before converting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Either, Failure};
    ///
    /// let status: Either<u16, String> = Either::Left(503);
    /// let described = status.map_left(|code| Failure::new(format!("upstream returned {code}")));
    /// assert_eq!(described, Either::Left(Failure::new("upstream returned 503")));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Either;
    ///
    /// let body: Either<u16, String> = Either::Right("{\"id\":7}".to_string());
    /// assert_eq!(body.map_right(|text| text.len()), Either::Right(8));
    ///
    /// let status: Either<u16, String> = Either::Left(404);
    /// assert_eq!(status.map_right(|text| text.len()), Either::Left(404));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Either;
    ///
    /// let render = |response: Either<u16, String>| {
    ///     response.fold(|code| format!("error {code}"), |body| body)
    /// };
    /// assert_eq!(render(Either::Left(404)), "error 404");
    /// assert_eq!(render(Either::Right("ok".to_string())), "ok");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Either;
    ///
    /// let cached: Either<&str, u32> = Either::Right(3);
    /// assert_eq!(cached.swap(), Either::Left(3));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
