//! Try type - a computed value or a captured failure.
//!
//! This module provides the `Try<A>` type, which is either `Success(A)` or
//! `Error(Failure)`. Combinators short-circuit on `Error` and guard every
//! call into user code: a panic raised by a step becomes an `Error` value
//! instead of unwinding through the chain.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Failure, Try};
//!
//! fn parse(text: &str) -> Try<i32> {
//!     Try::from_callback(text, |text: &str| text.trim().parse::<i32>().unwrap())
//! }
//!
//! let total = parse("20").bind(|a| parse("22").map(move |b| a + b));
//! assert_eq!(total, Try::success(42));
//!
//! let broken = parse("20").bind(|_| parse("oops"));
//! assert!(broken.is_error());
//!
//! // Recover a plain value at the end of the chain
//! assert_eq!(broken.unwrap_or_else(|_| 0), 0);
//! ```

use std::error::Error;

use super::Either;
use super::Failure;
use super::guard::guarded;

/// A computed value or a captured failure.
///
/// `Try<A>` is an immutable value: every combinator consumes it and
/// returns a new `Try`. Exactly one variant is populated.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use attempt::control::{Failure, Try};
///
/// let success: Try<i32> = Try::success(21);
/// assert_eq!(success.map(|x| x * 2), Try::success(42));
///
/// let failure: Try<i32> = Try::error("boom");
/// assert_eq!(failure.map(|x| x * 2), Try::Error(Failure::new("boom")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<A> {
    /// The computation produced a value.
    Success(A),
    /// The computation failed.
    Error(Failure),
}

impl<A> Try<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as a success. This is the unit of the monad.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates an error from anything convertible into a [`Failure`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// let from_message: Try<i32> = Try::error("missing field");
    /// let from_failure: Try<i32> = Try::error(Failure::new("missing field"));
    /// assert_eq!(from_message, from_failure);
    /// ```
    #[inline]
    pub fn error(failure: impl Into<Failure>) -> Self {
        Self::Error(failure.into())
    }

    /// Runs `thunk`, capturing a panic as an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// assert_eq!(Try::catching(|| 7), Try::success(7));
    ///
    /// let failed: Try<i32> = Try::catching(|| panic!("boom"));
    /// assert_eq!(failed, Try::Error(Failure::new("boom")));
    /// ```
    pub fn catching<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A,
    {
        guarded(thunk).into()
    }

    /// Invokes `function` with `input`, capturing a panic as an `Error`.
    ///
    /// A panic raised anywhere inside `function`, however deep, is caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let ok = Try::from_callback(vec![1, 2, 3], |items: Vec<i32>| items[2]);
    /// assert_eq!(ok, Try::success(3));
    ///
    /// let out_of_bounds = Try::from_callback(vec![1, 2, 3], |items: Vec<i32>| items[9]);
    /// assert!(out_of_bounds.is_error());
    /// ```
    pub fn from_callback<I, F>(input: I, function: F) -> Self
    where
        F: FnOnce(I) -> A,
    {
        Self::catching(move || function(input))
    }

    /// Converts a `Result` whose error is a standard error.
    ///
    /// The error's `source` chain is kept as the failure's cause chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let parsed = Try::from_result("12".parse::<i32>());
    /// assert_eq!(parsed, Try::success(12));
    ///
    /// let failed = Try::from_result("x".parse::<i32>());
    /// assert_eq!(failed.failure_ref().map(|f| f.message()), Some("invalid digit found in string"));
    /// ```
    pub fn from_result<E>(result: Result<A, E>) -> Self
    where
        E: Error + 'static,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(Failure::from_error(&error)),
        }
    }

    /// Converts an `Option`, building the failure for `None` with `on_absent`.
    ///
    /// `on_absent` may return a [`Failure`], a `String` or a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// assert_eq!(Try::from_option(Some(1), || "absent"), Try::success(1));
    /// assert_eq!(
    ///     Try::from_option(None::<i32>, || "absent"),
    ///     Try::Error(Failure::new("absent"))
    /// );
    /// ```
    pub fn from_option<E, F>(option: Option<A>, on_absent: F) -> Self
    where
        F: FnOnce() -> E,
        E: Into<Failure>,
    {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Error(on_absent().into()),
        }
    }

    /// Converts an `Either` whose `Left` holds an error of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Either, Failure, Try};
    ///
    /// let right: Either<u16, &str> = Either::Right("ok");
    /// assert_eq!(Try::from_either(right, |code| format!("code {code}")), Try::success("ok"));
    ///
    /// let left: Either<u16, &str> = Either::Left(404);
    /// assert_eq!(
    ///     Try::from_either(left, |code| format!("code {code}")),
    ///     Try::Error(Failure::new("code 404"))
    /// );
    /// ```
    pub fn from_either<E, G, F>(either: Either<E, A>, map_error: F) -> Self
    where
        F: FnOnce(E) -> G,
        G: Into<Failure>,
    {
        either.fold(|error| Self::Error(map_error(error).into()), Self::Success)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is an `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns a reference to the captured failure, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Error(failure) => Some(failure),
        }
    }

    // =========================================================================
    // Bind and Map
    // =========================================================================

    /// Feeds the success value into `step`, which itself returns a `Try`.
    ///
    /// An `Error` is returned unchanged without calling `step`. A panic
    /// raised by `step` becomes an `Error`. The `Try` returned by `step`
    /// is returned as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Try::success(n / 2) } else { Try::error("odd") };
    ///
    /// assert_eq!(Try::success(8).bind(halve), Try::success(4));
    /// assert_eq!(Try::success(3).bind(halve), Try::Error(Failure::new("odd")));
    ///
    /// let exploded: Try<i32> = Try::success(1).bind(|_| panic!("boom"));
    /// assert_eq!(exploded, Try::Error(Failure::new("boom")));
    /// ```
    pub fn bind<B, F>(self, step: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Success(value) => guarded(move || step(value)).unwrap_or_else(Try::Error),
            Self::Error(failure) => Try::Error(failure),
        }
    }

    /// Binds `step`, then combines both success values with `combine`.
    ///
    /// This is the two-generator form of bind: the short-circuit rule is
    /// applied to `self`, then to the result of `step`. `step` borrows the
    /// first value so that `combine` can take ownership of both. Panics in
    /// either `step` or `combine` become an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let user = Try::success("ada".to_string());
    /// let greeting = user.bind_with(
    ///     |name| Try::success(name.len()),
    ///     |name, length| format!("{name} ({length})"),
    /// );
    /// assert_eq!(greeting, Try::success("ada (3)".to_string()));
    /// ```
    pub fn bind_with<B, C, F, G>(self, step: F, combine: G) -> Try<C>
    where
        F: FnOnce(&A) -> Try<B>,
        G: FnOnce(A, B) -> C,
    {
        self.bind(move |first| step(&first).map(move |second| combine(first, second)))
    }

    /// Transforms the success value with `function`.
    ///
    /// Defined as `bind` with a step that wraps the result in `Success`,
    /// so a panicking `function` yields an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// assert_eq!(Try::success(2).map(|n| n + 1), Try::success(3));
    /// assert!(Try::success(0).map(|n: i32| 10 / n).is_error());
    /// ```
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        self.bind(move |value| Try::Success(function(value)))
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps a success only if `predicate` holds; otherwise fails with
    /// `on_fail()`.
    ///
    /// `on_fail` may return a [`Failure`], a `String` or a `&str`. An
    /// `Error` passes through without calling either function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// assert_eq!(Try::success(5).filter(|n| *n > 0, || "must be positive"), Try::success(5));
    /// assert_eq!(
    ///     Try::success(-1).filter(|n| *n > 0, || "must be positive"),
    ///     Try::Error(Failure::new("must be positive"))
    /// );
    /// ```
    pub fn filter<P, E, F>(self, predicate: P, on_fail: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce() -> E,
        E: Into<Failure>,
    {
        self.bind(move |value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::Error(on_fail().into())
            }
        })
    }

    /// Fails with `on_fail()` when `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let name = Try::success(String::new()).filter_not(|name| name.is_empty(), || "empty name");
    /// assert!(name.is_error());
    /// ```
    pub fn filter_not<P, E, F>(self, predicate: P, on_fail: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce() -> E,
        E: Into<Failure>,
    {
        self.filter(move |value| !predicate(value), on_fail)
    }

    /// Wraps a captured failure with an outer message, keeping it as the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let failed: Try<i32> = Try::error("timeout").with_context("fetching prices");
    /// let failure = failed.failure_ref().unwrap();
    /// assert_eq!(format!("{failure:#}"), "fetching prices: timeout");
    /// ```
    #[must_use]
    pub fn with_context(self, message: impl Into<String>) -> Self {
        match self {
            Self::Error(failure) => Self::Error(failure.context(message)),
            success => success,
        }
    }

    // =========================================================================
    // Side-effect Hooks
    // =========================================================================

    /// Calls `hook` with the success value, then returns `self` unchanged.
    ///
    /// If `hook` panics the chain continues as an `Error` carrying the
    /// panic's failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let mut seen = Vec::new();
    /// let value = Try::success(3).on_success(|n| seen.push(*n));
    /// assert_eq!(value, Try::success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[must_use]
    pub fn on_success<F>(self, hook: F) -> Self
    where
        F: FnOnce(&A),
    {
        match self {
            Self::Success(value) => match guarded(|| hook(&value)) {
                Ok(()) => Self::Success(value),
                Err(failure) => Self::Error(failure),
            },
            error => error,
        }
    }

    /// Calls `hook` with the captured failure, then returns `self` unchanged.
    ///
    /// If `hook` panics, the resulting failure is the hook's whole failure
    /// chain with the original failure appended as its root cause (see
    /// [`Failure::with_root_cause`]). A hook that re-raises the original
    /// failure unchanged leaves it as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let mut logged = Vec::new();
    /// let value: Try<i32> = Try::error("boom").on_error(|f| logged.push(f.to_string()));
    /// assert!(value.is_error());
    /// assert_eq!(logged, vec!["boom".to_string()]);
    /// ```
    #[must_use]
    pub fn on_error<F>(self, hook: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        match self {
            Self::Error(failure) => match guarded(|| hook(&failure)) {
                Ok(()) => Self::Error(failure),
                Err(hook_failure) if hook_failure == failure => Self::Error(failure),
                Err(hook_failure) => Self::Error(hook_failure.with_root_cause(failure)),
            },
            success => success,
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Resolves both variants into a single value.
    ///
    /// This is terminal: panics raised by either function propagate to the
    /// caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let describe = |t: Try<i32>| t.unify(|n| format!("got {n}"), |f| format!("failed: {f}"));
    /// assert_eq!(describe(Try::success(1)), "got 1");
    /// assert_eq!(describe(Try::error("boom")), "failed: boom");
    /// ```
    pub fn unify<R, S, E>(self, on_success: S, on_error: E) -> R
    where
        S: FnOnce(A) -> R,
        E: FnOnce(Failure) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Error(failure) => on_error(failure),
        }
    }

    /// Returns the success value, or recovers one from the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let failed: Try<usize> = Try::error("boom");
    /// assert_eq!(failed.unwrap_or_else(|f| f.message().len()), 4);
    /// ```
    pub fn unwrap_or_else<F>(self, on_error: F) -> A
    where
        F: FnOnce(Failure) -> A,
    {
        self.unify(|value| value, on_error)
    }

    /// Returns the success value, or re-raises the captured failure.
    ///
    /// The failure is resumed as a panic whose payload is the [`Failure`]
    /// itself, so a guard further up (for example [`Try::catching`])
    /// recovers it unchanged.
    ///
    /// The panic hook is not invoked, so a failure raised outside any guard
    /// ends the thread without printing its message; the only record is a
    /// `TRACE` event. Use [`into_result`](Try::into_result) with `?` when
    /// the failure should be reported rather than unwound.
    ///
    /// # Panics
    ///
    /// Unwinds with the captured `Failure` as payload if this is an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// assert_eq!(Try::success(3).unwrap_or_raise(), 3);
    ///
    /// let inner: Try<i32> = Try::error("boom");
    /// let outer = Try::catching(move || inner.unwrap_or_raise() + 1);
    /// assert_eq!(outer, Try::Error(Failure::new("boom")));
    /// ```
    pub fn unwrap_or_raise(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Error(failure) => {
                tracing::trace!(failure = %failure, "re-raising captured failure");
                std::panic::resume_unwind(Box::new(failure))
            }
        }
    }

    /// Converts into a `Result`, for use with the `?` operator.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if this is an `Error`.
    pub fn into_result(self) -> Result<A, Failure> {
        self.into()
    }

    /// Converts into an `Option`, handing a captured failure to `on_error`.
    ///
    /// `on_error` is called exactly once for an `Error` and never for a
    /// `Success`. The failure detail is dropped afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// assert_eq!(Try::success(1).into_option(|_| {}), Some(1));
    ///
    /// let mut messages = Vec::new();
    /// let failed: Try<i32> = Try::error("boom");
    /// assert_eq!(failed.into_option(|f| messages.push(f.to_string())), None);
    /// assert_eq!(messages, vec!["boom".to_string()]);
    /// ```
    pub fn into_option<F>(self, on_error: F) -> Option<A>
    where
        F: FnOnce(Failure),
    {
        self.unify(Some, |failure| {
            on_error(failure);
            None
        })
    }

    /// Converts into an `Either`, mapping a failure into the `Left` type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Either, Try};
    ///
    /// let failed: Try<i32> = Try::error("boom");
    /// assert_eq!(failed.into_either(|f| f.message().len()), Either::Left(4));
    /// assert_eq!(Try::success(1).into_either(|f| f.message().len()), Either::Right(1));
    /// ```
    pub fn into_either<E, F>(self, map_error: F) -> Either<E, A>
    where
        F: FnOnce(Failure) -> E,
    {
        self.unify(Either::Right, |failure| Either::Left(map_error(failure)))
    }

    /// Converts into an `Either` that keeps the [`Failure`] as its `Left`.
    pub fn into_either_failure(self) -> Either<Failure, A> {
        self.into_either(|failure| failure)
    }
}

// =============================================================================
// Nested Try Operations
// =============================================================================

impl<A> Try<Try<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// assert_eq!(Try::success(Try::success(1)).flatten(), Try::success(1));
    /// let inner_error: Try<Try<i32>> = Try::success(Try::error("boom"));
    /// assert!(inner_error.flatten().is_error());
    /// ```
    pub fn flatten(self) -> Try<A> {
        self.bind(|inner| inner)
    }
}

impl<A> Try<Option<A>> {
    /// Turns a successful `None` into an error built by `on_absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// let lookup = Try::success(None::<i32>).flatten_option(|| "no such key");
    /// assert_eq!(lookup, Try::Error(Failure::new("no such key")));
    ///
    /// let found = Try::success(Some(3)).flatten_option(|| "no such key");
    /// assert_eq!(found, Try::success(3));
    /// ```
    pub fn flatten_option<E, F>(self, on_absent: F) -> Try<A>
    where
        F: FnOnce() -> E,
        E: Into<Failure>,
    {
        self.bind(move |option| Try::from_option(option, on_absent))
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Result<A, Failure>> for Try<A> {
    #[inline]
    fn from(result: Result<A, Failure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Error(failure),
        }
    }
}

impl<A> From<Try<A>> for Result<A, Failure> {
    #[inline]
    fn from(attempt: Try<A>) -> Self {
        match attempt {
            Try::Success(value) => Ok(value),
            Try::Error(failure) => Err(failure),
        }
    }
}

impl<A> From<Either<Failure, A>> for Try<A> {
    #[inline]
    fn from(either: Either<Failure, A>) -> Self {
        Self::from_either(either, |failure| failure)
    }
}

static_assertions::assert_impl_all!(Try<i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn boom() -> Failure {
        Failure::new("boom")
    }

    #[rstest]
    fn test_success_and_error_are_exclusive() {
        let success: Try<i32> = Try::success(1);
        let error: Try<i32> = Try::error(boom());
        assert!(success.is_success() && !success.is_error());
        assert!(error.is_error() && !error.is_success());
    }

    #[rstest]
    fn test_refs() {
        let success: Try<i32> = Try::success(1);
        let error: Try<i32> = Try::error(boom());
        assert_eq!(success.success_ref(), Some(&1));
        assert_eq!(success.failure_ref(), None);
        assert_eq!(error.success_ref(), None);
        assert_eq!(error.failure_ref(), Some(&boom()));
    }

    #[rstest]
    fn test_bind_short_circuits_without_invoking_step() {
        let called = Cell::new(false);
        let result: Try<i32> = Try::<i32>::error(boom()).bind(|_| {
            called.set(true);
            panic!("must not run")
        });
        assert_eq!(result, Try::Error(boom()));
        assert!(!called.get());
    }

    #[rstest]
    fn test_bind_captures_panic() {
        let result: Try<i32> = Try::success(1).bind(|_| panic!("boom"));
        assert_eq!(result, Try::Error(boom()));
    }

    #[rstest]
    fn test_bind_returns_step_result_as_is() {
        let result: Try<i32> = Try::success(1).bind(|_| Try::error("inner"));
        assert_eq!(result, Try::error("inner"));
    }

    #[rstest]
    fn test_bind_with_short_circuits_on_step_error() {
        let combined = Cell::new(false);
        let result: Try<i32> = Try::success(1).bind_with(
            |_| Try::<i32>::error("step failed"),
            |a, b| {
                combined.set(true);
                a + b
            },
        );
        assert_eq!(result, Try::error("step failed"));
        assert!(!combined.get());
    }

    #[rstest]
    fn test_bind_with_captures_panic_in_combine() {
        let result: Try<i32> =
            Try::success(1).bind_with(|a| Try::success(*a + 1), |_, _| panic!("boom"));
        assert_eq!(result, Try::Error(boom()));
    }

    #[rstest]
    fn test_bind_with_captures_panic_in_step() {
        let result: Try<i32> = Try::success(1).bind_with(|_| -> Try<i32> { panic!("boom") }, |a, b| a + b);
        assert_eq!(result, Try::Error(boom()));
    }

    #[rstest]
    fn test_map_error_passes_through() {
        let result = Try::<i32>::error(boom()).map(|n| n + 1);
        assert_eq!(result, Try::Error(boom()));
    }

    #[rstest]
    #[case(5, Try::success(5))]
    #[case(-1, Try::error("must be positive"))]
    fn test_filter(#[case] input: i32, #[case] expected: Try<i32>) {
        assert_eq!(
            Try::success(input).filter(|n| *n > 0, || "must be positive"),
            expected
        );
    }

    #[rstest]
    fn test_filter_error_ignores_predicate() {
        let result = Try::<i32>::error(boom()).filter(|_| panic!("not called"), || "unused");
        assert_eq!(result, Try::Error(boom()));
    }

    #[rstest]
    fn test_filter_captures_panicking_predicate() {
        let result = Try::success(1).filter(|_| panic!("boom"), || "unused");
        assert_eq!(result, Try::Error(boom()));
    }

    #[rstest]
    #[case(0, Try::error("zero"))]
    #[case(3, Try::success(3))]
    fn test_filter_not(#[case] input: i32, #[case] expected: Try<i32>) {
        assert_eq!(Try::success(input).filter_not(|n| *n == 0, || "zero"), expected);
    }

    #[rstest]
    fn test_filter_accepts_failure_and_string() {
        let with_failure = Try::success(1).filter(|_| false, boom);
        let with_string = Try::success(1).filter(|_| false, || String::from("boom"));
        assert_eq!(with_failure, with_string);
    }

    #[rstest]
    fn test_with_context_on_success_is_noop() {
        assert_eq!(Try::success(1).with_context("ctx"), Try::success(1));
    }

    #[rstest]
    fn test_on_success_hook_panic_becomes_error() {
        let result = Try::success(1).on_success(|_| panic!("hook failed"));
        assert_eq!(result, Try::error("hook failed"));
    }

    #[rstest]
    fn test_on_error_hook_not_called_on_success() {
        let called = Cell::new(false);
        let result = Try::success(1).on_error(|_| called.set(true));
        assert_eq!(result, Try::success(1));
        assert!(!called.get());
    }

    #[rstest]
    fn test_on_error_hook_panic_keeps_original_as_cause() {
        let result: Try<i32> = Try::error(boom()).on_error(|_| panic!("hook failed"));
        let failure = result.failure_ref().cloned();
        assert_eq!(
            failure,
            Some(Failure::with_cause("hook failed", boom()))
        );
    }

    #[rstest]
    fn test_on_error_hook_keeps_its_own_chain_above_original() {
        let original = Failure::new("disk full").context("write failed");
        let result: Try<i32> = Try::Error(original.clone()).on_error(|_| {
            let hook: Try<()> =
                Try::error(Failure::new("inner hook cause").context("hook failed"));
            hook.unwrap_or_raise();
        });

        let failure = result.failure_ref().expect("should be an error");
        assert_eq!(
            format!("{failure:#}"),
            "hook failed: inner hook cause: write failed: disk full"
        );
        assert_eq!(failure.chain().nth(2), Some(&original));
    }

    #[rstest]
    fn test_on_error_hook_reraising_original_leaves_it_unchanged() {
        let original = Failure::new("inner").context("outer");
        let result: Try<i32> = Try::Error(original.clone())
            .on_error(|failure| Try::<()>::Error(failure.clone()).unwrap_or_raise());
        assert_eq!(result, Try::Error(original));
    }

    #[rstest]
    fn test_unwrap_or_raise_resumes_failure_payload() {
        let failed: Try<i32> = Try::error(boom());
        let payload = std::panic::catch_unwind(move || failed.unwrap_or_raise())
            .expect_err("should unwind");
        assert_eq!(payload.downcast_ref::<Failure>(), Some(&boom()));
    }

    #[rstest]
    fn test_into_result() {
        assert_eq!(Try::success(1).into_result(), Ok(1));
        assert_eq!(Try::<i32>::error(boom()).into_result(), Err(boom()));
    }

    #[rstest]
    fn test_into_option_calls_callback_exactly_once() {
        let calls = Cell::new(0);
        let result = Try::<i32>::error(boom()).into_option(|_| calls.set(calls.get() + 1));
        assert_eq!(result, None);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_into_either_failure_roundtrip() {
        let failed: Try<i32> = Try::error(boom());
        let either = failed.clone().into_either_failure();
        assert_eq!(either, Either::Left(boom()));
        assert_eq!(Try::from(either), failed);
    }

    #[rstest]
    fn test_flatten_variants() {
        assert_eq!(Try::success(Try::success(1)).flatten(), Try::success(1));
        assert_eq!(
            Try::success(Try::<i32>::error(boom())).flatten(),
            Try::Error(boom())
        );
        assert_eq!(Try::<Try<i32>>::error(boom()).flatten(), Try::Error(boom()));
    }

    #[rstest]
    fn test_flatten_option_on_error_skips_on_absent() {
        let result = Try::<Option<i32>>::error(boom()).flatten_option(|| -> Failure {
            panic!("not called")
        });
        assert_eq!(result, Try::Error(boom()));
    }
}
