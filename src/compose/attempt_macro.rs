//! `attempt!` macro for do-notation over `Try`.
//!
//! The macro chains `Try` computations in an imperative-looking style,
//! similar to Haskell's do-notation or a LINQ query expression. Every
//! bind goes through [`Try::bind`](crate::control::Try::bind), so each
//! step short-circuits on `Error` and a panic in any step is captured.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: extracts the value from a `Try`
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final expression, wrapped in `Try::Success`
//! - `expression` - Final expression, already a `Try`
//!
//! # Examples
//!
//! ```rust
//! use attempt::attempt;
//! use attempt::control::{Failure, Try};
//!
//! fn parse(text: &str) -> Try<i32> {
//!     Try::from_result(text.parse::<i32>())
//! }
//!
//! let sum = attempt! {
//!     a <= parse("20");
//!     b <= parse("22");
//!     let total = a + b;
//!     yield total
//! };
//! assert_eq!(sum, Try::success(42));
//!
//! let failed: Try<i32> = attempt! {
//!     a <= parse("20");
//!     b <= Try::<i32>::error("no second operand");
//!     yield a + b
//! };
//! assert_eq!(failed, Try::Error(Failure::new("no second operand")));
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= expression; rest` expands into
//! `expression.bind(move |pattern| attempt!(rest))`.

/// A macro for do-notation over `Try`.
///
/// # Syntax
///
/// ```text
/// attempt! {
///     pattern <= try_expression;    // Bind
///     let pattern = expression;     // Pure let binding
///     yield expression              // Final value (wrapped in Success)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use attempt::attempt;
/// use attempt::control::Try;
///
/// let pair = attempt! {
///     (x, y) <= Try::success((1, 2));
///     _ <= Try::success("ignored");
///     yield x + y
/// };
/// assert_eq!(pair, Try::success(3));
/// ```
#[macro_export]
macro_rules! attempt {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    (yield $result:expr) => {
        $crate::control::Try::success($result)
    };

    // ==========================================================================
    // Bind operation: pattern <= try_expression; rest
    // ==========================================================================

    ($pattern:ident <= $attempt:expr ; $($rest:tt)+) => {
        $attempt.bind(move |$pattern| {
            $crate::attempt!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $attempt:expr ; $($rest:tt)+) => {
        $attempt.bind(move |($($pattern)*)| {
            $crate::attempt!($($rest)+)
        })
    };

    (_ <= $attempt:expr ; $($rest:tt)+) => {
        $attempt.bind(move |_| {
            $crate::attempt!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::attempt!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::attempt!($($rest)+)
        }
    };

    // ==========================================================================
    // Final expression, already a Try
    // ==========================================================================

    ($result:expr) => {
        $result
    };
}
