//! # attempt
//!
//! A `Try` monad for Rust: a container that holds either a computed value
//! or a captured [`Failure`](control::Failure), plus the combinators needed
//! to compose chains of fallible steps without branching on every step.
//!
//! ## Overview
//!
//! Every combinator that runs caller-supplied code guards that call. A
//! panic raised inside a step is caught and becomes a `Try::Error` value,
//! so a chain never unwinds into its caller until a terminal operation
//! such as [`Try::unwrap_or_raise`](control::Try::unwrap_or_raise) asks
//! for it.
//!
//! - **Control**: `Try`, `Failure`, `Either`, conversions and traversal
//! - **Type Classes**: Functor, Applicative, Monad implemented for `Try`
//! - **Composition**: the `attempt!` do-notation macro
//! - **Effect**: `MonadError` and asynchronous bind
//!
//! ## Feature Flags
//!
//! - `control`: The `Try` type and its combinators
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: The `attempt!` macro
//! - `effect`: `MonadError` for `Try`
//! - `async`: Asynchronous bind and tokio task integration
//! - `serde`: `Serialize`/`Deserialize` for `Try`, `Failure` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use attempt::prelude::*;
//!
//! let parsed = Try::from_callback("42", |text: &str| text.parse::<i32>().unwrap())
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 0, || "must be positive");
//! assert_eq!(parsed, Try::success(84));
//!
//! let broken = Try::from_callback("x", |text: &str| text.parse::<i32>().unwrap());
//! assert!(broken.is_error());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use attempt::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;
