//! The `Try` container and its siblings.
//!
//! This module provides:
//!
//! - [`Try`]: A computed value or a captured failure
//! - [`Failure`]: The opaque failure value (message plus cause chain)
//! - [`Either`]: A tagged choice between a typed error and a value
//!
//! Data flows one way: a producer creates a `Try` (from a value, a
//! callback, an `Option`, an `Either` or a `Result`), callers chain
//! combinators, and a terminal operation turns it back into a plain value.
//!
//! # Examples
//!
//! ## Composing Fallible Steps
//!
//! ```rust
//! use attempt::control::{Failure, Try};
//!
//! fn lookup(id: u32) -> Option<&'static str> {
//!     (id == 1).then_some("ada")
//! }
//!
//! let greeting = Try::success(1)
//!     .bind(|id| Try::from_option(lookup(id), || format!("no user {id}")))
//!     .map(|name| format!("hello, {name}"));
//! assert_eq!(greeting, Try::success("hello, ada".to_string()));
//!
//! let missing = Try::success(2).bind(|id| Try::from_option(lookup(id), || format!("no user {id}")));
//! assert_eq!(missing, Try::Error(Failure::new("no user 2")));
//! ```
//!
//! ## Capturing Panics
//!
//! ```rust
//! use attempt::control::Try;
//!
//! let items = vec![1, 2, 3];
//! let result = Try::success(7).map(|index| items[index]);
//! assert!(result.is_error());
//! ```

mod either;
mod failure;
pub(crate) mod guard;
mod sequence;
mod try_monad;

pub use either::Either;
pub use failure::{Chain, Failure};
pub use try_monad::Try;
