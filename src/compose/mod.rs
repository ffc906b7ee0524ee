//! Composition utilities for `Try`.
//!
//! - [`attempt!`](crate::attempt): Do-notation over `Try`, the Rust
//!   counterpart of a query expression with several generators

mod attempt_macro;
