//! Type class traits for `Try`.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//!
//! The implementations delegate to the inherent `Try` combinators, so the
//! same guarding rules apply: a panicking function yields an `Error`.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::Try;
//! use attempt::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Try::success(21)), Try::success(42));
//! assert_eq!(<Try<()>>::pure(1).flat_map(|n| Try::success(n + 1)), Try::success(2));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
