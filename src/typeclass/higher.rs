//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Try<_>` as a type constructor directly. The
//! [`TypeConstructor`] trait recovers that ability with a generic
//! associated type, which is what lets [`Functor`](super::Functor) and
//! [`Monad`](super::Monad) be written once.
//!
//! # Example
//!
//! ```rust
//! use attempt::control::Try;
//! use attempt::typeclass::Functor;
//!
//! fn describe<T>(value: T) -> T::WithType<String>
//! where
//!     T: Functor<Inner = i32>,
//! {
//!     value.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Try::success(7)), Try::success("#7".to_string()));
//! ```

use crate::control::Try;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Try<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Try<i32>`, `WithType<String>` is `Try<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Try<A> {
    type Inner = A;
    type WithType<B> = Try<B>;
}
