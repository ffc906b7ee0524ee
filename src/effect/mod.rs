//! Effects layered on top of `Try`.
//!
//! - [`MonadError`]: Throwing and catching failures through a type class
//! - Asynchronous bind (`async` feature): `Try::bind_async`,
//!   `Try::bind_with_async`, `Try::map_async`, `Try::catching_async` and
//!   `Try::from_join_handle`

#[cfg(feature = "async")]
mod async_try;
mod monad_error;

pub use monad_error::MonadError;
