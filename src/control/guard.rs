//! Guarded invocation of caller-supplied code.
//!
//! Every combinator on `Try` that calls into user code does so through
//! [`guarded`] (or [`guarded_future`] for deferred steps), so a panic
//! raised anywhere inside a step is turned into a [`Failure`] in one place.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Failure;

/// Runs `thunk`, converting a panic into a [`Failure`].
///
/// The closure is wrapped in [`AssertUnwindSafe`]: a step that panics
/// never hands its partially updated captures back to the chain, because
/// the chain continues with the `Failure` alone.
pub(crate) fn guarded<R, F>(thunk: F) -> Result<R, Failure>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(thunk)).map_err(captured)
}

/// Polls `future` to completion, converting a panic raised during any poll
/// into a [`Failure`].
#[cfg(feature = "async")]
pub(crate) async fn guarded_future<Fut>(future: Fut) -> Result<Fut::Output, Failure>
where
    Fut: std::future::Future,
{
    use futures::FutureExt;

    AssertUnwindSafe(future).catch_unwind().await.map_err(captured)
}

fn captured(payload: Box<dyn std::any::Any + Send>) -> Failure {
    let failure = Failure::from_panic(payload);
    tracing::debug!(failure = %failure, "captured panic as failure");
    failure
}
