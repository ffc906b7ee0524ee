//! Asynchronous bind for `Try`.
//!
//! The methods here have the same short-circuit and capture rules as their
//! synchronous counterparts, with steps that may suspend before producing
//! their result:
//!
//! - `self` is fully resolved before a step is called, and a step is fully
//!   awaited before `combine` starts.
//! - An `Error` at any stage skips every later stage; their futures are
//!   never created.
//! - A panic is captured the same way whether it happens while a step
//!   builds its future or while that future is being polled.
//!
//! No timeout or cancellation policy is imposed; dropping the returned
//! future cancels it the usual way.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::Try;
//!
//! async fn fetch_price(item: &str) -> Try<u32> {
//!     Try::from_option((item == "tea").then_some(3), || format!("unknown item {item}"))
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let total = Try::success("tea")
//!     .bind_async(|item| fetch_price(item))
//!     .await
//!     .map(|price| price * 2);
//! assert_eq!(total, Try::success(6));
//! # });
//! ```

use std::future::Future;

use futures::FutureExt;

use crate::control::guard::{guarded, guarded_future};
use crate::control::{Failure, Try};

/// Message of the failure produced when a joined task was cancelled.
const CANCELLED_MESSAGE: &str = "task was cancelled";

impl<A> Try<A> {
    /// Asynchronous [`bind`](Try::bind): awaits the `Try` produced by `step`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let doubled = Try::success(4).bind_async(|n| async move { Try::success(n * 2) }).await;
    /// assert_eq!(doubled, Try::success(8));
    ///
    /// let skipped = Try::<i32>::error("early")
    ///     .bind_async(|n| async move { Try::success(n * 2) })
    ///     .await;
    /// assert_eq!(skipped, Try::Error(Failure::new("early")));
    /// # });
    /// ```
    pub async fn bind_async<B, F, Fut>(self, step: F) -> Try<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Try<B>>,
    {
        match self {
            Self::Success(value) => match guarded(move || step(value)) {
                Ok(future) => guarded_future(future).await.unwrap_or_else(Try::Error),
                Err(failure) => Try::Error(failure),
            },
            Self::Error(failure) => Try::Error(failure),
        }
    }

    /// Asynchronous [`map`](Try::map): awaits the value produced by `function`.
    pub async fn map_async<B, F, Fut>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        self.bind_async(move |value| function(value).map(Try::Success))
            .await
    }

    /// Asynchronous [`bind_with`](Try::bind_with).
    ///
    /// `step` receives a clone of the first value so that `combine` can
    /// own both values. `combine` starts only after `step` has resolved to
    /// a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let order = Try::success("tea".to_string())
    ///     .bind_with_async(
    ///         |item| async move { Try::success(item.len() as u32) },
    ///         |item, quantity| async move { format!("{quantity} x {item}") },
    ///     )
    ///     .await;
    /// assert_eq!(order, Try::success("3 x tea".to_string()));
    /// # });
    /// ```
    pub async fn bind_with_async<B, C, F, FutB, G, FutC>(self, step: F, combine: G) -> Try<C>
    where
        A: Clone,
        F: FnOnce(A) -> FutB,
        FutB: Future<Output = Try<B>>,
        G: FnOnce(A, B) -> FutC,
        FutC: Future<Output = C>,
    {
        self.bind_async(move |first| {
            let second = step(first.clone());
            async move {
                second
                    .await
                    .map_async(move |value| combine(first, value))
                    .await
            }
        })
        .await
    }

    /// Awaits `future`, capturing a panic raised while polling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// assert_eq!(Try::catching_async(async { 1 }).await, Try::success(1));
    /// # });
    /// ```
    pub async fn catching_async<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A>,
    {
        guarded_future(future).await.into()
    }

    /// Awaits a spawned tokio task.
    ///
    /// A panic inside the task becomes a [`Failure`] built from the panic
    /// payload; a cancelled task becomes the failure `"task was cancelled"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let handle = tokio::spawn(async { 40 + 2 });
    /// assert_eq!(Try::from_join_handle(handle).await, Try::success(42));
    /// # });
    /// ```
    pub async fn from_join_handle(handle: tokio::task::JoinHandle<A>) -> Self {
        match handle.await {
            Ok(value) => Self::Success(value),
            Err(error) if error.is_panic() => Self::Error(Failure::from_panic(error.into_panic())),
            Err(error) => {
                tracing::debug!(error = %error, "joined task did not complete");
                Self::Error(Failure::new(CANCELLED_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    #[rstest]
    #[tokio::test]
    async fn test_bind_async_captures_panic_while_building_future() {
        let result: Try<i32> = Try::success(1)
            .bind_async(|_| -> std::future::Ready<Try<i32>> { panic!("sync boom") })
            .await;
        assert_eq!(result, Try::error("sync boom"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_bind_with_async_runs_stages_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let step_log = Arc::clone(&log);
        let combine_log = Arc::clone(&log);

        let result = Try::success(2)
            .bind_with_async(
                move |n| async move {
                    tokio::task::yield_now().await;
                    step_log.lock().unwrap().push("step");
                    Try::success(n * 10)
                },
                move |a, b| async move {
                    combine_log.lock().unwrap().push("combine");
                    a + b
                },
            )
            .await;

        assert_eq!(result, Try::success(22));
        assert_eq!(*log.lock().unwrap(), vec!["step", "combine"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_from_join_handle_captures_task_panic() {
        fn explode() -> i32 {
            panic!("task boom")
        }

        let handle = tokio::spawn(async { explode() });
        let result = Try::from_join_handle(handle).await;
        assert_eq!(result, Try::error("task boom"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_from_join_handle_reports_cancellation() {
        let handle = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            1
        });
        handle.abort();
        let result = Try::from_join_handle(handle).await;
        assert_eq!(result, Try::error("task was cancelled"));
    }
}
