//! Traversal of collections of `Try` values.
//!
//! Collecting an iterator of `Try<A>` walks it left to right and stops at
//! the first `Error`, which becomes the result. Later elements are never
//! pulled from the iterator.

use super::Try;
use super::guard::guarded;

impl<A, V> FromIterator<Try<A>> for Try<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Try<A>>>(iter: I) -> Self {
        let mut first_failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Try::Success(value) => Some(value),
                Try::Error(failure) => {
                    first_failure = Some(failure);
                    None
                }
            })
            .collect();

        match first_failure {
            Some(failure) => Try::Error(failure),
            None => Try::Success(collected),
        }
    }
}

impl<A> Try<Vec<A>> {
    /// Turns a sequence of `Try` values into a `Try` of all payloads.
    ///
    /// Returns the first `Error` encountered, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Failure, Try};
    ///
    /// let all = Try::sequence(vec![Try::success(1), Try::success(2), Try::success(3)]);
    /// assert_eq!(all, Try::success(vec![1, 2, 3]));
    ///
    /// let first_error = Try::sequence(vec![
    ///     Try::success(1),
    ///     Try::error("second"),
    ///     Try::error("third"),
    /// ]);
    /// assert_eq!(first_error, Try::Error(Failure::new("second")));
    /// ```
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Try<A>>,
    {
        items.into_iter().collect()
    }

    /// Applies `function` to each item and sequences the results.
    ///
    /// Each call is guarded. Items after the first failure are not visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let parsed = Try::traverse(["1", "2"], |s| Try::from_result(s.parse::<i32>()));
    /// assert_eq!(parsed, Try::success(vec![1, 2]));
    ///
    /// let failed = Try::traverse(["1", "x"], |s| Try::from_result(s.parse::<i32>()));
    /// assert!(failed.is_error());
    /// ```
    pub fn traverse<T, I, F>(items: I, mut function: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Try<A>,
    {
        items
            .into_iter()
            .map(|item| guarded(|| function(item)).unwrap_or_else(Try::Error))
            .collect()
    }
}
