//! Property-based tests for the `Try` laws.
//!
//! - **Monad laws**: left identity, right identity, associativity
//! - **Functor laws**: identity, composition
//! - **Short-circuit**: an `Error` never reaches later steps
//! - **MonadError laws**: throw-catch, catch-pure, throw short-circuit

#![cfg(feature = "effect")]

use attempt::control::{Failure, Try};
use attempt::effect::MonadError;
use attempt::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn failure_strategy() -> impl Strategy<Value = Failure> {
    ("[a-z]{1,8}", proptest::option::of("[a-z]{1,8}")).prop_map(|(message, cause)| match cause {
        Some(cause) => Failure::new(cause).context(message),
        None => Failure::new(message),
    })
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Try::success),
        failure_strategy().prop_map(Try::Error),
    ]
}

fn halve(n: i32) -> Try<i32> {
    if n % 2 == 0 {
        Try::success(n / 2)
    } else {
        Try::error(format!("{n} is odd"))
    }
}

fn decrement(n: i32) -> Try<i32> {
    n.checked_sub(1)
        .map_or_else(|| Try::error("underflow"), Try::success)
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left identity: success(a).bind(f) == f(a)
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Try::success(value).bind(halve), halve(value));
    }

    /// Right identity: m.bind(success) == m
    #[test]
    fn prop_right_identity(attempt in try_strategy()) {
        prop_assert_eq!(attempt.clone().bind(Try::success), attempt);
    }

    /// Associativity: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[test]
    fn prop_associativity(attempt in try_strategy()) {
        let left = attempt.clone().bind(halve).bind(decrement);
        let right = attempt.bind(|x| halve(x).bind(decrement));
        prop_assert_eq!(left, right);
    }

    /// The type class view agrees with the inherent bind.
    #[test]
    fn prop_flat_map_agrees_with_bind(attempt in try_strategy()) {
        prop_assert_eq!(attempt.clone().flat_map(halve), attempt.bind(halve));
    }

    /// pure is the unit of flat_map.
    #[test]
    fn prop_pure_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Try<()>>::pure(value).flat_map(decrement), decrement(value));
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(attempt in try_strategy()) {
        prop_assert_eq!(attempt.clone().fmap(|x| x), attempt);
    }

    #[test]
    fn prop_functor_composition(attempt in try_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = attempt.clone().fmap(function1).fmap(function2);
        let right = attempt.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Short-circuit
// =============================================================================

proptest! {
    /// An error is returned unchanged and the step is never invoked.
    #[test]
    fn prop_error_short_circuits_bind(failure in failure_strategy()) {
        let mut invoked = false;
        let result: Try<i32> = Try::<i32>::Error(failure.clone()).bind(|n| {
            invoked = true;
            Try::success(n)
        });
        prop_assert!(!invoked);
        prop_assert_eq!(result, Try::Error(failure));
    }

    /// Filtering an error ignores the predicate.
    #[test]
    fn prop_error_short_circuits_filter(failure in failure_strategy(), keep in any::<bool>()) {
        let result = Try::<i32>::Error(failure.clone()).filter(|_| keep, || "unused");
        prop_assert_eq!(result, Try::Error(failure));
    }

    /// Sequence returns the first error in order.
    #[test]
    fn prop_sequence_returns_first_error(items in proptest::collection::vec(try_strategy(), 0..16)) {
        let expected = items
            .iter()
            .find_map(|item| item.failure_ref().cloned())
            .map_or_else(
                || Try::success(items.iter().filter_map(|item| item.success_ref().copied()).collect::<Vec<_>>()),
                Try::Error,
            );
        prop_assert_eq!(Try::sequence(items), expected);
    }
}

// =============================================================================
// MonadError Laws
// =============================================================================

proptest! {
    /// catch_error(throw_error(e), handler) == handler(e)
    #[test]
    fn prop_throw_catch(failure in failure_strategy()) {
        let handler = |f: Failure| Try::success(f.message().len());
        let thrown: Try<usize> = <Try<()>>::throw_error(failure.clone());
        prop_assert_eq!(<Try<()>>::catch_error(thrown, handler), handler(failure));
    }

    /// catch_error(pure(a), handler) == pure(a)
    #[test]
    fn prop_catch_pure(value in any::<i32>()) {
        let caught = <Try<()>>::catch_error(Try::success(value), |_| Try::success(0));
        prop_assert_eq!(caught, Try::success(value));
    }

    /// throw_error(e).flat_map(f) == throw_error(e)
    #[test]
    fn prop_throw_short_circuits(failure in failure_strategy()) {
        let thrown: Try<i32> = <Try<()>>::throw_error(failure.clone());
        prop_assert_eq!(thrown.flat_map(halve), Try::Error(failure));
    }
}
