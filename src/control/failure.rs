//! The failure half of `Try`.
//!
//! A [`Failure`] is an opaque captured-failure value: a human-readable
//! message plus an optional cause. Causes form a chain that can be walked
//! with [`Failure::chain`] and is exposed through
//! [`std::error::Error::source`], so a `Failure` fits anywhere a standard
//! error is expected.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::Failure;
//!
//! let failure = Failure::new("connection refused").context("failed to load config");
//! assert_eq!(failure.message(), "failed to load config");
//! assert_eq!(failure.root_cause().message(), "connection refused");
//! assert_eq!(format!("{failure:#}"), "failed to load config: connection refused");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Message used when a panic payload is neither a string nor a `Failure`.
const OPAQUE_PANIC_MESSAGE: &str = "panic with a non-string payload";

/// A captured failure: a message and an optional cause chain.
///
/// Causes are held behind an [`Arc`], so cloning a `Failure` is cheap and
/// the chain is shared immutably between clones. Equality is structural
/// and compares the whole chain.
///
/// Dropping, comparing, hashing and formatting walk the chain in a loop,
/// so chains of any depth are safe on a small stack.
///
/// # Examples
///
/// ```rust
/// use attempt::control::Failure;
///
/// let inner = Failure::new("disk full");
/// let outer = Failure::with_cause("cannot write journal", inner.clone());
/// assert_eq!(outer.cause(), Some(&inner));
/// assert_eq!(outer.chain().count(), 2);
/// ```
#[derive(Clone)]
pub struct Failure {
    message: String,
    cause: Option<Arc<Failure>>,
}

impl Failure {
    /// Creates a failure with the given message and no cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Failure;
    ///
    /// let failure = Failure::new("boom");
    /// assert_eq!(failure.message(), "boom");
    /// assert!(failure.cause().is_none());
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a failure that wraps a prior failure as its cause.
    pub fn with_cause(message: impl Into<String>, cause: Self) -> Self {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Wraps `self` as the cause of a new failure with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Failure;
    ///
    /// let failure = Failure::new("not found").context("loading user 7");
    /// assert_eq!(failure.to_string(), "loading user 7");
    /// assert_eq!(failure.cause().map(Failure::message), Some("not found"));
    /// ```
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::with_cause(message, self)
    }

    /// Returns the message of this failure, without its causes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the failure this one wraps, if any.
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Iterates over this failure followed by each of its causes.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    /// Rebuilds this chain with `root` appended below its innermost link.
    ///
    /// Every message of `self` is kept, outermost first, and `root` with
    /// its whole chain becomes the new innermost part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Failure;
    ///
    /// let audit = Failure::new("socket closed").context("audit log failed");
    /// let order = Failure::new("card declined").context("payment failed");
    /// let combined = audit.with_root_cause(order);
    /// assert_eq!(
    ///     format!("{combined:#}"),
    ///     "audit log failed: socket closed: payment failed: card declined"
    /// );
    /// ```
    #[must_use]
    pub fn with_root_cause(self, root: Self) -> Self {
        let messages: Vec<String> = self.chain().map(|link| link.message.clone()).collect();
        Self::wrap_messages(root, messages)
    }

    /// Returns the innermost failure of the chain.
    ///
    /// A failure without a cause is its own root cause.
    pub fn root_cause(&self) -> &Self {
        self.chain().last().unwrap_or(self)
    }

    /// Builds a failure from any standard error, preserving its `source` chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Failure;
    ///
    /// let error = "abc".parse::<i32>().unwrap_err();
    /// let failure = Failure::from_error(&error);
    /// assert_eq!(failure.message(), "invalid digit found in string");
    /// ```
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut messages: Vec<String> =
            std::iter::successors(Some(error), |&current| current.source())
                .map(ToString::to_string)
                .collect();

        match messages.pop() {
            Some(innermost) => Self::wrap_messages(Self::new(innermost), messages),
            None => Self::new(error.to_string()),
        }
    }

    /// Wraps `root` in one link per message; the first message ends up outermost.
    fn wrap_messages(root: Self, messages: Vec<String>) -> Self {
        messages
            .into_iter()
            .rev()
            .fold(root, |cause, message| Self::with_cause(message, cause))
    }

    /// Converts a captured panic payload into a failure.
    ///
    /// A payload that already is a `Failure` (as raised by
    /// [`Try::unwrap_or_raise`](super::Try::unwrap_or_raise)) is recovered
    /// unchanged. String payloads, which is what `panic!` produces, become
    /// the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Failure;
    ///
    /// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
    /// assert_eq!(Failure::from_panic(payload).message(), "boom");
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(failure) => return *failure,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::new(*message),
            Err(payload) => payload,
        };
        payload.downcast_ref::<&'static str>().map_or_else(
            || Self::new(OPAQUE_PANIC_MESSAGE),
            |message| Self::new(*message),
        )
    }
}

// =============================================================================
// Chain Iterator
// =============================================================================

/// Iterator over a failure and its causes, outermost first.
///
/// Created by [`Failure::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

// =============================================================================
// Formatting and std::error::Error
// =============================================================================

impl fmt::Display for Failure {
    /// Writes the message. The alternate form (`{:#}`) writes the whole
    /// chain separated by `": "`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)?;
        if formatter.alternate() {
            for cause in self.chain().skip(1) {
                write!(formatter, ": {}", cause.message)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Failure {
    /// Lists the causes flat, outermost first.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Failure");
        debug.field("message", &self.message);
        if self.cause.is_some() {
            let causes: Vec<&str> = self.chain().skip(1).map(Self::message).collect();
            debug.field("causes", &causes);
        }
        debug.finish()
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

// =============================================================================
// Equality, Hashing and Drop
// =============================================================================

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.chain();
        let mut right = other.chain();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(first), Some(second)) => {
                    if std::ptr::eq(first, second) {
                        return true;
                    }
                    if first.message != second.message {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.chain().count());
        for link in self.chain() {
            link.message.hash(state);
        }
    }
}

impl Drop for Failure {
    /// Unlinks uniquely owned causes one at a time instead of recursing.
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(cause) = next {
            next = Arc::into_inner(cause).and_then(|mut failure| failure.cause.take());
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Failure {
    /// Serializes as the sequence of messages, outermost first.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.chain().count()))?;
        for link in self.chain() {
            seq.serialize_element(&link.message)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct FailureVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for FailureVisitor {
    type Value = Failure;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-empty sequence of failure messages")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut messages: Vec<String> = Vec::with_capacity(capacity);
        while let Some(message) = seq.next_element()? {
            messages.push(message);
        }
        match messages.pop() {
            Some(innermost) => Ok(Failure::wrap_messages(Failure::new(innermost), messages)),
            None => Err(serde::de::Error::invalid_length(0, &self)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Failure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FailureVisitor)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Failure {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::from_error(error.as_ref())
    }
}

static_assertions::assert_impl_all!(Failure: Send, Sync, Clone, Error);
