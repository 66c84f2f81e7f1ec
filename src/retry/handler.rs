//! Failure handlers observed between retry attempts.
//!
//! A handler sees every failed attempt, in order, before the next attempt
//! starts or the final error is returned. Any `FnMut(&E)` closure is a
//! handler; [`Ignore`], [`Chain`] and (with the `tracing` feature)
//! [`Logging`] cover the common cases.

/// Callback invoked with the error of each failed attempt.
///
/// # Examples
///
/// ```rust
/// use riverbed::retry::{FailureHandler, Retry};
///
/// #[derive(Default)]
/// struct Tally(Vec<String>);
///
/// impl FailureHandler<String> for Tally {
///     fn on_failure(&mut self, error: &String) {
///         self.0.push(error.clone());
///     }
/// }
///
/// let mut retry = Retry::new(2).with_handler(Tally::default());
/// let result: Result<(), String> = retry.call(|| Err("down".to_string()));
///
/// assert_eq!(result, Err("down".to_string()));
/// assert_eq!(retry.handler().0, vec!["down", "down"]);
/// ```
pub trait FailureHandler<E> {
    /// Observe one failed attempt.
    fn on_failure(&mut self, error: &E);

    /// Run `self`, then `next`, on every failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use riverbed::retry::{retry_with, FailureHandler};
    ///
    /// let mut order = Vec::new();
    /// {
    ///     let first = |_: &&str| order.push("first");
    ///     let mut seen = 0;
    ///     let second = |_: &&str| seen += 1;
    ///     let _ = retry_with(|| Err::<(), _>("nope"), 1, first.then(second));
    ///     assert_eq!(seen, 1);
    /// }
    /// assert_eq!(order, vec!["first"]);
    /// ```
    fn then<H>(self, next: H) -> Chain<Self, H>
    where
        Self: Sized,
        H: FailureHandler<E>,
    {
        chain(self, next)
    }
}

impl<E, F> FailureHandler<E> for F
where
    F: FnMut(&E),
{
    #[inline]
    fn on_failure(&mut self, error: &E) {
        self(error)
    }
}

// ========== Ignore ==========

/// Handler that does nothing. The default for [`Retry`](super::Retry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ignore;

/// Returns the do-nothing handler.
#[inline]
pub fn ignore() -> Ignore {
    Ignore
}

impl<E> FailureHandler<E> for Ignore {
    #[inline]
    fn on_failure(&mut self, _error: &E) {}
}

// ========== Chain ==========

/// Handler that runs two handlers in sequence.
///
/// Created by [`chain`] or [`FailureHandler::then`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Combines two handlers; `first` always runs before `second`.
#[inline]
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

impl<A, B> Chain<A, B> {
    /// Splits the chain back into its parts.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<E, A, B> FailureHandler<E> for Chain<A, B>
where
    A: FailureHandler<E>,
    B: FailureHandler<E>,
{
    #[inline]
    fn on_failure(&mut self, error: &E) {
        self.first.on_failure(error);
        self.second.on_failure(error);
    }
}

// ========== Logging ==========

/// Handler that emits a `tracing` warning for every failed attempt.
///
/// The event carries the attempt number (counted by this handler, starting
/// at 1) and the error's `Debug` rendering.
///
/// # Examples
///
/// ```rust
/// use riverbed::retry::{Logging, Retry};
///
/// let mut retry = Retry::new(3).with_handler(Logging::new("fetch_config"));
/// let result: Result<(), &str> = retry.call(|| Err("unreachable"));
/// assert_eq!(result, Err("unreachable"));
/// ```
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logging {
    operation: &'static str,
    failures: u32,
}

#[cfg(feature = "tracing")]
impl Logging {
    /// Creates a logging handler labelled with `operation`.
    pub fn new(operation: &'static str) -> Self {
        Logging {
            operation,
            failures: 0,
        }
    }

    /// Number of failures logged so far.
    pub fn failures(&self) -> u32 {
        self.failures
    }
}

#[cfg(feature = "tracing")]
impl<E: std::fmt::Debug> FailureHandler<E> for Logging {
    fn on_failure(&mut self, error: &E) {
        self.failures += 1;
        tracing::warn!(
            operation = self.operation,
            attempt = self.failures,
            error = ?error,
            "attempt failed"
        );
    }
}
