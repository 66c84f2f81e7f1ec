//! Bounded retry execution.

use super::error::RetryError;
use super::handler::{FailureHandler, Ignore};

/// A bounded retry policy plus the handler that observes its failures.
///
/// The policy runs an operation up to `max_attempts` times, returning the
/// first success. Every failed attempt, including the last, is passed to the
/// handler before the next attempt starts (or before the error is returned).
/// When every attempt fails, the last error is returned unchanged.
///
/// # Bounds Behavior
///
/// `max_attempts` must be at least 1. [`Retry::new`] panics on zero;
/// [`Retry::try_new`] reports it as [`RetryError::ZeroAttempts`].
///
/// # Examples
///
/// ```rust
/// use riverbed::retry::Retry;
///
/// let mut calls = 0;
/// let mut retry = Retry::new(4);
///
/// let result = retry.call(|| {
///     calls += 1;
///     if calls < 3 { Err("not yet") } else { Ok(calls) }
/// });
///
/// assert_eq!(result, Ok(3));
/// assert_eq!(calls, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retry<H = Ignore> {
    max_attempts: u32,
    handler: H,
}

impl Retry<Ignore> {
    /// Creates a policy that makes at most `max_attempts` attempts and
    /// ignores failures.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    ///
    /// ```rust,should_panic
    /// use riverbed::retry::Retry;
    ///
    /// let _ = Retry::new(0);
    /// ```
    pub fn new(max_attempts: u32) -> Self {
        match Self::try_new(max_attempts) {
            Ok(retry) => retry,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a policy, reporting a zero bound as an error instead of
    /// panicking.
    pub fn try_new(max_attempts: u32) -> Result<Self, RetryError> {
        if max_attempts == 0 {
            return Err(RetryError::ZeroAttempts);
        }
        Ok(Retry {
            max_attempts,
            handler: Ignore,
        })
    }
}

impl<H> Retry<H> {
    /// Replaces the failure handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use riverbed::retry::Retry;
    ///
    /// let mut failures = Vec::new();
    /// let result: Result<(), u8> = Retry::new(3)
    ///     .with_handler(|e: &u8| failures.push(*e))
    ///     .call(|| Err(7));
    ///
    /// assert_eq!(result, Err(7));
    /// assert_eq!(failures, vec![7, 7, 7]);
    /// ```
    pub fn with_handler<G>(self, handler: G) -> Retry<G> {
        Retry {
            max_attempts: self.max_attempts,
            handler,
        }
    }

    /// Maximum number of attempts, always at least 1.
    #[inline]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the failure handler.
    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consumes the policy, returning the failure handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Runs `op` until it succeeds or the attempt bound is reached.
    pub fn call<T, E, F>(&mut self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        H: FailureHandler<E>,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "retry attempt failed"
                    );
                    self.handler.on_failure(&error);
                    if attempt >= self.max_attempts {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(attempts = attempt, "retry attempts exhausted");
                        return Err(error);
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Runs `op` with the same `input` on every attempt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use riverbed::retry::Retry;
    ///
    /// let mut seen = Vec::new();
    /// let result = Retry::new(2).apply("42", |text| {
    ///     seen.push(text);
    ///     text.parse::<u8>()
    /// });
    ///
    /// assert_eq!(result, Ok(42));
    /// assert_eq!(seen, vec!["42"]);
    /// ```
    pub fn apply<A, T, E, F>(&mut self, input: A, mut op: F) -> Result<T, E>
    where
        A: Clone,
        F: FnMut(A) -> Result<T, E>,
        H: FailureHandler<E>,
    {
        self.call(|| op(input.clone()))
    }
}

/// Runs `op` at most `max_attempts` times, returning the first success or the
/// last error.
///
/// # Panics
///
/// Panics if `max_attempts` is zero.
///
/// # Examples
///
/// ```rust
/// use riverbed::retry;
///
/// let mut calls = 0;
/// let result: Result<(), String> = retry(
///     || {
///         calls += 1;
///         Err(format!("failure {}", calls))
///     },
///     4,
/// );
///
/// assert_eq!(result, Err("failure 4".to_string()));
/// ```
pub fn retry<T, E, F>(op: F, max_attempts: u32) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    Retry::new(max_attempts).call(op)
}

/// Like [`retry`], passing each failure to `handler` first.
///
/// # Panics
///
/// Panics if `max_attempts` is zero.
pub fn retry_with<T, E, F, H>(op: F, max_attempts: u32, handler: H) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    H: FailureHandler<E>,
{
    Retry::new(max_attempts).with_handler(handler).call(op)
}
