//! Error types for retry configuration.

use std::fmt;

/// Error returned when a [`Retry`](super::Retry) is configured with an
/// invalid attempt bound.
///
/// Failures of the retried operation itself are never wrapped: once every
/// attempt has failed, the caller receives the last error unchanged.
///
/// # Examples
///
/// ```rust
/// use riverbed::retry::{Retry, RetryError};
///
/// assert_eq!(Retry::try_new(0).unwrap_err(), RetryError::ZeroAttempts);
/// assert!(Retry::try_new(3).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryError {
    /// `max_attempts` was zero, so the operation could never run.
    ZeroAttempts,
}

impl fmt::Display for RetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::ZeroAttempts => write!(f, "retry requires at least one attempt"),
        }
    }
}

impl std::error::Error for RetryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_explains_the_bound() {
        assert_eq!(
            RetryError::ZeroAttempts.to_string(),
            "retry requires at least one attempt"
        );
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RetryError::ZeroAttempts);
        assert!(err.source().is_none());
    }
}
