//! Bounded retry for fallible operations.
//!
//! This module runs an operation that returns `Result` until it succeeds or
//! a fixed number of attempts has been spent:
//!
//! - **Bounded**: `max_attempts` is always at least 1; zero is rejected at
//!   construction.
//! - **Observable**: every failed attempt, including the last one, is handed
//!   to a [`FailureHandler`] in order.
//! - **Transparent**: the last error is returned exactly as the operation
//!   produced it.
//!
//! # Quick Start
//!
//! ```rust
//! use riverbed::retry::{retry_with, Retry};
//!
//! let mut attempts = 0;
//! let mut seen = Vec::new();
//!
//! let result = retry_with(
//!     || {
//!         attempts += 1;
//!         if attempts < 3 { Err(attempts) } else { Ok("connected") }
//!     },
//!     4,
//!     |e: &i32| seen.push(*e),
//! );
//!
//! assert_eq!(result, Ok("connected"));
//! assert_eq!(seen, vec![1, 2]);
//!
//! // Reusable policy with a one-argument operation.
//! let mut policy = Retry::new(2);
//! assert_eq!(policy.apply(21, |n| Ok::<_, ()>(n * 2)), Ok(42));
//! ```
//!
//! # Handlers
//!
//! - [`Ignore`]: the default, does nothing.
//! - Any `FnMut(&E)` closure.
//! - [`Chain`]: two handlers in sequence, via [`chain`] or
//!   [`FailureHandler::then`].
//! - `Logging` (feature `tracing`): one `tracing` warning per failure.
//!
//! # Logging
//!
//! With the `tracing` feature enabled, [`Retry::call`] emits a `debug` event
//! for every failed attempt and a `warn` event when the bound is exhausted.

mod error;
mod handler;
mod policy;

pub use error::RetryError;
#[cfg(feature = "tracing")]
pub use handler::Logging;
pub use handler::{chain, ignore, Chain, FailureHandler, Ignore};
pub use policy::{retry, retry_with, Retry};

#[cfg(test)]
mod tests;
