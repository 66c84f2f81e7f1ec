//! # Riverbed
//!
//! Small, dependable building blocks for functional-style Rust:
//!
//! - [`Maybe`]: a value or its absence, with the full combinator vocabulary
//!   (`map`, `flat_map`, `filter`, `fold`, `get_or_else`, ...).
//! - [`Either`]: a right-biased disjoint union with left and right
//!   projections.
//! - [`sequence`]: lazy sequence utilities. [`memoize`] replays a one-shot
//!   iterator any number of times while reading each element once, even
//!   across threads; [`merge_sorted`] merges pre-sorted sources lazily;
//!   windows and `first`/`find_first` cover the rest.
//! - [`retry`](mod@retry): bounded retry of fallible operations with pluggable
//!   failure handlers.
//!
//! ## Quick Example
//!
//! ```rust
//! use riverbed::prelude::*;
//!
//! // Optional values without null
//! let port = Maybe::from("8080".parse::<u16>().ok()).get_or_else(80);
//! assert_eq!(port, 8080);
//!
//! // Two legitimate outcomes
//! let source: Either<&str, u32> = Either::right(7);
//! assert_eq!(source.map(|n| n * 6).get_or_else(0), 42);
//!
//! // A lazily computed, replayable sequence
//! let squares = memoize((1..=4).map(|n| n * n));
//! assert_eq!(squares.get(3), Maybe::Present(&16));
//! assert_eq!(squares.iter().sum::<i32>(), 30);
//!
//! // Merge already sorted streams
//! let merged: Vec<_> = merge_sorted(vec![vec![1, 4], vec![2, 3]]).collect();
//! assert_eq!(merged, vec![1, 2, 3, 4]);
//!
//! // Retry a flaky step up to three times
//! let mut tries = 0;
//! let answer = retry(|| { tries += 1; if tries < 2 { Err("busy") } else { Ok(tries) } }, 3);
//! assert_eq!(answer, Ok(2));
//! ```
//!
//! ## Features
//!
//! - `tracing`: retry and memoization emit `tracing` events, and
//!   `retry::Logging` becomes available.
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Either`.
//! - `proptest`: `Arbitrary` implementations in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod maybe;
pub mod retry;
pub mod sequence;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use either::{Either, LeftProjection, RightProjection};
pub use error::AccessError;
pub use maybe::Maybe;
pub use retry::{retry, retry_with, FailureHandler, Retry, RetryError};
pub use sequence::{find_first, first, memoize, merge_sorted, merge_sorted_by, Memoized};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::AccessError;
    pub use crate::maybe::Maybe;
    pub use crate::retry::{retry, retry_with, FailureHandler, Retry};
    pub use crate::sequence::{memoize, merge_sorted, merge_sorted_by, Memoized};
}
