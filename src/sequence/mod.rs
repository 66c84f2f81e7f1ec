//! Lazy sequence utilities
//!
//! Everything here speaks the standard [`Iterator`] protocol and exposes
//! [`Maybe`](crate::Maybe) where a lookup may find nothing:
//!
//! - [`memoize`]: compute each element of a one-shot source at most once and
//!   replay it on every traversal, across threads.
//! - [`merge_sorted`] / [`merge_sorted_by`]: lazy k-way merge of sources that
//!   are each already sorted.
//! - [`take`] / [`drop`]: restartable windows over re-iterable sources.
//! - [`first`] / [`find_first`]: head lookups returning `Maybe`.
//!
//! `take` and `drop` are only reachable through this module, so glob imports
//! of the crate root or prelude never shadow [`std::mem::drop`].
//!
//! # Examples
//!
//! ```
//! use riverbed::sequence::{memoize, merge_sorted, take};
//!
//! let evens = memoize((0..).step_by(2));
//! let odds = memoize((1..).step_by(2));
//!
//! let merged: Vec<u32> = merge_sorted([take(3, &evens), take(3, &odds)])
//!     .copied()
//!     .collect();
//! assert_eq!(merged, vec![0, 1, 2, 3, 4, 5]);
//! ```

mod memoize;
mod merge;
mod window;

pub use memoize::{memoize, Cursor, Iter, Memoized};
pub use merge::{merge_sorted, merge_sorted_by, MergeSorted};
pub use window::{drop, find_first, first, take, Window};
