//! Testing utilities and helpers for riverbed
//!
//! This module provides ergonomic utilities for testing code that uses
//! riverbed's types: assertion macros for the sum types, a polling counter for
//! checking how often a lazy source was read, and property-based testing
//! support.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use riverbed::{assert_absent, assert_present, assert_right, Either, Maybe};
//!
//! assert_present!(Maybe::present(42));
//! assert_present!(Maybe::present(42), 42);
//! assert_absent!(Maybe::<i32>::absent());
//! assert_right!(Either::<&str, i32>::right(7), 7);
//! ```
//!
//! ## Counting Source Reads
//!
//! ```rust
//! use riverbed::sequence::memoize;
//! use riverbed::testing::CountingIter;
//!
//! let source = CountingIter::new(vec![1, 2, 3]);
//! let polls = source.polls();
//! let numbers = memoize(source);
//!
//! assert_eq!(numbers.iter().count(), 3);
//! assert_eq!(numbers.iter().count(), 3);
//! // Three elements plus the end-of-source signal.
//! assert_eq!(polls.get(), 4);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(feature = "proptest")]
use crate::{Either, Maybe};

/// Iterator adapter that counts every call to `next`, including the final
/// call that reports exhaustion.
///
/// The counter is shared: grab a [`PollCount`] with [`CountingIter::polls`]
/// before handing the iterator to the code under test.
#[derive(Debug, Clone)]
pub struct CountingIter<I> {
    inner: I,
    polls: PollCount,
}

/// Shared read-only view of a [`CountingIter`]'s counter.
#[derive(Debug, Clone, Default)]
pub struct PollCount(Arc<AtomicUsize>);

impl PollCount {
    /// Number of times the source has been polled so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<I: Iterator> CountingIter<I> {
    /// Wraps `source` with a fresh counter.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        CountingIter {
            inner: source.into_iter(),
            polls: PollCount::default(),
        }
    }

    /// Returns a handle on the poll counter.
    pub fn polls(&self) -> PollCount {
        self.polls.clone()
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.polls.0.fetch_add(1, Ordering::SeqCst);
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Assert that a `Maybe` is present, optionally with a specific value.
///
/// This macro will panic if the value is `Absent`, or if it is present with a
/// different value than the one given.
///
/// # Example
///
/// ```rust
/// use riverbed::{assert_present, Maybe};
///
/// let found = Maybe::present("river");
/// assert_present!(found);
/// assert_present!(found, "river");
/// ```
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(_) => {}
            $crate::Maybe::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
    ($maybe:expr, $expected:expr) => {
        match $maybe {
            $crate::Maybe::Present(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Maybe::Absent => {
                panic!("Expected Present({:?}), got Absent", $expected);
            }
        }
    };
}

/// Assert that a `Maybe` is absent.
///
/// # Example
///
/// ```rust
/// use riverbed::{assert_absent, Maybe};
///
/// assert_absent!(Maybe::present(3).filter(|n| *n > 5));
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Absent => {}
            $crate::Maybe::Present(value) => {
                panic!("Expected Absent, got Present: {:?}", value);
            }
        }
    };
}

/// Assert that an `Either` is a `Left`, optionally with a specific value.
///
/// # Example
///
/// ```rust
/// use riverbed::{assert_left, Either};
///
/// let parsed: Either<String, i32> = Either::left("not a number".to_string());
/// assert_left!(parsed.clone());
/// assert_left!(parsed, "not a number");
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(value) => {
                panic!("Expected Left, got Right: {:?}", value);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Left(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Either::Right(value) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, value);
            }
        }
    };
}

/// Assert that an `Either` is a `Right`, optionally with a specific value.
///
/// # Example
///
/// ```rust
/// use riverbed::{assert_right, Either};
///
/// let parsed: Either<String, i32> = Either::right(12);
/// assert_right!(parsed.clone());
/// assert_right!(parsed, 12);
/// ```
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(value) => {
                panic!("Expected Right, got Left: {:?}", value);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Right(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Either::Left(value) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<A> Arbitrary for Maybe<A>
where
    A: Arbitrary + 'static,
{
    type Parameters = A::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::weighted(0.75, any_with::<A>(args))
            .prop_map(Maybe::from)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::Left),
            any_with::<R>(r_params).prop_map(Either::Right),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Either, Maybe};

    #[test]
    fn counting_iter_counts_exhaustion() {
        let mut source = CountingIter::new(vec!['a']);
        let polls = source.polls();

        assert_eq!(source.next(), Some('a'));
        assert_eq!(source.next(), None);
        assert_eq!(polls.get(), 2);
    }

    #[test]
    fn counting_iter_clones_share_counter() {
        let source = CountingIter::new(0..3);
        let polls = source.polls();
        let copy = source.clone();

        assert_eq!(source.count(), 3);
        assert_eq!(copy.count(), 3);
        assert_eq!(polls.get(), 8);
    }

    #[test]
    fn counting_iter_forwards_size_hint() {
        let source = CountingIter::new(vec![1, 2, 3]);
        assert_eq!(source.size_hint(), (3, Some(3)));
    }

    #[test]
    fn assert_present_macro() {
        assert_present!(Maybe::present(1));
        assert_present!(Maybe::present(1), 1);
    }

    #[test]
    fn assert_absent_macro() {
        assert_absent!(Maybe::<u8>::absent());
    }

    #[test]
    fn assert_side_macros() {
        assert_left!(Either::<i32, &str>::left(5), 5);
        assert_right!(Either::<i32, &str>::right("ok"), "ok");
    }

    #[test]
    #[should_panic(expected = "Expected Present, got Absent")]
    fn assert_present_panics_on_absent() {
        assert_present!(Maybe::<i32>::absent());
    }

    #[test]
    #[should_panic(expected = "Expected Absent, got Present")]
    fn assert_absent_panics_on_present() {
        assert_absent!(Maybe::present(2));
    }

    #[test]
    #[should_panic(expected = "Expected Left, got Right")]
    fn assert_left_panics_on_right() {
        assert_left!(Either::<i32, i32>::right(1));
    }

    #[test]
    #[should_panic(expected = "Expected Right(3), got Left")]
    fn assert_right_panics_on_left() {
        assert_right!(Either::<i32, i32>::left(1), 3);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn maybe_arbitrary_generates_valid_instances(m in any::<Maybe<i32>>()) {
                match m {
                    Maybe::Present(_) => prop_assert!(m.is_present()),
                    Maybe::Absent => prop_assert!(m.is_absent()),
                }
            }

            #[test]
            fn either_arbitrary_generates_valid_instances(e in any::<Either<String, i32>>()) {
                match &e {
                    Either::Left(_) => prop_assert!(e.is_left()),
                    Either::Right(_) => prop_assert!(e.is_right()),
                }
            }
        }

        #[test]
        fn arbitrary_strategies_cover_both_variants() {
            use proptest::strategy::ValueTree;
            use proptest::test_runner::TestRunner;

            let mut runner = TestRunner::deterministic();
            let maybes: Vec<Maybe<String>> = (0..200)
                .map(|_| any::<Maybe<String>>().new_tree(&mut runner).unwrap().current())
                .collect();
            let eithers: Vec<Either<String, Vec<u8>>> = (0..200)
                .map(|_| {
                    any::<Either<String, Vec<u8>>>()
                        .new_tree(&mut runner)
                        .unwrap()
                        .current()
                })
                .collect();

            assert!(maybes.iter().any(|m| m.is_present()));
            assert!(maybes.iter().any(|m| m.is_absent()));
            assert!(eithers.iter().any(|e| e.is_left()));
            assert!(eithers.iter().any(|e| e.is_right()));
        }
    }
}
