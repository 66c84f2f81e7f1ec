//! Bounded windows over restartable sequences
//!
//! A [`Window`] describes "skip some elements, then yield at most some
//! number" over a source that can be iterated more than once. Any
//! `Clone + IntoIterator` source qualifies: a borrowed slice or `Vec`, a
//! range, a [`Memoized`](super::Memoized). The window is a value, not an
//! iterator: every traversal restarts from the beginning of the source.
//!
//! # Examples
//!
//! ```
//! use riverbed::sequence::{drop, take};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let middle = drop(1, take(4, &numbers));
//! assert_eq!(middle.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//! // Traversing again starts over.
//! assert_eq!(middle.iter().count(), 3);
//! ```

use std::iter::{Skip, Take};

use crate::Maybe;

/// A restartable `skip`/`limit` view over a source.
///
/// Created by [`take`] and [`drop`]. Windows compose: taking from a window
/// narrows its limit, dropping from a window extends its skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window<S> {
    skip: usize,
    limit: usize,
    source: S,
}

/// Yields at most the first `n` elements of `source`.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::take;
///
/// let letters = ['a', 'b', 'c'];
/// assert_eq!(take(2, &letters).iter().collect::<String>(), "ab");
/// assert_eq!(take(10, &letters).iter().count(), 3);
/// assert_eq!(take(0, &letters).iter().next(), None);
/// ```
#[inline]
pub fn take<S>(n: usize, source: S) -> Window<S> {
    Window {
        skip: 0,
        limit: n,
        source,
    }
}

/// Yields every element of `source` after the first `n`.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::drop;
///
/// let letters = ['a', 'b', 'c'];
/// assert_eq!(drop(1, &letters).iter().collect::<String>(), "bc");
/// assert_eq!(drop(5, &letters).iter().next(), None);
/// ```
#[inline]
pub fn drop<S>(n: usize, source: S) -> Window<S> {
    Window {
        skip: n,
        limit: usize::MAX,
        source,
    }
}

impl<S> Window<S> {
    /// Number of leading elements skipped on every traversal.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skip
    }

    /// Upper bound on the number of elements a traversal yields.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Narrows the window to at most `n` elements.
    #[inline]
    pub fn take(self, n: usize) -> Self {
        Window {
            limit: self.limit.min(n),
            ..self
        }
    }

    /// Skips `n` more elements at the front of the window.
    #[inline]
    pub fn drop(self, n: usize) -> Self {
        Window {
            skip: self.skip.saturating_add(n),
            limit: self.limit.saturating_sub(n),
            source: self.source,
        }
    }

    /// Returns the underlying source.
    #[inline]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Starts a new traversal of the window from a fresh copy of the source.
    #[inline]
    pub fn iter(&self) -> Take<Skip<S::IntoIter>>
    where
        S: Clone + IntoIterator,
    {
        self.source.clone().into_iter().skip(self.skip).take(self.limit)
    }
}

impl<S> IntoIterator for &Window<S>
where
    S: Clone + IntoIterator,
{
    type Item = S::Item;
    type IntoIter = Take<Skip<S::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: IntoIterator> IntoIterator for Window<S> {
    type Item = S::Item;
    type IntoIter = Take<Skip<S::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().skip(self.skip).take(self.limit)
    }
}

/// Returns the first element of `source`, or `Absent` if it is empty.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::first;
/// use riverbed::Maybe;
///
/// assert_eq!(first(vec![3, 4]), Maybe::Present(3));
/// assert_eq!(first(Vec::<i32>::new()), Maybe::Absent);
/// ```
#[inline]
pub fn first<S: IntoIterator>(source: S) -> Maybe<S::Item> {
    Maybe::from(source.into_iter().next())
}

/// Returns the first element of `source` satisfying `predicate`, or `Absent`.
///
/// Stops pulling from the source as soon as a match is found.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::find_first;
/// use riverbed::Maybe;
///
/// let words = ["pine", "oak", "elm"];
/// assert_eq!(find_first(words, |w| w.len() == 3), Maybe::Present("oak"));
/// assert_eq!(find_first(words, |w| w.is_empty()), Maybe::Absent);
/// ```
pub fn find_first<S, P>(source: S, mut predicate: P) -> Maybe<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Maybe::from(source.into_iter().find(|item| predicate(item)))
}
