//! Memoized replay of a one-shot iterator
//!
//! [`memoize`] wraps a source iterator so that every element is pulled from
//! the source at most once, no matter how many times (or from how many
//! threads) the result is traversed. Elements are computed lazily on first
//! demand and then replayed from an immutable linked chain.
//!
//! # Examples
//!
//! ```
//! use riverbed::sequence::memoize;
//!
//! let words = memoize("alpha beta gamma".split(' '));
//!
//! let first: Vec<&str> = words.iter().copied().collect();
//! let second: Vec<&str> = words.iter().copied().collect();
//!
//! assert_eq!(first, vec!["alpha", "beta", "gamma"]);
//! assert_eq!(first, second);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::Maybe;

type Source<I> = Arc<Mutex<Option<I>>>;

// ========== Chain ==========

/// A compute-once cell for one position of the chain.
///
/// The first call to [`Thunk::force`] pulls one element from the shared
/// source; concurrent callers block on the same `OnceLock` and observe the
/// one result. If the source panics, the position stays unevaluated and every
/// later attempt to force it panics as well, like a poisoned `LazyLock`.
struct Thunk<I: Iterator> {
    slot: OnceLock<Arc<Node<I>>>,
    source: Source<I>,
}

enum Node<I: Iterator> {
    End,
    Computed { value: I::Item, next: Thunk<I> },
}

impl<I: Iterator> Thunk<I> {
    fn new(source: Source<I>) -> Self {
        Thunk {
            slot: OnceLock::new(),
            source,
        }
    }

    fn force(&self) -> &Arc<Node<I>> {
        self.slot.get_or_init(|| {
            let mut source = match self.source.lock() {
                Ok(source) => source,
                Err(_) => panic!("memoized source panicked while producing an element"),
            };
            match source.as_mut().and_then(Iterator::next) {
                Some(value) => Arc::new(Node::Computed {
                    value,
                    next: Thunk::new(Arc::clone(&self.source)),
                }),
                None => {
                    // Release the source so it is never polled again.
                    *source = None;
                    #[cfg(feature = "tracing")]
                    tracing::trace!("memoized source exhausted");
                    Arc::new(Node::End)
                }
            }
        })
    }
}

impl<I: Iterator> Drop for Thunk<I> {
    // Unlink the chain one node at a time so that dropping a long chain does
    // not recurse once per element.
    fn drop(&mut self) {
        let mut link = self.slot.take();
        while let Some(node) = link {
            link = match Arc::try_unwrap(node) {
                Ok(Node::Computed { mut next, .. }) => next.slot.take(),
                _ => None,
            };
        }
    }
}

// ========== Memoized ==========

/// A lazily evaluated, replayable view of a source iterator.
///
/// Created by [`memoize`]. Cloning is cheap and shares the already computed
/// elements, so a clone never causes the source to be read twice.
///
/// `Memoized` is `Send + Sync` whenever the source is `Send` and its items
/// are `Send + Sync`, which makes it safe to traverse from several threads at
/// once.
pub struct Memoized<I: Iterator> {
    head: Arc<Thunk<I>>,
}

/// Wraps `source` so its elements are computed at most once and can be
/// traversed any number of times.
///
/// Creating the wrapper does not touch the source; the first element is only
/// pulled when a traversal asks for it.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::memoize;
/// use std::cell::Cell;
///
/// let polls = Cell::new(0);
/// let squares = memoize((1..=3).map(|n| {
///     polls.set(polls.get() + 1);
///     n * n
/// }));
/// assert_eq!(polls.get(), 0);
///
/// assert_eq!(squares.iter().sum::<i32>(), 14);
/// assert_eq!(squares.iter().sum::<i32>(), 14);
/// assert_eq!(polls.get(), 3);
/// ```
pub fn memoize<S>(source: S) -> Memoized<S::IntoIter>
where
    S: IntoIterator,
{
    Memoized {
        head: Arc::new(Thunk::new(Arc::new(Mutex::new(Some(source.into_iter()))))),
    }
}

impl<I: Iterator> Memoized<I> {
    /// Returns a borrowing iterator over the elements.
    ///
    /// Already computed elements are replayed without locking; elements past
    /// the computed prefix are pulled from the source one at a time, exactly
    /// when the iterator reaches them.
    #[inline]
    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            thunk: Some(&self.head),
        }
    }

    /// Returns an owning iterator that yields clones of the elements.
    ///
    /// The cursor keeps the chain alive on its own, so it may outlive this
    /// `Memoized`.
    ///
    /// # Examples
    ///
    /// ```
    /// use riverbed::sequence::memoize;
    ///
    /// let numbers = memoize(vec![1, 2, 3]);
    /// let cursor = numbers.cursor();
    /// drop(numbers);
    ///
    /// assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor<I> {
        Cursor {
            pending: Pending::Head(Arc::clone(&self.head)),
        }
    }

    /// Returns the first element, or `Absent` for an empty source.
    ///
    /// # Examples
    ///
    /// ```
    /// use riverbed::sequence::memoize;
    /// use riverbed::Maybe;
    ///
    /// assert_eq!(memoize(vec!['a', 'b']).head(), Maybe::Present(&'a'));
    /// assert_eq!(memoize(Vec::<char>::new()).head(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn head(&self) -> Maybe<&I::Item> {
        Maybe::from(self.iter().next())
    }

    /// Returns the element at `index`, computing the prefix up to it if
    /// needed, or `Absent` if the source ends first.
    ///
    /// # Examples
    ///
    /// ```
    /// use riverbed::sequence::memoize;
    /// use riverbed::Maybe;
    ///
    /// let letters = memoize("xyz".chars());
    /// assert_eq!(letters.get(2), Maybe::Present(&'z'));
    /// assert_eq!(letters.get(3), Maybe::Absent);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Maybe<&I::Item> {
        Maybe::from(self.iter().nth(index))
    }

    /// Number of elements computed so far. Never touches the source.
    pub fn evaluated(&self) -> usize {
        let mut count = 0;
        let mut thunk = &*self.head;
        while let Some(node) = thunk.slot.get() {
            match &**node {
                Node::Computed { next, .. } => {
                    count += 1;
                    thunk = next;
                }
                Node::End => break,
            }
        }
        count
    }

    /// Returns `true` once the source has reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.head
            .source
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl<I: Iterator> Clone for Memoized<I> {
    #[inline]
    fn clone(&self) -> Self {
        Memoized {
            head: Arc::clone(&self.head),
        }
    }
}

impl<I: Iterator> fmt::Debug for Memoized<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("evaluated", &self.evaluated())
            .finish_non_exhaustive()
    }
}

impl<'a, I: Iterator> IntoIterator for &'a Memoized<I> {
    type Item = &'a I::Item;
    type IntoIter = Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I> IntoIterator for Memoized<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    type IntoIter = Cursor<I>;

    fn into_iter(self) -> Self::IntoIter {
        Cursor {
            pending: Pending::Head(self.head),
        }
    }
}

// ========== Traversals ==========

/// Borrowing iterator over a [`Memoized`] sequence.
///
/// Created by [`Memoized::iter`]. Never reads ahead of the element it is
/// about to return.
pub struct Iter<'a, I: Iterator> {
    thunk: Option<&'a Thunk<I>>,
}

impl<'a, I: Iterator> Iterator for Iter<'a, I> {
    type Item = &'a I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let thunk = self.thunk?;
        match &**thunk.force() {
            Node::Computed { value, next } => {
                self.thunk = Some(next);
                Some(value)
            }
            Node::End => {
                self.thunk = None;
                None
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Iter<'_, I> {}

impl<I: Iterator> Clone for Iter<'_, I> {
    fn clone(&self) -> Self {
        Iter { thunk: self.thunk }
    }
}

impl<I: Iterator> fmt::Debug for Iter<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("finished", &self.thunk.is_none())
            .finish()
    }
}

enum Pending<I: Iterator> {
    Head(Arc<Thunk<I>>),
    After(Arc<Node<I>>),
}

/// Owning iterator over a [`Memoized`] sequence, yielding cloned elements.
///
/// Created by [`Memoized::cursor`] or by `Memoized::into_iter`.
pub struct Cursor<I: Iterator> {
    pending: Pending<I>,
}

impl<I> Iterator for Cursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = {
            let thunk = match &self.pending {
                Pending::Head(thunk) => &**thunk,
                Pending::After(node) => match &**node {
                    Node::Computed { next, .. } => next,
                    Node::End => return None,
                },
            };
            Arc::clone(thunk.force())
        };
        let value = match &*node {
            Node::Computed { value, .. } => Some(value.clone()),
            Node::End => None,
        };
        self.pending = Pending::After(node);
        value
    }
}

impl<I> FusedIterator for Cursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Clone for Cursor<I> {
    fn clone(&self) -> Self {
        let pending = match &self.pending {
            Pending::Head(thunk) => Pending::Head(Arc::clone(thunk)),
            Pending::After(node) => Pending::After(Arc::clone(node)),
        };
        Cursor { pending }
    }
}

impl<I: Iterator> fmt::Debug for Cursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let started = matches!(self.pending, Pending::After(_));
        f.debug_struct("Cursor").field("started", &started).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingIter;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    #[test]
    fn memoize_does_not_touch_the_source() {
        let source = CountingIter::new(vec![1, 2, 3]);
        let polls = source.polls();
        let memoized = memoize(source);

        assert_eq!(polls.get(), 0);
        assert_eq!(memoized.evaluated(), 0);
        assert!(!memoized.is_exhausted());
    }

    #[test]
    fn replays_the_same_elements() {
        let memoized = memoize(vec!["a", "b", "c"]);

        let first: Vec<_> = memoized.iter().collect();
        let second: Vec<_> = memoized.iter().collect();

        assert_eq!(first, vec![&"a", &"b", &"c"]);
        assert_eq!(first, second);
    }

    #[test]
    fn full_traversals_poll_len_plus_one_times() {
        let source = CountingIter::new(0..5);
        let polls = source.polls();
        let memoized = memoize(source);

        for _ in 0..3 {
            assert_eq!(memoized.iter().count(), 5);
        }

        assert_eq!(polls.get(), 6);
        assert!(memoized.is_exhausted());
    }

    #[test]
    fn partial_traversal_reads_only_the_prefix() {
        let source = CountingIter::new(0..100);
        let polls = source.polls();
        let memoized = memoize(source);

        let prefix: Vec<_> = memoized.iter().take(3).copied().collect();

        assert_eq!(prefix, vec![0, 1, 2]);
        assert_eq!(polls.get(), 3);
        assert_eq!(memoized.evaluated(), 3);
    }

    #[test]
    fn head_and_get() {
        let source = CountingIter::new(vec![10, 20, 30]);
        let polls = source.polls();
        let memoized = memoize(source);

        assert_eq!(memoized.head(), Maybe::Present(&10));
        assert_eq!(polls.get(), 1);
        assert_eq!(memoized.get(1), Maybe::Present(&20));
        assert_eq!(polls.get(), 2);
        assert_eq!(memoized.get(5), Maybe::Absent);
        assert_eq!(polls.get(), 4);
    }

    #[test]
    fn empty_source() {
        let memoized = memoize(Vec::<i32>::new());

        assert_eq!(memoized.head(), Maybe::Absent);
        assert_eq!(memoized.iter().next(), None);
        assert!(memoized.is_exhausted());
    }

    #[test]
    fn clones_share_computed_elements() {
        let source = CountingIter::new(vec![1, 2, 3]);
        let polls = source.polls();
        let memoized = memoize(source);
        let clone = memoized.clone();

        assert_eq!(memoized.iter().count(), 3);
        assert_eq!(clone.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(polls.get(), 4);
    }

    #[test]
    fn cursor_outlives_memoized() {
        let memoized = memoize(vec![String::from("x"), String::from("y")]);
        let cursor = memoized.clone().into_iter();
        drop(memoized);

        assert_eq!(cursor.collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn cursor_and_iter_interleave() {
        let source = CountingIter::new(1..=4);
        let polls = source.polls();
        let memoized = memoize(source);

        let mut cursor = memoized.cursor();
        let mut iter = memoized.iter();

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.by_ref().count(), 2);
        assert_eq!(iter.count(), 2);
        assert_eq!(cursor.next(), None);
        assert_eq!(polls.get(), 5);
    }

    #[test]
    fn iterators_are_fused() {
        let memoized = memoize(vec![1]);
        let mut iter = memoized.iter();
        let mut cursor = memoized.cursor();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn concurrent_traversals_read_each_element_once() {
        let source = CountingIter::new(0..1_000);
        let polls = source.polls();
        let memoized = memoize(source);

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let sum: u64 = memoized.iter().map(|&n| n as u64).sum();
                    assert_eq!(sum, 499_500);
                });
            }
        });

        assert_eq!(polls.get(), 1_001);
    }

    #[test]
    fn long_chain_drops_without_overflow() {
        let memoized = memoize(0..500_000u32);
        assert_eq!(memoized.iter().count(), 500_000);
        drop(memoized);
    }

    #[test]
    fn source_panic_poisons_the_remaining_sequence() {
        let mut calls = 0;
        let source = CountingIter::new(std::iter::from_fn(move || {
            calls += 1;
            match calls {
                1 => Some(calls),
                2 => panic!("flaky source"),
                _ => Some(calls),
            }
        }));
        let polls = source.polls();
        let memoized = memoize(source);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| memoized.iter().count()));
        assert!(outcome.is_err());
        assert_eq!(polls.get(), 2);

        // The computed prefix still replays without touching the source.
        assert_eq!(memoized.head(), Maybe::Present(&1));
        assert_eq!(memoized.evaluated(), 1);

        let again = panic::catch_unwind(AssertUnwindSafe(|| memoized.get(1).copied()));
        assert!(again.is_err());
        assert_eq!(polls.get(), 2);
    }

    #[test]
    #[should_panic(expected = "memoized source panicked")]
    fn head_after_source_panic_panics() {
        let memoized = memoize(std::iter::from_fn(|| -> Option<u8> { panic!("flaky source") }));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| memoized.head().copied()));
        assert!(outcome.is_err());

        let _ = memoized.head();
    }

    #[test]
    fn debug_reports_progress() {
        let memoized = memoize(vec![1, 2, 3]);
        let _ = memoized.get(1);

        let debug = format!("{:?}", memoized);
        assert!(debug.contains("evaluated: 2"));
    }

    #[test]
    fn memoized_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Memoized<std::vec::IntoIter<String>>>();
        assert_send_sync::<Cursor<std::vec::IntoIter<String>>>();
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn replay_matches_source(values in prop::collection::vec(any::<i32>(), 0..64)) {
                let memoized = memoize(values.clone());

                prop_assert_eq!(memoized.iter().copied().collect::<Vec<_>>(), values.clone());
                prop_assert_eq!(memoized.cursor().collect::<Vec<_>>(), values);
            }

            #[test]
            fn get_agrees_with_index(values in prop::collection::vec(any::<u8>(), 0..32), index in 0usize..40) {
                let memoized = memoize(values.clone());
                prop_assert_eq!(memoized.get(index), Maybe::from(values.get(index)));
            }
        }
    }
}
