//! Lazy k-way merge of pre-sorted sequences
//!
//! [`merge_sorted_by`] interleaves any number of sources, each already sorted
//! by the same ordering, into one sorted stream. Only one element per source
//! is held at a time. Elements that compare equal are emitted in source order,
//! so the merge is stable.
//!
//! # Examples
//!
//! ```
//! use riverbed::sequence::merge_sorted;
//!
//! let merged: Vec<i32> = merge_sorted(vec![vec![1, 3, 5], vec![2, 3, 6]]).collect();
//! assert_eq!(merged, vec![1, 2, 3, 3, 5, 6]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::Maybe;

/// Element type produced by merging `S`.
type ItemOf<S> = <<S as IntoIterator>::Item as IntoIterator>::Item;

/// One open source: its peeked head, the remainder, and its position in the
/// original list of sources.
struct Cursor<I: Iterator> {
    head: I::Item,
    rest: I,
    source: usize,
}

impl<I: Iterator> Cursor<I> {
    /// Peeks the first element of `rest`; an empty source opens nothing.
    fn open(source: usize, mut rest: I) -> Maybe<Self> {
        Maybe::from(rest.next()).map(|head| Cursor { head, rest, source })
    }
}

/// Heap key: the caller's ordering on heads, ties broken by source position.
fn precedes<I, F>(order: &mut F, a: &Cursor<I>, b: &Cursor<I>) -> bool
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    order(&a.head, &b.head).then(a.source.cmp(&b.source)) == Ordering::Less
}

/// Iterator returned by [`merge_sorted`] and [`merge_sorted_by`].
///
/// The working set is a binary min-heap of cursors, one per non-exhausted
/// source. Exhausted cursors are removed and never revisited.
pub struct MergeSorted<I: Iterator, F> {
    // Hand-rolled heap: `BinaryHeap` needs `Ord` on its elements, and the
    // ordering here is a caller-supplied `FnMut` stored beside the heap.
    heap: Vec<Cursor<I>>,
    order: F,
}

/// Merges sources that are each sorted by `order` into one sorted iterator.
///
/// Sources are expected to already be sorted by `order`; this is not checked,
/// and unsorted input yields an unspecified interleaving. Empty sources are
/// skipped, and zero sources produce an empty iterator.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::merge_sorted_by;
///
/// let desc = merge_sorted_by(vec![vec![9, 4, 1], vec![8, 4]], |a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(desc.collect::<Vec<_>>(), vec![9, 8, 4, 4, 1]);
/// ```
pub fn merge_sorted_by<S, F>(
    sources: S,
    order: F,
) -> MergeSorted<<S::Item as IntoIterator>::IntoIter, F>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    F: FnMut(&ItemOf<S>, &ItemOf<S>) -> Ordering,
{
    let mut merge = MergeSorted {
        heap: Vec::new(),
        order,
    };
    for (index, source) in sources.into_iter().enumerate() {
        if let Maybe::Present(cursor) = Cursor::open(index, source.into_iter()) {
            merge.push(cursor);
        }
    }
    merge
}

/// Merges sources that are each sorted in ascending natural order.
///
/// # Examples
///
/// ```
/// use riverbed::sequence::merge_sorted;
///
/// let merged = merge_sorted([vec!["ant", "eel"], vec![], vec!["bee", "cat"]]);
/// assert_eq!(merged.collect::<Vec<_>>(), vec!["ant", "bee", "cat", "eel"]);
/// ```
#[allow(clippy::type_complexity)]
pub fn merge_sorted<S>(
    sources: S,
) -> MergeSorted<<S::Item as IntoIterator>::IntoIter, fn(&ItemOf<S>, &ItemOf<S>) -> Ordering>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    ItemOf<S>: Ord,
{
    merge_sorted_by(sources, Ord::cmp as fn(&ItemOf<S>, &ItemOf<S>) -> Ordering)
}

impl<I, F> MergeSorted<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    /// Number of sources that still have elements to contribute.
    #[inline]
    pub fn open_sources(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, cursor: Cursor<I>) {
        self.heap.push(cursor);
        let mut pos = self.heap.len() - 1;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !precedes(&mut self.order, &self.heap[pos], &self.heap[parent]) {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && precedes(&mut self.order, &self.heap[right], &self.heap[left])
            {
                right
            } else {
                left
            };
            if !precedes(&mut self.order, &self.heap[child], &self.heap[pos]) {
                break;
            }
            self.heap.swap(pos, child);
            pos = child;
        }
    }
}

impl<I, F> Iterator for MergeSorted<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.heap.first_mut()?;
        match top.rest.next() {
            Some(head) => {
                let smallest = mem::replace(&mut top.head, head);
                self.sift_down(0);
                Some(smallest)
            }
            None => {
                let exhausted = self.heap.swap_remove(0);
                self.sift_down(0);
                Some(exhausted.head)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap.iter().fold((0, Some(0)), |(low, high), cursor| {
            let (rest_low, rest_high) = cursor.rest.size_hint();
            let low = low.saturating_add(rest_low).saturating_add(1);
            let high = match (high, rest_high) {
                (Some(high), Some(rest_high)) => {
                    high.checked_add(rest_high).and_then(|n| n.checked_add(1))
                }
                _ => None,
            };
            (low, high)
        })
    }
}

impl<I, F> FusedIterator for MergeSorted<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
}

impl<I: Iterator, F> fmt::Debug for MergeSorted<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSorted")
            .field("open_sources", &self.heap.len())
            .finish_non_exhaustive()
    }
}
