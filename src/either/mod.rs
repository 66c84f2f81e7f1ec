//! A right-biased sum type holding exactly one of two values.
//!
//! # Either vs Result
//!
//! `Either<L, R>` carries no success/failure meaning of its own. Use it when
//! both sides are legitimate outcomes (cached vs fresh data, parsed vs raw
//! input). Use `Result` when one side is an error you want to propagate with
//! `?`. The two convert losslessly via [`Either::into_result`] and
//! [`Either::from_result`].
//!
//! # Right-Biased Convention
//!
//! Single-argument combinators (`map`, `flat_map`, `exists`, `forall`,
//! `foreach`, `filter`, `get_or_else`) act on `Right` and pass `Left` through
//! untouched. The mirror operations are spelled out explicitly: [`Either::left_map`],
//! [`Either::or_else`], and the [`Either::project_left`] projection.
//!
//! # Projections
//!
//! [`Either::project_left`] and [`Either::project_right`] return a view scoped to one side
//! that speaks the [`Maybe`] vocabulary (`map`, `filter`, `exists`, `forall`,
//! `foreach`, `get`). Mapping through a projection yields an `Either` again,
//! with only the projected side transformed.
//!
//! # Examples
//!
//! ```rust
//! use riverbed::Either;
//!
//! fn lookup(from_cache: bool) -> Either<String, i32> {
//!     if from_cache {
//!         Either::left("cached".to_string())
//!     } else {
//!         Either::right(42)
//!     }
//! }
//!
//! let description = lookup(true).fold(
//!     |cached| format!("From cache: {}", cached),
//!     |fresh| format!("Fresh value: {}", fresh),
//! );
//! assert_eq!(description, "From cache: cached");
//! assert_eq!(lookup(false).map(|n| n + 1), Either::right(43));
//! ```

mod projection;

pub use projection::{LeftProjection, RightProjection};

use std::fmt;

use crate::error::AccessError;
use crate::Maybe;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Equality, ordering and hashing are structural: the variant tag first, then
/// the payload.
///
/// # Example
///
/// ```rust
/// use riverbed::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// match left {
///     Either::Left(n) => assert_eq!(n, 42),
///     Either::Right(_) => unreachable!(),
/// }
///
/// let result = right.fold(|n| format!("number: {}", n), |s| format!("string: {}", s));
/// assert_eq!(result, "string: hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns `true` if this is a `Right` whose value satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let r: Either<&str, i32> = Either::right(12);
    /// let l: Either<&str, i32> = Either::left("heyaa!");
    ///
    /// assert!(r.exists(|x| *x == 12));
    /// assert!(!r.exists(|x| *x == 11));
    /// assert!(!l.exists(|x| *x == 12));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.as_ref().fold(|_| false, predicate)
    }

    /// Returns `true` if this is a `Left`, or a `Right` whose value satisfies
    /// `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let r: Either<&str, i32> = Either::right(12);
    /// let l: Either<&str, i32> = Either::left("heyaa!");
    ///
    /// assert!(r.forall(|x| *x == 12));
    /// assert!(!r.forall(|x| *x == 11));
    /// assert!(l.forall(|x| *x == 12));
    /// ```
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.as_ref().fold(|_| true, predicate)
    }

    // ========== Projections ==========

    /// A view of this value scoped to the left side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(3);
    /// assert_eq!(e.project_left().map(|x| x * 2), Either::left(6));
    /// assert!(e.project_right().to_maybe().is_absent());
    /// ```
    #[inline]
    pub fn project_left(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// A view of this value scoped to the right side.
    #[inline]
    pub fn project_right(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::{Either, Maybe};
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.into_left(), Maybe::present(42));
    /// assert_eq!(right.into_left(), Maybe::absent());
    /// ```
    #[inline]
    pub fn into_left(self) -> Maybe<L> {
        self.fold(Maybe::Present, |_| Maybe::Absent)
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Maybe<R> {
        self.fold(|_| Maybe::Absent, Maybe::Present)
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let mut e: Either<i32, String> = Either::left(42);
    /// if let Either::Left(l) = e.as_mut() {
    ///     *l = 100;
    /// }
    /// assert_eq!(e, Either::left(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Borrow the left value, or report that this is a `Right`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchElement`] on a `Right`.
    #[inline]
    pub fn get_left(&self) -> Result<&L, AccessError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(AccessError::NoSuchElement {
                context: "Either::get_left",
            }),
        }
    }

    /// Borrow the right value, or report that this is a `Left`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchElement`] on a `Left`.
    #[inline]
    pub fn get_right(&self) -> Result<&R, AccessError> {
        match self {
            Either::Left(_) => Err(AccessError::NoSuchElement {
                context: "Either::get_right",
            }),
            Either::Right(r) => Ok(r),
        }
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Return the right value or a default (right-biased `get_or_else`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let r: Either<&str, i32> = Either::right(12);
    /// let l: Either<&str, i32> = Either::left("heyaa!");
    ///
    /// assert_eq!(r.get_or_else(1), 12);
    /// assert_eq!(l.get_or_else(1), 1);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        self.fold(|_| default, |r| r)
    }

    /// Return the right value or compute one. `f` only runs on `Left`.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.fold(|_| f(), |r| r)
    }

    /// Return the right value or compute it from the left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.right_or_else(|n| n.to_string()), "42");
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, |r| r)
    }

    /// Return the left value or compute it from the right.
    #[inline]
    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.fold(|l| l, f)
    }

    // ========== Transformations ==========

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("foo");
    /// let right: Either<&str, i32> = Either::right(3);
    ///
    /// assert_eq!(left.map(|x| x + 1), Either::left("foo"));
    /// assert_eq!(right.map(|x| x + 1), Either::right(4));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.fold(Either::Left, |r| Either::Right(f(r)))
    }

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(3);
    /// let right: Either<i32, &str> = Either::right("foo");
    ///
    /// assert_eq!(left.left_map(|x| x + 1), Either::left(4));
    /// assert_eq!(right.left_map(|x| x + 1), Either::right("foo"));
    /// ```
    #[inline]
    pub fn left_map<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.fold(|l| Either::Left(f(l)), Either::Right)
    }

    /// Alias for [`Either::left_map`].
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.left_map(f)
    }

    /// Alias for [`Either::map`].
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.map(f)
    }

    /// Transform both variants.
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        self.fold(|l| Either::Left(f(l)), |r| Either::Right(g(r)))
    }

    /// Swap Left and Right. Applying it twice gives back the original value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.swap(), Either::right(42));
    /// assert_eq!(left.swap().swap(), left);
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }

    /// Keep this value if it is a `Right` satisfying `predicate`.
    ///
    /// A `Left` is never selected by the right-biased filter and yields
    /// `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::{Either, Maybe};
    ///
    /// let r: Either<&str, i32> = Either::right(12);
    /// let l: Either<&str, i32> = Either::left("heyaa!");
    ///
    /// assert_eq!(r.filter(|x| *x == 12), Maybe::present(r));
    /// assert_eq!(r.filter(|x| *x == 11), Maybe::absent());
    /// assert_eq!(l.filter(|x| *x == 12), Maybe::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<Self>
    where
        P: FnOnce(&R) -> bool,
    {
        if self.exists(predicate) {
            Maybe::Present(self)
        } else {
            Maybe::Absent
        }
    }

    /// Run a side effect on the right value, if any.
    #[inline]
    pub fn foreach<F>(&self, f: F)
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = self {
            f(r);
        }
    }

    // ========== Side-Specific Mutators ==========

    /// Apply `f` to the left value and return its result directly.
    ///
    /// Unlike [`Either::left_map`], this refuses to run on the other side
    /// instead of passing it through.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnsupportedOperation`] on a `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let e: Either<bool, i32> = Either::right(1);
    /// assert_eq!(e.try_map_right(|n| n.to_string()), Ok("1".to_string()));
    /// assert!(e.try_map_left(|b| b.to_string()).unwrap_err().is_unsupported());
    /// ```
    #[inline]
    pub fn try_map_left<T, F>(self, f: F) -> Result<T, AccessError>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Ok(f(l)),
            Either::Right(_) => Err(AccessError::UnsupportedOperation {
                operation: "Either::try_map_left",
            }),
        }
    }

    /// Apply `f` to the right value and return its result directly.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnsupportedOperation`] on a `Left`.
    #[inline]
    pub fn try_map_right<T, F>(self, f: F) -> Result<T, AccessError>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(_) => Err(AccessError::UnsupportedOperation {
                operation: "Either::try_map_right",
            }),
            Either::Right(r) => Ok(f(r)),
        }
    }

    // ========== Folding ==========

    /// Fold both variants into a single value.
    ///
    /// Every other combinator on `Either` is expressed through this
    /// eliminator.
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    // ========== Monadic Operations (Right-Biased) ==========

    /// Chain a computation on the right value (right-biased flatMap).
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Either;
    ///
    /// let reverse = |s: &str| Either::<i32, String>::right(s.chars().rev().collect());
    ///
    /// assert_eq!(Either::<i32, &str>::right("!foo").flat_map(reverse), Either::right("oof!".to_string()));
    /// assert_eq!(Either::<i32, &str>::left(5).flat_map(reverse), Either::left(5));
    /// ```
    #[inline]
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.fold(Either::Left, f)
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.flat_map(f)
    }

    /// Chain a computation on the left value.
    #[inline]
    pub fn or_else<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.fold(f, Either::Right)
    }

    // ========== Conversions ==========

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    // ========== Iterator Support ==========

    /// Returns an iterator over the right value, if present.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.as_ref().into_right().into_iter()
    }
}

// Flatten for nested Either
impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> Default for Either<L, R>
where
    R: Default,
{
    /// Returns `Either::Right(R::default())`.
    fn default() -> Self {
        Either::Right(R::default())
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Either.Left({})", l),
            Either::Right(r) => write!(f, "Either.Right({})", r),
        }
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ========== Collection Utilities ==========

/// Partition an iterator of Either into two vectors.
///
/// # Example
///
/// ```rust
/// use riverbed::either::{partition, Either};
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
///     Either::right("b"),
/// ];
///
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

/// Extract all Left values from an iterator, in order.
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(|e| e.into_left().into_option())
}

/// Extract all Right values from an iterator, in order.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(|e| e.into_right().into_option())
}
