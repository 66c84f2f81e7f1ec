//! One-sided views of an [`Either`].

use crate::error::AccessError;
use crate::{Either, Maybe};

/// A view of an [`Either`] scoped to its left side.
///
/// Created by [`Either::project_left`]. Operations behave like [`Maybe`] operations
/// on the left payload; mapping produces an `Either` again.
///
/// # Example
///
/// ```rust
/// use riverbed::{Either, Maybe};
///
/// let e: Either<i32, &str> = Either::left(4);
///
/// assert!(e.project_left().is_defined());
/// assert_eq!(e.project_left().map(|x| x * 10), Either::left(40));
/// assert_eq!(e.project_left().filter(|x| *x > 5), Maybe::absent());
/// assert_eq!(e.project_right().filter(|s| s.is_empty()), Maybe::present(e));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

/// A view of an [`Either`] scoped to its right side.
///
/// Created by [`Either::project_right`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    pub(crate) fn new(either: Either<L, R>) -> Self {
        Self { either }
    }

    /// Returns `true` if the underlying value is a `Left`.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.either.is_left()
    }

    /// Borrow the left value.
    ///
    /// # Panics
    ///
    /// Panics if the underlying value is a `Right`.
    #[inline]
    pub fn get(&self) -> &L {
        match &self.either {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `LeftProjection::get()` on a `Right` value"),
        }
    }

    /// Borrow the left value, or report that there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchElement`] if the underlying value is a
    /// `Right`.
    #[inline]
    pub fn try_get(&self) -> Result<&L, AccessError> {
        match &self.either {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(AccessError::NoSuchElement {
                context: "LeftProjection::try_get",
            }),
        }
    }

    /// Return the left value or `default`.
    #[inline]
    pub fn get_or_else(self, default: L) -> L {
        self.either.fold(|l| l, |_| default)
    }

    /// Returns `true` if this is a `Left` satisfying `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        self.either.as_ref().fold(predicate, |_| false)
    }

    /// Returns `true` if this is a `Right`, or a `Left` satisfying `predicate`.
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        self.either.as_ref().fold(predicate, |_| true)
    }

    /// Run a side effect on the left value, if any.
    #[inline]
    pub fn foreach<F>(&self, f: F)
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self.either {
            f(l);
        }
    }

    /// Transform the left value; a `Right` passes through.
    #[inline]
    pub fn map<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.either.left_map(f)
    }

    /// Chain a computation on the left value; a `Right` passes through.
    #[inline]
    pub fn flat_map<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.either.or_else(f)
    }

    /// Select the underlying `Either`.
    ///
    /// On a `Left`, the predicate decides. A `Right` is not this side, so
    /// the projection has nothing to reject and it is always kept.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<Either<L, R>>
    where
        P: FnOnce(&L) -> bool,
    {
        if self.forall(predicate) {
            Maybe::Present(self.either)
        } else {
            Maybe::Absent
        }
    }

    /// The left value as a [`Maybe`].
    #[inline]
    pub fn to_maybe(self) -> Maybe<L> {
        self.either.into_left()
    }

    /// Iterate over the left value: zero or one element.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&L> {
        self.either.as_ref().into_left().into_iter()
    }

    /// Convert back to the `Either` this projection views.
    #[inline]
    pub fn either(self) -> Either<L, R> {
        self.either
    }
}

impl<L, R> RightProjection<L, R> {
    pub(crate) fn new(either: Either<L, R>) -> Self {
        Self { either }
    }

    /// Returns `true` if the underlying value is a `Right`.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.either.is_right()
    }

    /// Borrow the right value.
    ///
    /// # Panics
    ///
    /// Panics if the underlying value is a `Left`.
    #[inline]
    pub fn get(&self) -> &R {
        match &self.either {
            Either::Left(_) => panic!("called `RightProjection::get()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Borrow the right value, or report that there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchElement`] if the underlying value is a
    /// `Left`.
    #[inline]
    pub fn try_get(&self) -> Result<&R, AccessError> {
        self.either.get_right().map_err(|_| AccessError::NoSuchElement {
            context: "RightProjection::try_get",
        })
    }

    /// Return the right value or `default`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        self.either.get_or_else(default)
    }

    /// Returns `true` if this is a `Right` satisfying `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.either.exists(predicate)
    }

    /// Returns `true` if this is a `Left`, or a `Right` satisfying `predicate`.
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.either.forall(predicate)
    }

    /// Run a side effect on the right value, if any.
    #[inline]
    pub fn foreach<F>(&self, f: F)
    where
        F: FnOnce(&R),
    {
        self.either.foreach(f)
    }

    /// Transform the right value; a `Left` passes through.
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.either.map(f)
    }

    /// Chain a computation on the right value; a `Left` passes through.
    #[inline]
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.either.flat_map(f)
    }

    /// Select the underlying `Either`.
    ///
    /// On a `Right`, the predicate decides. A `Left` is always kept.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<Either<L, R>>
    where
        P: FnOnce(&R) -> bool,
    {
        if self.forall(predicate) {
            Maybe::Present(self.either)
        } else {
            Maybe::Absent
        }
    }

    /// The right value as a [`Maybe`].
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        self.either.into_right()
    }

    /// Iterate over the right value: zero or one element.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.either.iter()
    }

    /// Convert back to the `Either` this projection views.
    #[inline]
    pub fn either(self) -> Either<L, R> {
        self.either
    }
}

impl<L, R> IntoIterator for LeftProjection<L, R> {
    type Item = L;
    type IntoIter = std::option::IntoIter<L>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_maybe().into_iter()
    }
}

impl<L, R> IntoIterator for RightProjection<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_maybe().into_iter()
    }
}
