//! An optional container: a value that is either present or absent.
//!
//! # Maybe vs Option
//!
//! `Maybe<A>` is isomorphic to `Option<A>` and converts to and from it freely.
//! It exists to carry the full combinator vocabulary this crate is built on
//! (`fold`, `exists`, `forall`, `get_or_throw`, `to_left`, `to_right`, ...)
//! with the same names the `Either` projections use, so code can move between
//! the two containers without renaming.
//!
//! # Absence sentinels
//!
//! Rust values cannot be null, so [`Maybe::present`] never fails. When a
//! payload type has an in-band "no value" representation (an empty string, a
//! `-1` index, ...) the caller names it with a predicate:
//!
//! - [`Maybe::try_present`] rejects the sentinel with
//!   [`AccessError::AbsentValue`]; it never silently turns it into `Absent`.
//! - [`Maybe::option`] is the convenience factory that maps the sentinel to
//!   `Absent`.
//!
//! # Examples
//!
//! ```rust
//! use riverbed::Maybe;
//!
//! let port: Maybe<u16> = Maybe::present(8080);
//! let label = port
//!     .filter(|p| *p >= 1024)
//!     .map(|p| format!("unprivileged port {}", p))
//!     .get_or_else("privileged".to_string());
//! assert_eq!(label, "unprivileged port 8080");
//! ```

use std::fmt;

use crate::error::AccessError;
use crate::Either;

/// A value that is either `Present(A)` or `Absent`.
///
/// `Maybe` is immutable: every combinator consumes `self` and returns a new
/// container, so it is safe to share across threads whenever `A` is.
///
/// # Example
///
/// ```rust
/// use riverbed::Maybe;
///
/// let present = Maybe::present(21);
/// let absent: Maybe<i32> = Maybe::absent();
///
/// assert_eq!(present.map(|x| x * 2), Maybe::present(42));
/// assert_eq!(absent.map(|x| x * 2), Maybe::absent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<A> {
    /// No value.
    Absent,
    /// A value.
    Present(A),
}

impl<A> Maybe<A> {
    // ========== Constructors ==========

    /// Wrap a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert!(Maybe::present("hello").is_present());
    /// ```
    #[inline]
    pub fn present(value: A) -> Self {
        Maybe::Present(value)
    }

    /// The empty container.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert!(Maybe::<i32>::absent().is_absent());
    /// ```
    #[inline]
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Wrap a value, failing if `is_absent` classifies it as "no value".
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AbsentValue`] when `is_absent(&value)` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::{AccessError, Maybe};
    ///
    /// let no_name = |s: &&str| s.is_empty();
    ///
    /// assert_eq!(Maybe::try_present("ada", no_name), Ok(Maybe::present("ada")));
    /// assert_eq!(Maybe::try_present("", no_name), Err(AccessError::AbsentValue));
    /// ```
    pub fn try_present<P>(value: A, is_absent: P) -> Result<Self, AccessError>
    where
        P: FnOnce(&A) -> bool,
    {
        if is_absent(&value) {
            Err(AccessError::AbsentValue)
        } else {
            Ok(Maybe::Present(value))
        }
    }

    /// Wrap a value, mapping the caller's sentinel to `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// let not_found = |i: &i64| *i < 0;
    ///
    /// assert_eq!(Maybe::option(3, not_found), Maybe::present(3));
    /// assert_eq!(Maybe::option(-1, not_found), Maybe::absent());
    /// ```
    pub fn option<P>(value: A, is_absent: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if is_absent(&value) {
            Maybe::Absent
        } else {
            Maybe::Present(value)
        }
    }

    /// Convert from `Option`, treating `None` as absence.
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        match option {
            Some(a) => Maybe::Present(a),
            None => Maybe::Absent,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert!(Maybe::present(4).exists(|x| x % 2 == 0));
    /// assert!(!Maybe::present(3).exists(|x| x % 2 == 0));
    /// assert!(!Maybe::<i32>::absent().exists(|_| true));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Present(a) => predicate(a),
            Maybe::Absent => false,
        }
    }

    /// Returns `true` if no value is present, or the value satisfies
    /// `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert!(Maybe::present(4).forall(|x| x % 2 == 0));
    /// assert!(!Maybe::present(3).forall(|x| x % 2 == 0));
    /// assert!(Maybe::<i32>::absent().forall(|_| false));
    /// ```
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Present(a) => predicate(a),
            Maybe::Absent => true,
        }
    }

    // ========== Extractors ==========

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics if the container is `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert_eq!(*Maybe::present(7).get(), 7);
    /// ```
    #[inline]
    pub fn get(&self) -> &A {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => panic!("called `Maybe::get()` on an `Absent` value"),
        }
    }

    /// Borrow the value, or report that there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchElement`] if the container is `Absent`.
    #[inline]
    pub fn try_get(&self) -> Result<&A, AccessError> {
        match self {
            Maybe::Present(a) => Ok(a),
            Maybe::Absent => Err(AccessError::NoSuchElement {
                context: "Maybe::try_get",
            }),
        }
    }

    /// Return the value or `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).get_or_else(0), 1);
    /// assert_eq!(Maybe::absent().get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => default,
        }
    }

    /// Return the value or compute a default. `f` only runs when `Absent`.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => f(),
        }
    }

    /// Return the value, or fail loudly with the supplied message.
    ///
    /// Use this where absence means a broken invariant, not a recoverable
    /// condition.
    ///
    /// # Panics
    ///
    /// Panics with `message()` if the container is `Absent`.
    ///
    /// # Example
    ///
    /// ```rust,should_panic
    /// use riverbed::Maybe;
    ///
    /// let config: Maybe<&str> = Maybe::absent();
    /// config.get_or_error(|| "config must be loaded before start".to_string());
    /// ```
    #[inline]
    pub fn get_or_error<F>(self, message: F) -> A
    where
        F: FnOnce() -> String,
    {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => panic!("{}", message()),
        }
    }

    /// Return the value, or the caller's error when `Absent`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` if the container is `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// fn lookup(id: u32) -> Result<&'static str, String> {
    ///     let found = if id == 1 { Maybe::present("ada") } else { Maybe::absent() };
    ///     found.get_or_throw(|| format!("no user {}", id))
    /// }
    ///
    /// assert_eq!(lookup(1), Ok("ada"));
    /// assert_eq!(lookup(2), Err("no user 2".to_string()));
    /// ```
    #[inline]
    pub fn get_or_throw<E, F>(self, error: F) -> Result<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Present(a) => Ok(a),
            Maybe::Absent => Err(error()),
        }
    }

    /// Borrow the contents: `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Present(a) => Maybe::Present(a),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Convert into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Maybe::Present(a) => Some(a),
            Maybe::Absent => None,
        }
    }

    // ========== Transformations ==========

    /// Transform the value. `f` is never invoked on `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert_eq!(Maybe::present("four").map(str::len), Maybe::present(4));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Maybe::Present(a) => Maybe::Present(f(a)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that may itself produce nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::present(x / 2) } else { Maybe::absent() };
    ///
    /// assert_eq!(Maybe::present(8).flat_map(half), Maybe::present(4));
    /// assert_eq!(Maybe::present(7).flat_map(half), Maybe::absent());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Maybe::Present(a) => f(a),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter(|x| *x > 3), Maybe::present(4));
    /// assert_eq!(Maybe::present(2).filter(|x| *x > 3), Maybe::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Present(a) if predicate(&a) => Maybe::Present(a),
            _ => Maybe::Absent,
        }
    }

    /// Return `self` if present, otherwise `other`.
    #[inline]
    pub fn or_else(self, other: Maybe<A>) -> Self {
        match self {
            Maybe::Present(a) => Maybe::Present(a),
            Maybe::Absent => other,
        }
    }

    /// Return `self` if present, otherwise the result of `f`.
    #[inline]
    pub fn or_else_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<A>,
    {
        match self {
            Maybe::Present(a) => Maybe::Present(a),
            Maybe::Absent => f(),
        }
    }

    // ========== Folding ==========

    /// Eliminate the container: `on_absent` when empty, `on_present` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "nothing".to_string(), |x| x.to_string());
    /// assert_eq!(describe(Maybe::present(3)), "3");
    /// assert_eq!(describe(Maybe::absent()), "nothing");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_absent: F, on_present: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Maybe::Present(a) => on_present(a),
            Maybe::Absent => on_absent(),
        }
    }

    /// Run a side effect on the value, if any.
    #[inline]
    pub fn foreach<F>(&self, f: F)
    where
        F: FnOnce(&A),
    {
        if let Maybe::Present(a) = self {
            f(a);
        }
    }

    // ========== Conversions ==========

    /// `Present(a)` becomes `Left(a)`; `Absent` becomes `Right(right())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::present(1).to_left(|| "none"), Either::left(1));
    /// assert_eq!(Maybe::<i32>::absent().to_left(|| "none"), Either::right("none"));
    /// ```
    #[inline]
    pub fn to_left<R, F>(self, right: F) -> Either<A, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Maybe::Present(a) => Either::Left(a),
            Maybe::Absent => Either::Right(right()),
        }
    }

    /// `Present(a)` becomes `Right(a)`; `Absent` becomes `Left(left())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use riverbed::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::present(1).to_right(|| "none"), Either::right(1));
    /// assert_eq!(Maybe::<i32>::absent().to_right(|| "none"), Either::left("none"));
    /// ```
    #[inline]
    pub fn to_right<L, F>(self, left: F) -> Either<L, A>
    where
        F: FnOnce() -> L,
    {
        match self {
            Maybe::Present(a) => Either::Right(a),
            Maybe::Absent => Either::Left(left()),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the value: zero or one element.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().into_option().into_iter()
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Flatten a nested container.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.flat_map(|inner| inner)
    }
}

impl<A: Copy> Maybe<&A> {
    /// Copy the borrowed value out.
    #[inline]
    pub fn copied(self) -> Maybe<A> {
        self.map(|value| *value)
    }
}

impl<A: Clone> Maybe<&A> {
    /// Clone the borrowed value out.
    ///
    /// # Examples
    ///
    /// ```
    /// use riverbed::Maybe;
    ///
    /// let name = String::from("river");
    /// assert_eq!(Maybe::present(&name).cloned(), Maybe::present(name.clone()));
    /// ```
    #[inline]
    pub fn cloned(self) -> Maybe<A> {
        self.map(A::clone)
    }
}

// ========== Trait Implementations ==========

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        Maybe::from_option(option)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> Default for Maybe<A> {
    /// Returns `Maybe::Absent`.
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(a) => write!(f, "some({})", a),
            Maybe::Absent => write!(f, "none()"),
        }
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> FromIterator<Maybe<A>> for Maybe<Vec<A>> {
    /// Collect into `Present(values)` if every element is present, else `Absent`.
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<Vec<A>>>()
            .into()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Maybe::from)
    }

    proptest! {
        #[test]
        fn prop_map_then_get_or_else(a: i32, d: i32) {
            let f = |v: i32| v.wrapping_mul(3);
            prop_assert_eq!(Maybe::present(a).map(f).get_or_else(d), f(a));
            prop_assert_eq!(Maybe::<i32>::absent().map(f).get_or_else(d), d);
        }

        #[test]
        fn prop_functor_identity(m in maybe_i32()) {
            prop_assert_eq!(m.map(|v| v), m);
        }

        #[test]
        fn prop_functor_composition(m in maybe_i32()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(m.map(f).map(g), m.map(|v| g(f(v))));
        }

        #[test]
        fn prop_monad_left_identity(a: i32) {
            let f = |v: i32| if v > 0 { Maybe::present(v) } else { Maybe::absent() };
            prop_assert_eq!(Maybe::present(a).flat_map(f), f(a));
        }

        #[test]
        fn prop_monad_right_identity(m in maybe_i32()) {
            prop_assert_eq!(m.flat_map(Maybe::present), m);
        }

        #[test]
        fn prop_filter_agrees_with_exists(m in maybe_i32()) {
            let even = |v: &i32| v % 2 == 0;
            prop_assert_eq!(m.filter(even).is_present(), m.exists(even));
        }
    }
}
