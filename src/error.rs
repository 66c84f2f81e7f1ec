//! Access errors for the sum types
//!
//! `Maybe` and `Either` expose two flavors of every partial accessor: a
//! panicking one (`get`, `unwrap_left`, ...) for call sites that have already
//! established the shape of the value, and a checked one returning
//! `Result<_, AccessError>` for everything else.
//!
//! # Examples
//!
//! ```
//! use riverbed::{AccessError, Maybe};
//!
//! let absent: Maybe<i32> = Maybe::absent();
//! assert_eq!(
//!     absent.try_get(),
//!     Err(AccessError::NoSuchElement { context: "Maybe::try_get" })
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Error raised by checked accessors and constructors of `Maybe` and `Either`.
///
/// These are programmer errors: the caller asked for a value that is not
/// there, or asked a side-specific operation of the wrong side. They are
/// surfaced immediately and never converted into absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// A value was requested from an `Absent` container or from the
    /// non-matching side of an `Either`.
    NoSuchElement {
        /// The accessor that was called.
        context: &'static str,
    },
    /// A side-specific operation was invoked on the other side of an `Either`.
    UnsupportedOperation {
        /// The operation that was refused.
        operation: &'static str,
    },
    /// `Maybe::try_present` was handed a value the caller's sentinel test
    /// classifies as "no value".
    AbsentValue,
}

impl AccessError {
    /// Returns `true` for [`AccessError::NoSuchElement`].
    pub fn is_no_such_element(&self) -> bool {
        matches!(self, AccessError::NoSuchElement { .. })
    }

    /// Returns `true` for [`AccessError::UnsupportedOperation`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, AccessError::UnsupportedOperation { .. })
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::NoSuchElement { context } => {
                write!(f, "no such element: {} found nothing to return", context)
            }
            AccessError::UnsupportedOperation { operation } => {
                write!(f, "unsupported operation: {} on the other side", operation)
            }
            AccessError::AbsentValue => {
                write!(f, "cannot construct a present value from an absent one")
            }
        }
    }
}

impl StdError for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_accessor() {
        let err = AccessError::NoSuchElement {
            context: "Maybe::try_get",
        };
        let display = err.to_string();
        assert!(display.contains("no such element"));
        assert!(display.contains("Maybe::try_get"));
    }

    #[test]
    fn display_names_the_operation() {
        let err = AccessError::UnsupportedOperation {
            operation: "Either::try_map_left",
        };
        assert!(err.to_string().contains("Either::try_map_left"));
    }

    #[test]
    fn kind_predicates() {
        assert!(AccessError::NoSuchElement { context: "x" }.is_no_such_element());
        assert!(!AccessError::AbsentValue.is_no_such_element());
        assert!(AccessError::UnsupportedOperation { operation: "y" }.is_unsupported());
        assert!(!AccessError::AbsentValue.is_unsupported());
    }

    #[test]
    fn works_as_boxed_error() {
        let boxed: Box<dyn StdError> = Box::new(AccessError::AbsentValue);
        assert!(boxed.source().is_none());
        assert!(boxed.to_string().contains("absent"));
    }
}
