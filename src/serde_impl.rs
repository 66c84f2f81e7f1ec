//! Serde support for `Maybe` (feature-gated)
//!
//! `Maybe<A>` serializes exactly like `Option<A>`: `Absent` becomes the
//! format's "none" (`null` in JSON) and `Present(a)` becomes `a`. `Either`
//! derives its impls and uses serde's default externally tagged layout
//! (`{"Left": ...}` / `{"Right": ...}`).
//!
//! # Example
//!
//! ```rust
//! use riverbed::{Either, Maybe};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Lookup {
//!     nickname: Maybe<String>,
//!     result: Either<String, u32>,
//! }
//!
//! let json = r#"{"nickname":null,"result":{"Right":7}}"#;
//! let lookup: Lookup = serde_json::from_str(json).unwrap();
//! assert_eq!(lookup.nickname, Maybe::Absent);
//! assert_eq!(lookup.result, Either::right(7));
//!
//! let present = Lookup {
//!     nickname: Maybe::present("eddy".to_string()),
//!     result: Either::left("not found".to_string()),
//! };
//! assert_eq!(
//!     serde_json::to_string(&present).unwrap(),
//!     r#"{"nickname":"eddy","result":{"Left":"not found"}}"#
//! );
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

impl<A> Serialize for Maybe<A>
where
    A: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Present(value) => serializer.serialize_some(value),
            Maybe::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, A> Deserialize<'de> for Maybe<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<A>::deserialize(deserializer).map(Maybe::from)
    }
}
