//! Typed identifiers - UUID-formatted strings wrapped per entity
//!
//! Identifiers are validated once at construction and stored in canonical
//! (lowercase, hyphenated) form, so two ids naming the same UUID compare equal
//! no matter how the raw text was cased.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error when parsing a typed identifier from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: `{value}` is not a UUID")]
pub struct IdParseError {
    kind: &'static str,
    value: String,
}

impl IdParseError {
    /// Name of the identifier type that rejected the value
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

macro_rules! uuid_string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a UUID-formatted string
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                Uuid::parse_str(s)
                    .map(Self::from_uuid)
                    .map_err(|_| IdParseError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }

            /// Wrap an already-parsed UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid.hyphenated().to_string())
            }

            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self::from_uuid(Uuid::new_v4())
            }

            /// Borrow the canonical string form
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the canonical string form
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self::from_uuid(uuid)
            }
        }
    };
}

uuid_string_id!(
    /// Identifier of a user
    UserId,
    "user id"
);

uuid_string_id!(
    /// Identifier of an account
    AccountId,
    "account id"
);
