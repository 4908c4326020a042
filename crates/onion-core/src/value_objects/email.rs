//! Email value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email address
///
/// Only distinguishes an email from other strings at the type level; the
/// content is not format-checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap a string as an email
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Borrow the raw address
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the raw address
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Email {
    fn from(email: String) -> Self {
        Self(email)
    }
}

impl From<&str> for Email {
    fn from(email: &str) -> Self {
        Self(email.to_string())
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
