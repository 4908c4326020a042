//! Domain error base
//!
//! Every service error carries a `DomainError`: a message rendered once from
//! whatever failure payload the lower layer produced, plus that payload kept
//! as the error source.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

type Source = Arc<dyn StdError + Send + Sync + 'static>;

/// Common failure representation for the domain layer
#[derive(Clone)]
pub struct DomainError {
    message: String,
    source: Option<Source>,
}

impl DomainError {
    /// Create an error from a plain message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping it as the source
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: render_failure(&err),
            source: Some(Arc::new(err)),
        }
    }

    /// Render an arbitrary serializable failure payload
    ///
    /// A payload that serializes to a JSON string is used verbatim; anything
    /// else is rendered as pretty-printed JSON.
    pub fn from_value<T>(payload: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        let message = match serde_json::to_value(payload) {
            Ok(serde_json::Value::String(s)) => s,
            Ok(value) => serde_json::to_string_pretty(&value)
                .unwrap_or_else(|e| format!("unrenderable failure payload: {e}")),
            Err(e) => format!("unrenderable failure payload: {e}"),
        };
        Self::new(message)
    }

    /// The rendered message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether the original failure payload was kept
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Downcast the kept payload to a concrete error type
    pub fn source_as<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

/// Render a failure payload to a human-readable string
///
/// Prefers the payload's own `Display` rendering; a blank rendering falls back
/// to the pretty-printed `Debug` dump.
pub fn render_failure<P>(payload: &P) -> String
where
    P: fmt::Display + fmt::Debug + ?Sized,
{
    let shown = payload.to_string();
    if shown.trim().is_empty() {
        format!("{payload:#?}")
    } else {
        shown
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainError")
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl StdError for DomainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<String> for DomainError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for DomainError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
