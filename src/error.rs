//! Crate-level error type.
//!
//! Lower layers carry their own errors ([`DomError`], [`crate::storage::StorageError`]).
//! `UiError` is what mount, init, and teardown return.

use crate::dom::DomError;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("browser environment unavailable: {0}")]
    Environment(&'static str),
}

impl UiError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}
