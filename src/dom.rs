//! Capability traits over the page.
//!
//! Controllers never touch `web-sys` directly. They hold resolved [`Node`]
//! handles and a [`Viewport`], both of which have browser implementations in
//! [`crate::browser`] and in-memory fakes for tests.

use crate::error::UiError;

/// A failed DOM mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed: {message}")]
pub struct DomError {
    pub operation: &'static str,
    pub message: String,
}

impl DomError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self { operation, message: message.into() }
    }
}

/// One element: class markers, attributes, and inline style.
pub trait Node {
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `on` is true, remove it otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the class list rejects the token.
    fn set_class(&self, class: &str, on: bool) -> Result<(), DomError>;

    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`DomError`] if the attribute name is invalid.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Set an inline style property. An empty value clears it.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the style declaration is read-only.
    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError>;
}

/// Selector lookups. Absent elements resolve to `None` or an empty list.
pub trait Document {
    type Node: Node + Clone;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn query_all_in(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Resolve an element that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] naming `selector`.
    fn require(&self, selector: &str) -> Result<Self::Node, UiError> {
        self.query(selector).ok_or_else(|| UiError::missing(selector))
    }
}

/// The window: scroll offset, width, and programmatic scrolling.
pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Layout viewport width in CSS pixels.
    fn width(&self) -> f64;

    /// Request a smooth scroll to offset 0. Completion is not tracked.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the browser rejects the request.
    fn scroll_to_top(&self) -> Result<(), DomError>;
}

/// Where a document-level click landed relative to the nav drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    /// The target is the nav panel or one of its descendants.
    pub inside_panel: bool,
    /// The target is the menu toggle or one of its descendants.
    pub on_toggle: bool,
}
