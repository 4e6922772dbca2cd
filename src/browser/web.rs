//! `web-sys` implementations of the page capability traits.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList, ScrollToOptions, Storage, Window};

use crate::dom::{Document, DomError, Node, Viewport};
use crate::storage::{PreferenceStore, StorageError};

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================================
// ELEMENTS
// =============================================================================

impl Node for HtmlElement {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) -> Result<(), DomError> {
        let list = self.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        result.map_err(|err| DomError::new("classList", js_message(&err)))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        Element::set_attribute(self, name, value).map_err(|err| DomError::new("setAttribute", js_message(&err)))
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
        self.style()
            .set_property(property, value)
            .map_err(|err| DomError::new("style.setProperty", js_message(&err)))
    }
}

fn into_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn first(result: Result<Option<Element>, JsValue>, selector: &str) -> Option<HtmlElement> {
    match result {
        Ok(found) => found.and_then(into_html),
        Err(err) => {
            log::warn!("query {selector:?} failed: {}", js_message(&err));
            None
        }
    }
}

fn all(result: Result<NodeList, JsValue>, selector: &str) -> Vec<HtmlElement> {
    let list = match result {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query {selector:?} failed: {}", js_message(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Selector lookups against the live document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Document for WebDocument {
    type Node = HtmlElement;

    fn root(&self) -> Option<HtmlElement> {
        self.document.document_element().and_then(into_html)
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        first(self.document.query_selector(selector), selector)
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        all(self.document.query_selector_all(selector), selector)
    }

    fn query_in(&self, scope: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        first(scope.query_selector(selector), selector)
    }

    fn query_all_in(&self, scope: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
        all(scope.query_selector_all(selector), selector)
    }
}

// =============================================================================
// WINDOW
// =============================================================================

#[derive(Debug, Clone)]
pub struct WebViewport {
    window: Window,
}

impl WebViewport {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WebViewport {
    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("scrollY unavailable: {}", js_message(&err));
                0.0
            }
        }
    }

    fn width(&self) -> f64 {
        match self.window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::warn!("innerWidth unavailable: {}", js_message(&err));
                0.0
            }
        }
    }

    fn scroll_to_top(&self) -> Result<(), DomError> {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`, resolved on every access so a store that becomes
/// unavailable mid-session reports an error instead of a stale handle.
#[derive(Debug, Clone)]
pub struct LocalStore {
    window: Window,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage is not provided".into())),
            Err(err) => Err(StorageError::Unavailable(js_message(&err))),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(js_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_message(&err)))
    }
}
