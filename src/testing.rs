//! In-memory page fakes for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::config::UiConfig;
use crate::dom::{Document, DomError, Node, Viewport};
use crate::storage::{PreferenceStore, StorageError};

// =============================================================
// FakeNode
// =============================================================

#[derive(Debug, Default)]
struct NodeState {
    classes: BTreeSet<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    children: HashMap<String, Vec<FakeNode>>,
    reject_writes: bool,
}

/// Shared-handle element. Clones refer to the same node.
#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    state: Rc<RefCell<NodeState>>,
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&self, selector: &str, child: FakeNode) {
        self.state
            .borrow_mut()
            .children
            .entry(selector.to_owned())
            .or_default()
            .push(child);
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    /// Make every later mutation fail.
    pub fn reject_writes(&self) {
        self.state.borrow_mut().reject_writes = true;
    }

    pub fn same(&self, other: &FakeNode) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn check_writable(&self, operation: &'static str) -> Result<(), DomError> {
        if self.state.borrow().reject_writes {
            return Err(DomError::new(operation, "rejected by fake"));
        }
        Ok(())
    }
}

impl Node for FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, on: bool) -> Result<(), DomError> {
        self.check_writable("classList")?;
        let mut state = self.state.borrow_mut();
        if on {
            state.classes.insert(class.to_owned());
        } else {
            state.classes.remove(class);
        }
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.check_writable("setAttribute")?;
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
        self.check_writable("style.setProperty")?;
        let mut state = self.state.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_owned(), value.to_owned());
        }
        Ok(())
    }
}

// =============================================================
// FakeDocument
// =============================================================

#[derive(Debug, Clone, Default)]
pub struct FakeDocument {
    pub root: Option<FakeNode>,
    pub body: Option<FakeNode>,
    nodes: HashMap<String, Vec<FakeNode>>,
}

impl FakeDocument {
    /// A document with `<html>` and `<body>` but nothing else.
    pub fn empty() -> Self {
        Self { root: Some(FakeNode::new()), body: Some(FakeNode::new()), nodes: HashMap::new() }
    }

    pub fn insert(&mut self, selector: &str, node: FakeNode) -> FakeNode {
        self.nodes
            .entry(selector.to_owned())
            .or_default()
            .push(node.clone());
        node
    }

    pub fn remove(&mut self, selector: &str) {
        self.nodes.remove(selector);
    }

    /// First node registered under `selector`, for assertions.
    pub fn get(&self, selector: &str) -> FakeNode {
        self.query(selector).unwrap_or_default()
    }
}

impl Document for FakeDocument {
    type Node = FakeNode;

    fn root(&self) -> Option<FakeNode> {
        self.root.clone()
    }

    fn body(&self) -> Option<FakeNode> {
        self.body.clone()
    }

    fn query(&self, selector: &str) -> Option<FakeNode> {
        self.nodes.get(selector).and_then(|nodes| nodes.first().cloned())
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.nodes.get(selector).cloned().unwrap_or_default()
    }

    fn query_in(&self, scope: &FakeNode, selector: &str) -> Option<FakeNode> {
        self.query_all_in(scope, selector).into_iter().next()
    }

    fn query_all_in(&self, scope: &FakeNode, selector: &str) -> Vec<FakeNode> {
        scope
            .state
            .borrow()
            .children
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }
}

/// A full page: header, drawer with two links, toggles, floating buttons,
/// and `faq_items` accordion items.
pub fn page(faq_items: usize) -> FakeDocument {
    let selectors = UiConfig::default().selectors;
    let mut doc = FakeDocument::empty();
    doc.insert(&selectors.theme_toggle, FakeNode::new());
    doc.insert(&selectors.menu_toggle, FakeNode::new());
    doc.insert(&selectors.menu_close, FakeNode::new());
    doc.insert(&selectors.header, FakeNode::new());
    doc.insert(&selectors.scroll_up, FakeNode::new());
    doc.insert(&selectors.contact, FakeNode::new());

    let panel = doc.insert(&selectors.nav_menu, FakeNode::new());
    panel.add_child(&selectors.nav_link, FakeNode::new());
    panel.add_child(&selectors.nav_link, FakeNode::new());

    for _ in 0..faq_items {
        let item = doc.insert(&selectors.faq_item, FakeNode::new());
        item.add_child(&selectors.faq_header, FakeNode::new());
    }
    doc
}

// =============================================================
// FakeViewport
// =============================================================

#[derive(Debug, Clone)]
pub struct FakeViewport {
    offset: Rc<Cell<f64>>,
    width: Rc<Cell<f64>>,
    scroll_requests: Rc<Cell<usize>>,
}

impl FakeViewport {
    pub fn new(width: f64) -> Self {
        Self {
            offset: Rc::new(Cell::new(0.0)),
            width: Rc::new(Cell::new(width)),
            scroll_requests: Rc::new(Cell::new(0)),
        }
    }

    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);
    }

    pub fn resize(&self, width: f64) {
        self.width.set(width);
    }

    /// Number of scroll-to-top requests received.
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests.get()
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn width(&self) -> f64 {
        self.width.get()
    }

    fn scroll_to_top(&self) -> Result<(), DomError> {
        self.scroll_requests.set(self.scroll_requests.get() + 1);
        Ok(())
    }
}

// =============================================================
// MemoryStore
// =============================================================

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// FailingStore
// =============================================================

/// A store whose every access fails, like `localStorage` in a locked-down
/// browser profile.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    writes: Rc<Cell<usize>>,
}

impl FailingStore {
    pub fn write_attempts(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("access denied".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        Err(StorageError::Write("quota exceeded".into()))
    }
}
