//! FAQ accordion: at most one item expanded at a time.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use crate::config::UiConfig;
use crate::consts::ACTIVE_CLASS;
use crate::controller::UiController;
use crate::dom::{Document, DomError, Node};
use crate::error::UiError;

/// One accordion entry and its clickable header.
#[derive(Debug, Clone)]
pub struct FaqItem<N> {
    pub item: N,
    pub header: N,
}

pub struct FaqAccordion<N> {
    items: Vec<FaqItem<N>>,
}

impl<N: Node + Clone> FaqAccordion<N> {
    /// Collect every item on the page. An empty page yields an empty,
    /// inert accordion.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if an item has no header.
    pub fn mount<D: Document<Node = N>>(doc: &D, config: &UiConfig) -> Result<Self, UiError> {
        let selectors = &config.selectors;
        let mut items = Vec::new();
        for item in doc.query_all(&selectors.faq_item) {
            let header = doc
                .query_in(&item, &selectors.faq_header)
                .ok_or_else(|| UiError::missing(&format!("{} {}", selectors.faq_item, selectors.faq_header)))?;
            items.push(FaqItem { item, header });
        }
        Ok(Self { items })
    }

    /// Header click on item `index`: close everything, then reopen the
    /// item unless it was the one already open.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if a marker cannot be changed.
    pub fn on_header_click(&self, index: usize) -> Result<(), DomError> {
        let Some(entry) = self.items.get(index) else {
            log::warn!("faq: header click for unknown item {index}");
            return Ok(());
        };
        let was_active = entry.item.has_class(ACTIVE_CLASS);
        self.close_all()?;
        if !was_active {
            entry.item.set_class(ACTIVE_CLASS, true)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`DomError`] if a marker cannot be removed.
    pub fn close_all(&self) -> Result<(), DomError> {
        for entry in &self.items {
            entry.item.set_class(ACTIVE_CLASS, false)?;
        }
        Ok(())
    }

    /// Index of the expanded item, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|entry| entry.item.has_class(ACTIVE_CLASS))
    }

    #[must_use]
    pub fn items(&self) -> &[FaqItem<N>] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<N: Node + Clone> UiController for FaqAccordion<N> {
    fn name(&self) -> &'static str {
        "faq"
    }
}
