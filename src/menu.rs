//! Mobile navigation drawer.
//!
//! Open/closed is the presence of `active` on the nav panel; the header gets
//! `menu-open` alongside it and the body is scroll-locked while open.
//! Every transition writes the DOM even when the state does not change, so
//! repeated opens or closes are harmless.
//!
//! Closing resets body `overflow` to empty rather than a remembered value,
//! so other code that locks body scroll will not compose with this one.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::UiConfig;
use crate::consts::{ACTIVE_CLASS, ESCAPE_KEY, MENU_OPEN_CLASS, OVERFLOW_LOCKED};
use crate::controller::UiController;
use crate::dom::{ClickTarget, Document, DomError, Node, Viewport};
use crate::error::UiError;

pub struct MobileMenu<N, V> {
    panel: N,
    header: N,
    body: N,
    toggle: Option<N>,
    close_button: Option<N>,
    links: Vec<N>,
    viewport: V,
    breakpoint_px: f64,
}

impl<N: Node + Clone, V: Viewport> MobileMenu<N, V> {
    /// Resolve the drawer elements.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if the nav panel, header, or body
    /// is absent. The toggle and close buttons are optional.
    pub fn mount<D: Document<Node = N>>(doc: &D, viewport: V, config: &UiConfig) -> Result<Self, UiError> {
        let selectors = &config.selectors;
        let panel = doc.require(&selectors.nav_menu)?;
        let header = doc.require(&selectors.header)?;
        let body = doc.body().ok_or_else(|| UiError::missing("body"))?;
        let links = doc.query_all_in(&panel, &selectors.nav_link);
        Ok(Self {
            toggle: doc.query(&selectors.menu_toggle),
            close_button: doc.query(&selectors.menu_close),
            panel,
            header,
            body,
            links,
            viewport,
            breakpoint_px: config.nav_breakpoint_px,
        })
    }

    /// # Errors
    ///
    /// Returns a [`DomError`] if a marker or the body style cannot be set.
    pub fn open(&self) -> Result<(), DomError> {
        self.panel.set_class(ACTIVE_CLASS, true)?;
        self.header.set_class(MENU_OPEN_CLASS, true)?;
        self.body.set_style("overflow", OVERFLOW_LOCKED)
    }

    /// # Errors
    ///
    /// Returns a [`DomError`] if a marker or the body style cannot be set.
    pub fn close(&self) -> Result<(), DomError> {
        self.panel.set_class(ACTIVE_CLASS, false)?;
        self.header.set_class(MENU_OPEN_CLASS, false)?;
        self.body.set_style("overflow", "")
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.has_class(ACTIVE_CLASS)
    }

    // --- Event handlers ---

    /// # Errors
    ///
    /// See [`Self::open`].
    pub fn on_toggle_click(&self) -> Result<(), DomError> {
        self.open()
    }

    /// # Errors
    ///
    /// See [`Self::close`].
    pub fn on_close_click(&self) -> Result<(), DomError> {
        self.close()
    }

    /// Close when a click lands outside both the panel and the toggle.
    ///
    /// Returns whether the menu was closed.
    ///
    /// # Errors
    ///
    /// See [`Self::close`].
    pub fn on_document_click(&self, target: ClickTarget) -> Result<bool, DomError> {
        if target.inside_panel || target.on_toggle || !self.is_open() {
            return Ok(false);
        }
        self.close()?;
        Ok(true)
    }

    /// Close after a nav link click, but only on narrow viewports.
    ///
    /// # Errors
    ///
    /// See [`Self::close`].
    pub fn on_link_click(&self) -> Result<bool, DomError> {
        if self.viewport.width() >= self.breakpoint_px {
            return Ok(false);
        }
        self.close()?;
        Ok(true)
    }

    /// # Errors
    ///
    /// See [`Self::close`].
    pub fn on_key_down(&self, key: &str) -> Result<bool, DomError> {
        if key != ESCAPE_KEY || !self.is_open() {
            return Ok(false);
        }
        self.close()?;
        Ok(true)
    }

    // --- Resolved elements ---

    #[must_use]
    pub fn toggle(&self) -> Option<&N> {
        self.toggle.as_ref()
    }

    #[must_use]
    pub fn close_button(&self) -> Option<&N> {
        self.close_button.as_ref()
    }

    #[must_use]
    pub fn links(&self) -> &[N] {
        &self.links
    }
}

impl<N: Node + Clone, V: Viewport> UiController for MobileMenu<N, V> {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn teardown(&mut self) -> Result<(), UiError> {
        if self.is_open() {
            self.close()?;
        }
        Ok(())
    }
}
