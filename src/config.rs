//! Runtime configuration for the site UI.
//!
//! Defaults come from [`crate::consts`]. A page can override any field by
//! embedding a JSON document in `<script type="application/json"
//! id="site-ui-config">`; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::UiError;

/// Thresholds, storage key, and selectors used by every controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub storage_key: String,
    pub nav_breakpoint_px: f64,
    pub header_threshold_px: f64,
    pub scroll_up_threshold_px: f64,
    pub selectors: Selectors,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            nav_breakpoint_px: consts::NAV_BREAKPOINT_PX,
            header_threshold_px: consts::HEADER_THRESHOLD_PX,
            scroll_up_threshold_px: consts::SCROLL_UP_THRESHOLD_PX,
            selectors: Selectors::default(),
        }
    }
}

/// CSS selectors for every element the controllers touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub menu_toggle: String,
    pub menu_close: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub header: String,
    pub scroll_up: String,
    pub contact: String,
    pub faq_item: String,
    pub faq_header: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: consts::THEME_TOGGLE_SELECTOR.to_owned(),
            menu_toggle: consts::MENU_TOGGLE_SELECTOR.to_owned(),
            menu_close: consts::MENU_CLOSE_SELECTOR.to_owned(),
            nav_menu: consts::NAV_MENU_SELECTOR.to_owned(),
            nav_link: consts::NAV_LINK_SELECTOR.to_owned(),
            header: consts::HEADER_SELECTOR.to_owned(),
            scroll_up: consts::SCROLL_UP_SELECTOR.to_owned(),
            contact: consts::CONTACT_SELECTOR.to_owned(),
            faq_item: consts::FAQ_ITEM_SELECTOR.to_owned(),
            faq_header: consts::FAQ_HEADER_SELECTOR.to_owned(),
        }
    }
}

impl Selectors {
    fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("theme_toggle", self.theme_toggle.as_str()),
            ("menu_toggle", self.menu_toggle.as_str()),
            ("menu_close", self.menu_close.as_str()),
            ("nav_menu", self.nav_menu.as_str()),
            ("nav_link", self.nav_link.as_str()),
            ("header", self.header.as_str()),
            ("scroll_up", self.scroll_up.as_str()),
            ("contact", self.contact.as_str()),
            ("faq_item", self.faq_item.as_str()),
            ("faq_header", self.faq_header.as_str()),
        ]
    }
}

impl UiConfig {
    /// Parse a JSON override document and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigParse`] for malformed JSON and
    /// [`UiError::InvalidConfig`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds and selectors.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.storage_key.trim().is_empty() {
            return Err(UiError::InvalidConfig("storage_key must not be empty".into()));
        }
        let thresholds = [
            ("nav_breakpoint_px", self.nav_breakpoint_px),
            ("header_threshold_px", self.header_threshold_px),
            ("scroll_up_threshold_px", self.scroll_up_threshold_px),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(UiError::InvalidConfig(format!("{name} must be a finite, non-negative number")));
            }
        }
        for (name, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                return Err(UiError::InvalidConfig(format!("selectors.{name} must not be empty")));
            }
        }
        Ok(())
    }
}
