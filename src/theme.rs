//! Light/dark theme preference.
//!
//! The active theme lives in the root element's `data-theme` attribute and
//! is mirrored to durable storage on every change. Storage is best-effort:
//! read failures fall back to the last theme applied in this page (or
//! light), and write failures are logged without blocking the change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::UiConfig;
use crate::consts::THEME_ATTRIBUTE;
use crate::controller::UiController;
use crate::dom::{Document, DomError, Node};
use crate::error::UiError;
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse an exact stored value. Anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme a toggle switches to from the raw active value.
    ///
    /// Only an exact `"dark"` flips to light; unset or unknown values are
    /// treated as not-dark.
    #[must_use]
    pub fn toggled_from(active: Option<&str>) -> Self {
        if active == Some(Self::Dark.as_str()) { Self::Light } else { Self::Dark }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeController<N, S> {
    root: N,
    toggle: Option<N>,
    store: S,
    storage_key: String,
    /// Last applied theme; stands in for storage when reads fail.
    remembered: Option<Theme>,
}

impl<N: Node + Clone, S: PreferenceStore> ThemeController<N, S> {
    /// Resolve the root element and the optional toggle button.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if the document has no root.
    pub fn mount<D: Document<Node = N>>(doc: &D, store: S, config: &UiConfig) -> Result<Self, UiError> {
        let root = doc.root().ok_or_else(|| UiError::missing("html"))?;
        Ok(Self {
            root,
            toggle: doc.query(&config.selectors.theme_toggle),
            store,
            storage_key: config.storage_key.clone(),
            remembered: None,
        })
    }

    /// Apply the stored preference, defaulting to light.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the root attribute cannot be set.
    pub fn load_theme(&mut self) -> Result<Theme, DomError> {
        let stored = match self.store.get(&self.storage_key) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                log::warn!("theme: cannot read preference, using in-memory value: {err}");
                self.remembered
            }
        };
        let theme = stored.unwrap_or_default();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Apply `theme` to the root element and persist it.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the root attribute cannot be set. Storage
    /// failures are logged, not returned.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), DomError> {
        self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
        self.remembered = Some(theme);
        if let Err(err) = self.store.set(&self.storage_key, theme.as_str()) {
            log::warn!("theme: cannot persist {theme}: {err}");
        }
        Ok(())
    }

    /// Flip the currently applied theme.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the root attribute cannot be set.
    pub fn toggle_theme(&mut self) -> Result<Theme, DomError> {
        let next = Theme::toggled_from(self.active_theme().as_deref());
        self.set_theme(next)?;
        Ok(next)
    }

    /// Click handler for the toggle button.
    ///
    /// # Errors
    ///
    /// See [`Self::toggle_theme`].
    pub fn on_toggle_click(&mut self) -> Result<Theme, DomError> {
        self.toggle_theme()
    }

    /// Raw `data-theme` value currently on the root element.
    #[must_use]
    pub fn active_theme(&self) -> Option<String> {
        self.root.attribute(THEME_ATTRIBUTE)
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&N> {
        self.toggle.as_ref()
    }
}

impl<N: Node + Clone, S: PreferenceStore> UiController for ThemeController<N, S> {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn init(&mut self) -> Result<(), UiError> {
        self.load_theme()?;
        Ok(())
    }
}
