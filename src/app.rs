//! Composition root.
//!
//! Mounts and initializes the controllers in a fixed order: theme, mobile
//! menu, scroll, FAQ. The first failure stops the sequence. Controllers
//! mounted before it stay live and are handed back in a [`PartialMount`],
//! so a page missing its header still gets a working theme toggle.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::UiConfig;
use crate::controller::UiController;
use crate::dom::{Document, Node, Viewport};
use crate::error::UiError;
use crate::faq::FaqAccordion;
use crate::menu::MobileMenu;
use crate::scroll::ScrollController;
use crate::storage::PreferenceStore;
use crate::theme::ThemeController;

/// The mounted controllers. A slot is `None` when its controller was never
/// reached because an earlier one failed, or when its own mount failed.
pub struct App<N, V, S> {
    pub theme: Option<ThemeController<N, S>>,
    pub menu: Option<MobileMenu<N, V>>,
    pub scroll: Option<ScrollController<N, V>>,
    pub faq: Option<FaqAccordion<N>>,
}

/// A mount that stopped early: the controllers that did come up, and the
/// error that stopped the rest.
pub struct PartialMount<N, V, S> {
    pub app: App<N, V, S>,
    pub error: UiError,
}

impl<N, V, S> App<N, V, S>
where
    N: Node + Clone,
    V: Viewport + Clone,
    S: PreferenceStore,
{
    /// Mount every controller against `doc`.
    ///
    /// # Errors
    ///
    /// Returns a [`PartialMount`] carrying the first mount or init error
    /// together with every controller mounted before it.
    pub fn mount<D: Document<Node = N>>(
        doc: &D,
        viewport: V,
        store: S,
        config: &UiConfig,
    ) -> Result<Self, PartialMount<N, V, S>> {
        let mut app = Self { theme: None, menu: None, scroll: None, faq: None };
        match app.mount_in_order(doc, viewport, store, config) {
            Ok(()) => {
                log::info!("site ui initialized ({} faq items)", app.faq.as_ref().map_or(0, FaqAccordion::len));
                Ok(app)
            }
            Err(error) => Err(PartialMount { app, error }),
        }
    }

    fn mount_in_order<D: Document<Node = N>>(
        &mut self,
        doc: &D,
        viewport: V,
        store: S,
        config: &UiConfig,
    ) -> Result<(), UiError> {
        self.theme = Some(initialized(ThemeController::mount(doc, store, config)?)?);
        self.menu = Some(initialized(MobileMenu::mount(doc, viewport.clone(), config)?)?);
        self.scroll = Some(initialized(ScrollController::mount(doc, viewport, config)?)?);
        self.faq = Some(initialized(FaqAccordion::mount(doc, config)?)?);
        Ok(())
    }

    /// Names of the controllers that are mounted, in mount order.
    #[must_use]
    pub fn mounted(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if let Some(theme) = &self.theme {
            names.push(theme.name());
        }
        if let Some(menu) = &self.menu {
            names.push(menu.name());
        }
        if let Some(scroll) = &self.scroll {
            names.push(scroll.name());
        }
        if let Some(faq) = &self.faq {
            names.push(faq.name());
        }
        names
    }

    /// Tear mounted controllers down in reverse mount order.
    ///
    /// # Errors
    ///
    /// Returns the first teardown error after attempting every controller.
    pub fn teardown(&mut self) -> Result<(), UiError> {
        let controllers: [Option<&mut dyn UiController>; 4] = [
            self.faq.as_mut().map(|c| c as &mut dyn UiController),
            self.scroll.as_mut().map(|c| c as &mut dyn UiController),
            self.menu.as_mut().map(|c| c as &mut dyn UiController),
            self.theme.as_mut().map(|c| c as &mut dyn UiController),
        ];
        let mut first_err = None;
        for controller in controllers.into_iter().flatten() {
            if let Err(err) = controller.teardown() {
                log::warn!("{}: teardown failed: {err}", controller.name());
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

fn initialized<C: UiController>(mut controller: C) -> Result<C, UiError> {
    controller
        .init()
        .inspect_err(|err| log::error!("{}: init failed: {err}", controller.name()))?;
    Ok(controller)
}
