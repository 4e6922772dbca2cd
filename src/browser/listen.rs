//! DOM event wiring.
//!
//! Every listener is owned by a [`Listener`] guard; dropping the guard
//! removes the listener and frees its closure. All controllers share one
//! `Rc<RefCell<App>>`. Handlers run to completion on the main thread, so
//! borrows never overlap. Only controllers present in the app get
//! listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, HtmlElement, KeyboardEvent, Window};

use super::web::{LocalStore, WebViewport, js_message};
use crate::app::App;
use crate::config::Selectors;
use crate::dom::{ClickTarget, DomError};
use crate::error::UiError;

type WebApp = App<HtmlElement, WebViewport, LocalStore>;
type SharedApp = Rc<RefCell<WebApp>>;

// =============================================================================
// LISTENER GUARD
// =============================================================================

pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, UiError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::new("addEventListener", js_message(&err)))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("removeEventListener({}) failed: {}", self.event, js_message(&err));
        }
    }
}

// =============================================================================
// MOUNTED PAGE
// =============================================================================

/// A mounted app and every listener bound to it.
pub(crate) struct Mounted {
    app: SharedApp,
    listeners: Vec<Listener>,
}

impl Mounted {
    /// Unbind every listener, then let each controller restore the page.
    pub(crate) fn teardown(mut self) -> Result<(), UiError> {
        let count = self.listeners.len();
        self.listeners.clear();
        log::debug!("site ui: removed {count} listeners");
        self.app.borrow_mut().teardown()
    }
}

fn report<T>(context: &str, result: Result<T, DomError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}

/// Bind every mounted controller in mount order.
pub(crate) fn bind(app: WebApp, window: &Window, document: &web_sys::Document, selectors: &Selectors) -> Result<Mounted, UiError> {
    let app = Rc::new(RefCell::new(app));
    let mut listeners = Vec::new();
    bind_theme(&app, &mut listeners)?;
    bind_menu(&app, document, selectors, &mut listeners)?;
    bind_scroll(&app, window, &mut listeners)?;
    bind_faq(&app, &mut listeners)?;
    log::debug!("site ui: bound {} listeners for {:?}", listeners.len(), app.borrow().mounted());
    Ok(Mounted { app, listeners })
}

// =============================================================================
// THEME
// =============================================================================

fn bind_theme(app: &SharedApp, listeners: &mut Vec<Listener>) -> Result<(), UiError> {
    let Some(toggle) = app.borrow().theme.as_ref().and_then(|theme| theme.toggle().cloned()) else {
        return Ok(());
    };
    let handle = Rc::clone(app);
    listeners.push(Listener::attach(&toggle, "click", move |_| {
        if let Some(theme) = handle.borrow_mut().theme.as_mut() {
            report("theme toggle", theme.on_toggle_click());
        }
    })?);
    Ok(())
}

// =============================================================================
// MOBILE MENU
// =============================================================================

fn bind_menu(
    app: &SharedApp,
    document: &web_sys::Document,
    selectors: &Selectors,
    listeners: &mut Vec<Listener>,
) -> Result<(), UiError> {
    let Some((toggle, close, links)) = app
        .borrow()
        .menu
        .as_ref()
        .map(|menu| (menu.toggle().cloned(), menu.close_button().cloned(), menu.links().to_vec()))
    else {
        return Ok(());
    };

    if let Some(toggle) = toggle {
        let handle = Rc::clone(app);
        listeners.push(Listener::attach(&toggle, "click", move |_| {
            if let Some(menu) = &handle.borrow().menu {
                report("menu toggle", menu.on_toggle_click());
            }
        })?);
    }

    if let Some(close) = close {
        let handle = Rc::clone(app);
        listeners.push(Listener::attach(&close, "click", move |_| {
            if let Some(menu) = &handle.borrow().menu {
                report("menu close", menu.on_close_click());
            }
        })?);
    }

    let handle = Rc::clone(app);
    let panel_selector = selectors.nav_menu.clone();
    let toggle_selector = selectors.menu_toggle.clone();
    listeners.push(Listener::attach(document, "click", move |event: Event| {
        if let Some(menu) = &handle.borrow().menu {
            let target = click_target(&event, &panel_selector, &toggle_selector);
            report("menu outside click", menu.on_document_click(target));
        }
    })?);

    for link in links {
        let handle = Rc::clone(app);
        listeners.push(Listener::attach(&link, "click", move |_| {
            if let Some(menu) = &handle.borrow().menu {
                report("menu link", menu.on_link_click());
            }
        })?);
    }

    let handle = Rc::clone(app);
    listeners.push(Listener::attach(document, "keydown", move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(menu) = &handle.borrow().menu {
            report("menu keydown", menu.on_key_down(&key_event.key()));
        }
    })?);
    Ok(())
}

/// Classify a click target against the drawer. Non-element targets count
/// as outside.
fn click_target(event: &Event, panel_selector: &str, toggle_selector: &str) -> ClickTarget {
    let Some(element) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return ClickTarget::default();
    };
    ClickTarget {
        inside_panel: has_ancestor(&element, panel_selector),
        on_toggle: has_ancestor(&element, toggle_selector),
    }
}

fn has_ancestor(element: &Element, selector: &str) -> bool {
    matches!(element.closest(selector), Ok(Some(_)))
}

// =============================================================================
// SCROLL
// =============================================================================

fn bind_scroll(app: &SharedApp, window: &Window, listeners: &mut Vec<Listener>) -> Result<(), UiError> {
    let Some(button) = app.borrow().scroll.as_ref().map(|scroll| scroll.scroll_up_button().cloned()) else {
        return Ok(());
    };

    let handle = Rc::clone(app);
    let frame_window = window.clone();
    listeners.push(Listener::attach(window, "scroll", move |_| {
        let schedule = handle.borrow_mut().scroll.as_mut().is_some_and(|scroll| scroll.on_scroll_event());
        if schedule {
            schedule_frame(&frame_window, &handle);
        }
    })?);

    if let Some(button) = button {
        let handle = Rc::clone(app);
        listeners.push(Listener::attach(&button, "click", move |_| {
            if let Some(scroll) = &handle.borrow().scroll {
                report("scroll to top", scroll.on_scroll_up_click());
            }
        })?);
    }
    Ok(())
}

/// Run the pending scroll evaluation on the next animation frame. Falls
/// back to an immediate flush if the frame cannot be requested.
fn schedule_frame(window: &Window, app: &SharedApp) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let app_for_cb = Rc::clone(app);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        flush_frame(&app_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        flush_frame(app);
    }
}

fn flush_frame(app: &SharedApp) {
    if let Some(scroll) = app.borrow_mut().scroll.as_mut() {
        report("scroll frame", scroll.on_frame());
    }
}

// =============================================================================
// FAQ
// =============================================================================

fn bind_faq(app: &SharedApp, listeners: &mut Vec<Listener>) -> Result<(), UiError> {
    let headers: Vec<HtmlElement> = app
        .borrow()
        .faq
        .iter()
        .flat_map(|faq| faq.items().iter().map(|entry| entry.header.clone()))
        .collect();
    for (index, header) in headers.into_iter().enumerate() {
        let handle = Rc::clone(app);
        listeners.push(Listener::attach(&header, "click", move |_| {
            if let Some(faq) = &handle.borrow().faq {
                report("faq header", faq.on_header_click(index));
            }
        })?);
    }
    Ok(())
}
