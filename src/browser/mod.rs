//! Browser entry point.
//!
//! The wasm start function installs logging, waits for the DOM to be
//! parsed, mounts the [`App`] against the live document, and binds its
//! handlers. A mount that stops early still binds the controllers that came
//! up. The mounted page is kept in a thread-local until [`teardown`] is
//! called from JavaScript.

mod listen;
mod web;

pub use web::{LocalStore, WebDocument, WebViewport};

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::{App, PartialMount};
use crate::config::UiConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::DomError;
use crate::error::UiError;
use listen::Mounted;
use web::js_message;

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
    if let Err(err) = when_ready() {
        log::error!("site ui: cannot schedule initialization: {err}");
    }
}

/// Remove every listener and release page state (menu scroll lock).
#[wasm_bindgen]
pub fn teardown() {
    let Some(mounted) = MOUNTED.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    if let Err(err) = mounted.teardown() {
        log::warn!("site ui: teardown incomplete: {err}");
    }
}

fn when_ready() -> Result<(), UiError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(UiError::Environment("document"))?;
    if document.ready_state() != "loading" {
        mount_page();
        return Ok(());
    }
    let callback = Closure::once_into_js(mount_page);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| DomError::new("addEventListener", js_message(&err)))?;
    Ok(())
}

fn mount_page() {
    match mount() {
        Ok(mounted) => {
            let previous = MOUNTED.with(|slot| slot.borrow_mut().replace(mounted));
            if let Some(previous) = previous {
                if let Err(err) = previous.teardown() {
                    log::warn!("site ui: previous mount teardown incomplete: {err}");
                }
            }
        }
        Err(err) => log::error!("site ui: initialization failed: {err}"),
    }
}

fn mount() -> Result<Mounted, UiError> {
    let window = web_sys::window().ok_or(UiError::Environment("window"))?;
    let document = window.document().ok_or(UiError::Environment("document"))?;
    let config = read_config(&document)?;
    let page = WebDocument::new(document.clone());
    let (app, stopped) =
        match App::mount(&page, WebViewport::new(window.clone()), LocalStore::new(window.clone()), &config) {
            Ok(app) => (app, None),
            Err(PartialMount { app, error }) => (app, Some(error)),
        };
    let mounted = listen::bind(app, &window, &document, &config.selectors)?;
    if let Some(err) = stopped {
        log::error!("site ui: initialization stopped early: {err}");
    }
    Ok(mounted)
}

/// Read overrides from `<script type="application/json" id="site-ui-config">`.
fn read_config(document: &web_sys::Document) -> Result<UiConfig, UiError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(UiConfig::default());
    };
    match element.text_content() {
        Some(raw) if !raw.trim().is_empty() => UiConfig::from_json(&raw),
        _ => Ok(UiConfig::default()),
    }
}
