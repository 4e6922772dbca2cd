//! Client-side behavior for the marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by every page. It owns
//! four independent controllers (theme, mobile menu, scroll visibility, FAQ
//! accordion) and a composition root that mounts them once the DOM is
//! parsed. Controllers are written against the small capability traits in
//! [`dom`] and [`storage`], so everything except the `web-sys` glue runs in
//! native unit tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Composition root: mount order and teardown |
//! | [`theme`] | Persisted light/dark preference |
//! | [`menu`] | Mobile navigation drawer |
//! | [`scroll`] | Scroll-driven header and button visibility |
//! | [`faq`] | Exclusive FAQ accordion |
//! | [`frame`] | Per-frame flush gate for scroll events |
//! | [`controller`] | Shared init/teardown lifecycle |
//! | [`dom`] | Element, document, and viewport capabilities |
//! | [`storage`] | Fallible durable preference store |
//! | [`config`] | Runtime configuration and JSON overrides |
//! | [`consts`] | Default thresholds, selectors, and class names |
//! | `browser` | `web-sys` bindings and wasm entry point (feature `browser`) |

pub mod app;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod faq;
pub mod frame;
pub mod menu;
pub mod scroll;
pub mod storage;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(test)]
mod testing;

pub use app::{App, PartialMount};
pub use config::UiConfig;
pub use error::UiError;
