//! Default constants for the site UI controllers.
//!
//! Every value here can be overridden through [`crate::config::UiConfig`].

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the root element that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Layout thresholds (CSS pixels) ──────────────────────────────

/// Below this viewport width, nav link clicks close the drawer.
pub const NAV_BREAKPOINT_PX: f64 = 780.0;

/// Scroll offset past which the header is marked `scrolled` and the
/// contact button is shown.
pub const HEADER_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset past which the scroll-to-top button may appear.
pub const SCROLL_UP_THRESHOLD_PX: f64 = 300.0;

// ── Class markers ───────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "menu-open";
pub const SCROLLED_CLASS: &str = "scrolled";

// ── Selectors ───────────────────────────────────────────────────

pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const MENU_CLOSE_SELECTOR: &str = ".nav-menu-close";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const HEADER_SELECTOR: &str = ".header";
pub const SCROLL_UP_SELECTOR: &str = "#scrollUp";
pub const CONTACT_SELECTOR: &str = ".whatsapp";
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const FAQ_HEADER_SELECTOR: &str = ".faq-header";

// ── Misc ────────────────────────────────────────────────────────

/// Key name reported by the browser for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Body `overflow` value used while the drawer is open.
pub const OVERFLOW_LOCKED: &str = "hidden";

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "site-ui-config";
