#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let config = UiConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.nav_breakpoint_px, 780.0);
    assert_eq!(config.header_threshold_px, 50.0);
    assert_eq!(config.scroll_up_threshold_px, 300.0);
    assert_eq!(config.selectors.scroll_up, "#scrollUp");
    assert_eq!(config.selectors.faq_header, ".faq-header");
}

#[test]
fn default_config_validates() {
    assert!(UiConfig::default().validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = UiConfig::from_json("{}").unwrap();
    assert_eq!(config, UiConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = UiConfig::from_json(r#"{"nav_breakpoint_px": 1024, "selectors": {"contact": ".contact-fab"}}"#).unwrap();
    assert_eq!(config.nav_breakpoint_px, 1024.0);
    assert_eq!(config.header_threshold_px, 50.0);
    assert_eq!(config.selectors.contact, ".contact-fab");
    assert_eq!(config.selectors.header, ".header");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = UiConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, UiError::ConfigParse(_)));
}

#[test]
fn negative_threshold_rejected() {
    let err = UiConfig::from_json(r#"{"scroll_up_threshold_px": -1}"#).unwrap_err();
    match err {
        UiError::InvalidConfig(msg) => assert!(msg.contains("scroll_up_threshold_px")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_storage_key_rejected() {
    let err = UiConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
    assert!(matches!(err, UiError::InvalidConfig(_)));
}

#[test]
fn empty_selector_rejected() {
    let err = UiConfig::from_json(r#"{"selectors": {"nav_menu": ""}}"#).unwrap_err();
    match err {
        UiError::InvalidConfig(msg) => assert_eq!(msg, "selectors.nav_menu must not be empty"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn config_serializes_back_to_json() {
    let raw = serde_json::to_string(&UiConfig::default()).unwrap();
    assert!(raw.contains("\"storage_key\":\"theme\""));
}
