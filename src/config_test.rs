use super::*;
use crate::dom::memory::{MemoryDocument, MemoryElement};

#[test]
fn defaults_match_stock_templates() {
    let config = ChromeConfig::default();
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.theme.attribute, "data-theme");
    assert_eq!(config.theme.toggle_id, "theme-toggle");
    assert_eq!(config.theme.icon_selector, "i");
    assert_eq!(config.menu.button_id, "mobile-menu-btn");
    assert_eq!(config.menu.nav_selector, ".nav-links");
    assert_eq!(config.menu.active_class, "active");
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ChromeConfig::from_json(r#"{"theme": {"storage_key": "site-theme"}}"#).unwrap();
    assert_eq!(config.theme.storage_key, "site-theme");
    assert_eq!(config.theme.attribute, DEFAULT_THEME_ATTRIBUTE);
    assert_eq!(config.menu, MenuConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ChromeConfig::from_json("{theme:").unwrap_err();
    assert!(matches!(err, ChromeError::Config(_)));
}

#[test]
fn from_document_without_block_uses_defaults() {
    let doc = MemoryDocument::new();
    assert_eq!(ChromeConfig::from_document(&doc).unwrap(), ChromeConfig::default());
}

#[test]
fn from_document_reads_embedded_json() {
    let doc = MemoryDocument::new();
    doc.append(
        MemoryElement::new("script")
            .with_id(CONFIG_ELEMENT_ID)
            .with_text(r#"{"menu": {"active_class": "open"}}"#),
    );
    let config = ChromeConfig::from_document(&doc).unwrap();
    assert_eq!(config.menu.active_class, "open");
    assert_eq!(config.theme, ThemeConfig::default());
}

#[test]
fn from_document_treats_blank_block_as_defaults() {
    let doc = MemoryDocument::new();
    doc.append(MemoryElement::new("script").with_id(CONFIG_ELEMENT_ID).with_text("  \n"));
    assert_eq!(ChromeConfig::from_document(&doc).unwrap(), ChromeConfig::default());
}

#[test]
fn nav_class_only_for_plain_class_selectors() {
    assert_eq!(MenuConfig::default().nav_class(), Some("nav-links"));
    let by_id = MenuConfig { nav_selector: "#nav".into(), ..MenuConfig::default() };
    assert_eq!(by_id.nav_class(), None);
    let compound = MenuConfig { nav_selector: ".nav .links".into(), ..MenuConfig::default() };
    assert_eq!(compound.nav_class(), None);
}

#[test]
fn from_json_rejects_non_token_classes() {
    for raw in [
        r#"{"theme": {"sun_class": ""}}"#,
        r#"{"theme": {"moon_class": "fa moon"}}"#,
        r#"{"menu": {"active_class": " "}}"#,
    ] {
        assert!(matches!(ChromeConfig::from_json(raw), Err(ChromeError::Config(_))), "{raw}");
    }
}

#[test]
fn from_json_rejects_empty_names() {
    let err = ChromeConfig::from_json(r#"{"theme": {"storage_key": ""}}"#).unwrap_err();
    assert_eq!(err, ChromeError::Config("theme.storage_key is empty".into()));
}

#[test]
fn default_config_validates() {
    assert_eq!(ChromeConfig::default().validate(), Ok(()));
}
