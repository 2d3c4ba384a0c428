use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn sample() -> MemoryDocument {
    let doc = MemoryDocument::new();
    doc.append(
        MemoryElement::new("button")
            .with_id("theme-toggle")
            .with_child(MemoryElement::new("i").with_class("fas").with_class("fa-moon")),
    );
    doc.append(MemoryElement::new("ul").with_class("nav-links"));
    doc
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn element_by_id_finds_nested_element() {
    let doc = sample();
    let el = doc.element_by_id("theme-toggle").unwrap();
    assert_eq!(el.tag(), "button");
    assert!(doc.element_by_id("missing").is_none());
}

#[test]
fn query_supports_class_and_tag_selectors() {
    let doc = sample();
    assert_eq!(doc.query(".nav-links").unwrap().tag(), "ul");
    assert_eq!(doc.query("html").unwrap().tag(), "html");
    assert!(doc.query(".absent").is_none());
}

#[test]
fn element_query_searches_descendants_only() {
    let doc = sample();
    let toggle = doc.element_by_id("theme-toggle").unwrap();
    assert!(toggle.query("i").is_some());
    assert!(toggle.query("button").is_none());
    assert!(toggle.query(".nav-links").is_none());
}

// =============================================================
// Attributes and classes
// =============================================================

#[test]
fn set_attribute_round_trips_and_overwrites() {
    let el = MemoryElement::new("div");
    assert_eq!(el.attribute("data-theme"), None);
    el.set_attribute("data-theme", "dark").unwrap();
    el.set_attribute("data-theme", "light").unwrap();
    assert_eq!(el.attribute("data-theme").as_deref(), Some("light"));
}

#[test]
fn class_attribute_reflects_class_list() {
    let el = MemoryElement::new("div").with_class("a");
    el.add_class("b").unwrap();
    assert_eq!(el.attribute("class").as_deref(), Some("a b"));
    el.set_attribute("class", "c  c d").unwrap();
    assert_eq!(el.classes(), vec!["c".to_owned(), "d".to_owned()]);
}

#[test]
fn add_class_is_idempotent() {
    let el = MemoryElement::new("div");
    el.add_class("x").unwrap();
    el.add_class("x").unwrap();
    assert_eq!(el.classes(), vec!["x".to_owned()]);
}

#[test]
fn toggle_class_reports_presence() {
    let el = MemoryElement::new("div");
    assert!(el.toggle_class("active").unwrap());
    assert!(el.has_class("active"));
    assert!(!el.toggle_class("active").unwrap());
    assert!(!el.has_class("active"));
}

#[test]
fn invalid_class_tokens_are_rejected() {
    let el = MemoryElement::new("div");
    assert!(matches!(el.add_class(""), Err(ChromeError::Dom(_))));
    assert!(matches!(el.toggle_class("two words"), Err(ChromeError::Dom(_))));
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_runs_every_handler_each_time() {
    let el = MemoryElement::new("button");
    let count = Rc::new(Cell::new(0));
    for _ in 0..2 {
        let count = Rc::clone(&count);
        el.on_click(Box::new(move || count.set(count.get() + 1))).unwrap();
    }
    el.click();
    el.click();
    assert_eq!(count.get(), 4);
    assert_eq!(el.listener_count(), 2);
}

#[test]
fn handler_may_mutate_clicked_element() {
    let el = MemoryElement::new("button");
    let target = el.clone();
    el.on_click(Box::new(move || {
        let _ = target.toggle_class("pressed");
    }))
    .unwrap();
    el.click();
    assert!(el.has_class("pressed"));
}

#[test]
fn text_is_exposed() {
    let el = MemoryElement::new("script").with_text("{}");
    assert_eq!(el.text().as_deref(), Some("{}"));
    assert_eq!(MemoryElement::new("p").text(), None);
}

#[test]
fn unsupported_selectors_match_nothing() {
    let doc = sample();
    doc.append(MemoryElement::new("div").with_class("nav").with_child(MemoryElement::new("p").with_class("links")));
    assert!(doc.query(".nav .links").is_none());
    assert!(doc.query("ul.nav-links").is_none());
    assert!(doc.query("#theme-toggle > i").is_none());
    assert!(doc.query("").is_none());
    assert!(doc.root_element().query("[data-x]").is_none());
}

#[test]
fn rejecting_element_refuses_listeners() {
    let el = MemoryElement::new("button").rejecting_listeners();
    let err = el.on_click(Box::new(|| {})).unwrap_err();
    assert!(matches!(err, ChromeError::Dom(_)));
    assert_eq!(el.listener_count(), 0);
}
