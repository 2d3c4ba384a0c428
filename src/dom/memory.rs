//! In-memory document tree.
//!
//! Supports the subset of DOM behavior the controllers rely on: attributes,
//! class lists, single `#id` / `.class` / `tag` selectors, text content, and
//! synthetic clicks that run registered handlers. Any other selector (compound,
//! descendant, attribute, pseudo-class) matches nothing and logs a warning.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{ClickHandler, DomDocument, DomElement};
use crate::error::ChromeError;

#[derive(Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: Option<String>,
    children: Vec<MemoryElement>,
    click_handlers: Vec<ClickHandler>,
    rejects_listeners: bool,
}

/// Shared handle to an in-memory element.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node { tag: tag.to_ascii_lowercase(), ..Node::default() })))
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().attributes.insert("id".to_owned(), id.to_owned());
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        insert_class(&mut self.0.borrow_mut().classes, class);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append_child(child);
        self
    }

    /// Make listener registration on this element fail, as a page script
    /// sandbox or a detached node might.
    #[must_use]
    pub fn rejecting_listeners(self) -> Self {
        self.0.borrow_mut().rejects_listeners = true;
        self
    }

    pub fn append_child(&self, child: MemoryElement) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Number of registered click handlers.
    pub fn listener_count(&self) -> usize {
        self.0.borrow().click_handlers.len()
    }

    /// Dispatch a click to every registered handler, in registration order.
    ///
    /// Handlers may freely mutate this element; the list is detached while
    /// they run and handlers added during dispatch run on the next click.
    pub fn click(&self) {
        let mut handlers = std::mem::take(&mut self.0.borrow_mut().click_handlers);
        for handler in &mut handlers {
            handler();
        }
        let mut node = self.0.borrow_mut();
        let added = std::mem::replace(&mut node.click_handlers, handlers);
        node.click_handlers.extend(added);
    }

    fn matches(&self, selector: &Selector) -> bool {
        let node = self.0.borrow();
        match selector {
            Selector::Id(id) => node.attributes.get("id").is_some_and(|v| v == id),
            Selector::Class(class) => node.classes.iter().any(|c| c == class),
            Selector::Tag(tag) => node.tag.eq_ignore_ascii_case(tag),
        }
    }

    fn find_descendant(&self, selector: &Selector) -> Option<Self> {
        let children = self.0.borrow().children.clone();
        children.into_iter().find_map(|child| {
            if child.matches(selector) {
                Some(child)
            } else {
                child.find_descendant(selector)
            }
        })
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .field("click_handlers", &node.click_handlers.len())
            .finish()
    }
}

impl DomElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ChromeError> {
        let mut node = self.0.borrow_mut();
        if name == "class" {
            node.classes.clear();
            for class in value.split_whitespace() {
                insert_class(&mut node.classes, class);
            }
        } else {
            node.attributes.insert(name.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) -> Result<(), ChromeError> {
        validate_token(class)?;
        insert_class(&mut self.0.borrow_mut().classes, class);
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), ChromeError> {
        validate_token(class)?;
        self.0.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> Result<bool, ChromeError> {
        if self.has_class(class) {
            self.remove_class(class)?;
            Ok(false)
        } else {
            self.add_class(class)?;
            Ok(true)
        }
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.find_descendant(&Selector::parse(selector)?)
    }

    fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), ChromeError> {
        let mut node = self.0.borrow_mut();
        if node.rejects_listeners {
            return Err(ChromeError::Dom("listener rejected".to_owned()));
        }
        node.click_handlers.push(handler);
        Ok(())
    }
}

/// In-memory document rooted at an `<html>` element with an empty `<body>`.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    root: MemoryElement,
    body: MemoryElement,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        let body = MemoryElement::new("body");
        let root = MemoryElement::new("html").with_child(body.clone());
        Self { root, body }
    }

    pub fn root_element(&self) -> &MemoryElement {
        &self.root
    }

    /// Append `child` to `<body>` and return it.
    pub fn append(&self, child: MemoryElement) -> MemoryElement {
        self.body.append_child(child.clone());
        child
    }
}

impl DomDocument for MemoryDocument {
    type Element = MemoryElement;

    fn root(&self) -> Option<MemoryElement> {
        Some(self.root.clone())
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let selector = Selector::Id(id.to_owned());
        if self.root.matches(&selector) {
            return Some(self.root.clone());
        }
        self.root.find_descendant(&selector)
    }

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        let selector = Selector::parse(selector)?;
        if self.root.matches(&selector) {
            return Some(self.root.clone());
        }
        self.root.find_descendant(&selector)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    /// Parse a single simple selector; anything richer is unsupported.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let parsed = if let Some(id) = raw.strip_prefix('#') {
            is_ident(id).then(|| Self::Id(id.to_owned()))
        } else if let Some(class) = raw.strip_prefix('.') {
            is_ident(class).then(|| Self::Class(class.to_owned()))
        } else {
            (is_ident(raw) && raw.chars().all(|c| c.is_ascii_alphanumeric())).then(|| Self::Tag(raw.to_owned()))
        };
        if parsed.is_none() {
            log::warn!("unsupported selector in memory document: {raw:?}");
        }
        parsed
    }
}

fn is_ident(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

fn insert_class(classes: &mut Vec<String>, class: &str) {
    if !classes.iter().any(|c| c == class) {
        classes.push(class.to_owned());
    }
}

// Mirrors DOMTokenList, which throws on empty or whitespace-bearing tokens.
fn validate_token(class: &str) -> Result<(), ChromeError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(ChromeError::Dom(format!("invalid class token: {class:?}")));
    }
    Ok(())
}
