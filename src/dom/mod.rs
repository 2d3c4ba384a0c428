//! Minimal document capability used by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never touch `web_sys` directly. They read and write through
//! these traits so the same logic runs against the browser document
//! (`crate::browser`, hydrate only) and against [`memory::MemoryDocument`]
//! in native tests and server-side code.

pub mod memory;

use crate::error::ChromeError;

/// Click callback registered on an element.
pub type ClickHandler = Box<dyn FnMut()>;

/// Handle to one element. Clones refer to the same underlying element.
pub trait DomElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ChromeError>;

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<(), ChromeError>;
    fn remove_class(&self, class: &str) -> Result<(), ChromeError>;
    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> Result<bool, ChromeError>;

    /// First descendant matching `selector`.
    ///
    /// Callers should stick to single `#id`, `.class` or tag selectors;
    /// [`memory::MemoryDocument`] supports nothing richer.
    fn query(&self, selector: &str) -> Option<Self>;
    /// Text content, if the element has any.
    fn text(&self) -> Option<String>;

    /// Run `handler` on every click for the lifetime of the element.
    fn on_click(&self, handler: ClickHandler) -> Result<(), ChromeError>;
}

/// Handle to a document. Clones refer to the same document.
pub trait DomDocument: Clone + 'static {
    type Element: DomElement;

    /// The top-level element (`<html>`).
    fn root(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// First element matching `selector`, root included. Same selector
    /// subset as [`DomElement::query`].
    fn query(&self, selector: &str) -> Option<Self::Element>;
}
