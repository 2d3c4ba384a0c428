//! `web-sys` implementations of the document and storage traits.
//!
//! Only compiled with the `hydrate` feature. JS exceptions are mapped into
//! [`ChromeError`] using their debug rendering.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::dom::{ClickHandler, DomDocument, DomElement};
use crate::error::ChromeError;
use crate::store::PreferenceStore;

fn js_error(err: &JsValue) -> String {
    format!("{err:?}")
}

/// `window.localStorage`, resolved on each access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ChromeError> {
        let window = web_sys::window().ok_or(ChromeError::StorageUnavailable)?;
        window
            .local_storage()
            .map_err(|err| ChromeError::Storage(js_error(&err)))?
            .ok_or(ChromeError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ChromeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| ChromeError::Storage(js_error(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChromeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| ChromeError::Storage(js_error(&err)))
    }
}

#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    /// The document of the current window, if running in a page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl DomDocument for BrowserDocument {
    type Element = BrowserElement;

    fn root(&self) -> Option<BrowserElement> {
        self.document.document_element().map(BrowserElement::from)
    }

    fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement::from)
    }

    fn query(&self, selector: &str) -> Option<BrowserElement> {
        // An invalid selector throws; treat it as no match.
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(BrowserElement::from)
    }
}

#[derive(Clone, Debug)]
pub struct BrowserElement {
    element: web_sys::Element,
}

impl From<web_sys::Element> for BrowserElement {
    fn from(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl DomElement for BrowserElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ChromeError> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| ChromeError::Dom(js_error(&err)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), ChromeError> {
        self.element
            .class_list()
            .add_1(class)
            .map_err(|err| ChromeError::Dom(js_error(&err)))
    }

    fn remove_class(&self, class: &str) -> Result<(), ChromeError> {
        self.element
            .class_list()
            .remove_1(class)
            .map_err(|err| ChromeError::Dom(js_error(&err)))
    }

    fn toggle_class(&self, class: &str) -> Result<bool, ChromeError> {
        self.element
            .class_list()
            .toggle(class)
            .map_err(|err| ChromeError::Dom(js_error(&err)))
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.element.query_selector(selector).ok().flatten().map(Self::from)
    }

    fn text(&self) -> Option<String> {
        self.element.text_content()
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), ChromeError> {
        let cb = Closure::wrap(handler);
        self.element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|err| ChromeError::Dom(js_error(&err)))?;
        // Listeners live as long as the page.
        cb.forget();
        Ok(())
    }
}
