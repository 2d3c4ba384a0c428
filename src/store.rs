//! Persistent key-value preference storage.
//!
//! The browser implementation lives in `crate::browser` behind the `hydrate`
//! feature; [`MemoryStore`] covers native tests and server rendering.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ChromeError;

/// Durable string storage keyed by name.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChromeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ChromeError>;
}

/// Shared in-memory store. Clones see the same entries, so a store handed to
/// a fresh controller behaves like storage surviving a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChromeError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChromeError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
