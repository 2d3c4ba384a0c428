//! Mobile navigation menu toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::MenuConfig;
use crate::dom::{DomDocument, DomElement};
use crate::error::ChromeError;

/// Whether the navigation container is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[derive(Clone, Debug)]
pub struct MenuController<D> {
    config: MenuConfig,
    document: D,
}

impl<D: DomDocument> MenuController<D> {
    pub fn new(config: MenuConfig, document: D) -> Self {
        Self { config, document }
    }

    /// The menu button, if the page has one.
    pub fn button(&self) -> Option<D::Element> {
        self.document.element_by_id(&self.config.button_id)
    }

    /// The navigation container, if the page has one.
    pub fn nav(&self) -> Option<D::Element> {
        self.document.query(&self.config.nav_selector)
    }

    /// Current state, or `None` without a navigation container.
    pub fn state(&self) -> Option<MenuState> {
        self.nav()
            .map(|nav| MenuState::from_open(nav.has_class(&self.config.active_class)))
    }

    /// Open a closed menu or close an open one.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` when the page has no navigation container,
    /// or `Dom` if the class change is rejected.
    pub fn toggle(&self) -> Result<MenuState, ChromeError> {
        let nav = self
            .nav()
            .ok_or_else(|| ChromeError::not_found(self.config.nav_selector.as_str()))?;
        let open = nav.toggle_class(&self.config.active_class)?;
        Ok(MenuState::from_open(open))
    }
}
