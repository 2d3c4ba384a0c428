//! Element ids, selectors, and storage names the controllers bind to.
//!
//! Every field has a default matching the stock page templates, so a page
//! only needs to override what differs. Overrides are JSON embedded in the
//! page under [`CONFIG_ELEMENT_ID`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::dom::{DomDocument, DomElement};
use crate::error::ChromeError;

pub const CONFIG_ELEMENT_ID: &str = "site-chrome-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_ICON_SELECTOR: &str = "i";
pub const DEFAULT_MOON_CLASS: &str = "fa-moon";
pub const DEFAULT_SUN_CLASS: &str = "fa-sun";
pub const DEFAULT_MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const DEFAULT_NAV_SELECTOR: &str = ".nav-links";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key holding the persisted preference.
    pub storage_key: String,
    /// Attribute set on the document root.
    pub attribute: String,
    /// Id of the toggle control.
    pub toggle_id: String,
    /// Selector for the icon, resolved inside the toggle control.
    pub icon_selector: String,
    pub moon_class: String,
    pub sun_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            icon_selector: DEFAULT_ICON_SELECTOR.to_owned(),
            moon_class: DEFAULT_MOON_CLASS.to_owned(),
            sun_class: DEFAULT_SUN_CLASS.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Id of the button that opens and closes the menu.
    pub button_id: String,
    /// Selector for the navigation container.
    pub nav_selector: String,
    /// Class marking the container as open.
    pub active_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            button_id: DEFAULT_MENU_BUTTON_ID.to_owned(),
            nav_selector: DEFAULT_NAV_SELECTOR.to_owned(),
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
        }
    }
}

impl MenuConfig {
    /// Class name targeted by `nav_selector`, when it is a plain `.class`.
    pub fn nav_class(&self) -> Option<&str> {
        self.nav_selector
            .strip_prefix('.')
            .filter(|class| !class.is_empty() && class.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'))
    }
}

impl ChromeConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed JSON or for values [`Self::validate`]
    /// rejects.
    pub fn from_json(raw: &str) -> Result<Self, ChromeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every class name is a single class token and every
    /// attribute and storage name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `Config` naming the first offending field.
    pub fn validate(&self) -> Result<(), ChromeError> {
        let classes = [
            ("theme.moon_class", &self.theme.moon_class),
            ("theme.sun_class", &self.theme.sun_class),
            ("menu.active_class", &self.menu.active_class),
        ];
        for (field, class) in classes {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(ChromeError::Config(format!("{field} is not a class token: {class:?}")));
            }
        }
        let names = [
            ("theme.storage_key", &self.theme.storage_key),
            ("theme.attribute", &self.theme.attribute),
            ("theme.toggle_id", &self.theme.toggle_id),
            ("theme.icon_selector", &self.theme.icon_selector),
            ("menu.button_id", &self.menu.button_id),
            ("menu.nav_selector", &self.menu.nav_selector),
        ];
        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(ChromeError::Config(format!("{field} is empty")));
            }
        }
        Ok(())
    }

    /// Load config from the page's embedded JSON block, if any.
    ///
    /// No block (or an empty one) yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Self::from_json`] for a non-empty block.
    pub fn from_document<D: DomDocument>(document: &D) -> Result<Self, ChromeError> {
        let raw = document
            .element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text())
            .unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }
}
