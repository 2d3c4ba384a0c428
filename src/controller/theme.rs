//! Persisted light/dark theme toggle.
//!
//! Reads the user's preference from storage and mirrors it onto the root
//! theme attribute and the toggle icon. Toggle flips the displayed theme and
//! writes the new value back to storage.
//!
//! TRADE-OFFS
//! ==========
//! The root attribute, not storage, is the source of truth for the current
//! theme. Styling set by other code (or by a server-rendered attribute) is
//! therefore respected by the next toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::dom::{DomDocument, DomElement};
use crate::error::ChromeError;
use crate::store::PreferenceStore;
use crate::theme::{Icon, Theme};

#[derive(Clone, Debug)]
pub struct ThemeController<D, S> {
    config: ThemeConfig,
    document: D,
    store: S,
}

impl<D: DomDocument, S: PreferenceStore> ThemeController<D, S> {
    pub fn new(config: ThemeConfig, document: D, store: S) -> Self {
        Self { config, document, store }
    }

    /// The toggle control, if the page has one.
    pub fn control(&self) -> Option<D::Element> {
        self.document.element_by_id(&self.config.toggle_id)
    }

    /// The icon inside the toggle control, if both exist.
    pub fn icon(&self) -> Option<D::Element> {
        self.control()?.query(&self.config.icon_selector)
    }

    /// Read the persisted preference.
    ///
    /// A stored value that names no known theme is ignored.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the preference cannot be read.
    pub fn stored(&self) -> Result<Option<Theme>, ChromeError> {
        let Some(raw) = self.store.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                log::warn!("ignoring stored preference under {:?}: {err}", self.config.storage_key);
                Ok(None)
            }
        }
    }

    /// Restore the persisted preference onto the page.
    ///
    /// Returns the applied theme, or `None` when nothing valid was stored, in
    /// which case the page is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the preference cannot be read, or the
    /// error from [`Self::apply`].
    pub fn init(&self) -> Result<Option<Theme>, ChromeError> {
        let Some(theme) = self.stored()? else {
            return Ok(None);
        };
        self.apply(theme)?;
        log::info!("restored {theme} theme");
        Ok(Some(theme))
    }

    /// Theme currently displayed, per the root attribute.
    pub fn current(&self) -> Theme {
        let value = self.document.root().and_then(|root| root.attribute(&self.config.attribute));
        Theme::from_attribute(value.as_deref())
    }

    /// Show `theme` on the root attribute and the icon, without persisting.
    ///
    /// A failed icon update is logged and does not fail the call.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` without a document root, or `Dom` if the
    /// root attribute write is rejected.
    pub fn apply(&self, theme: Theme) -> Result<(), ChromeError> {
        self.set_root(theme)?;
        self.refresh_icon(theme);
        Ok(())
    }

    /// Flip the displayed theme and persist the result.
    ///
    /// Storage is written as soon as the root attribute changes, so the two
    /// agree even when the icon update fails.
    ///
    /// # Errors
    ///
    /// Returns the root attribute error (nothing is persisted then), or the
    /// store's error if the new value cannot be saved.
    pub fn toggle(&self) -> Result<Theme, ChromeError> {
        let next = self.current().toggled();
        self.set_root(next)?;
        self.store.set(&self.config.storage_key, next.as_str())?;
        self.refresh_icon(next);
        Ok(next)
    }

    fn set_root(&self, theme: Theme) -> Result<(), ChromeError> {
        let root = self.document.root().ok_or_else(|| ChromeError::not_found("html"))?;
        root.set_attribute(&self.config.attribute, theme.as_str())
    }

    fn refresh_icon(&self, theme: Theme) {
        let Some(icon) = self.icon() else {
            return;
        };
        if let Err(err) = self.show_icon(&icon, theme.icon()) {
            log::warn!("theme icon not updated: {err}");
        }
    }

    fn show_icon(&self, icon: &D::Element, glyph: Icon) -> Result<(), ChromeError> {
        icon.remove_class(glyph.other().class(&self.config))?;
        icon.add_class(glyph.class(&self.config))
    }
}
