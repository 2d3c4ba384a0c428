//! Wiring controllers onto a document at load time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both behaviors initialize independently: theme restore runs first, then
//! click handlers are registered on whichever triggers the page contains.
//! Handler failures are logged and swallowed; they only ever cost a missed
//! visual update.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::config::{ChromeConfig, MenuConfig, ThemeConfig};
use crate::controller::{MenuController, ThemeController};
use crate::dom::{DomDocument, DomElement};
use crate::error::ChromeError;
use crate::store::PreferenceStore;

/// Marker attribute set on a trigger once its click handler is registered.
pub const BOUND_ATTRIBUTE: &str = "data-chrome-bound";

/// Which click handlers an attach call registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    pub theme_toggle: bool,
    pub mobile_menu: bool,
}

/// Restore the theme and bind both toggles.
///
/// The two behaviors attach independently; a failure in one is logged and
/// reported as `false` in [`Bindings`] without affecting the other.
pub fn attach<D, S>(config: &ChromeConfig, document: &D, store: S) -> Bindings
where
    D: DomDocument,
    S: PreferenceStore + 'static,
{
    let theme_toggle = attach_theme(&config.theme, document, store).unwrap_or_else(|err| {
        log::warn!("theme toggle not bound: {err}");
        false
    });
    let mobile_menu = attach_menu(&config.menu, document).unwrap_or_else(|err| {
        log::warn!("menu toggle not bound: {err}");
        false
    });
    Bindings { theme_toggle, mobile_menu }
}

/// Restore the persisted theme and bind the theme toggle, if present.
///
/// Returns whether a handler was registered by this call. A failed restore
/// is logged and does not prevent binding.
///
/// # Errors
///
/// Returns `Dom` if the click listener or the bound marker is rejected.
pub fn attach_theme<D, S>(config: &ThemeConfig, document: &D, store: S) -> Result<bool, ChromeError>
where
    D: DomDocument,
    S: PreferenceStore + 'static,
{
    let controller = ThemeController::new(config.clone(), document.clone(), store);
    if let Err(err) = controller.init() {
        log::warn!("theme restore failed: {err}");
    }

    let Some(control) = controller.control() else {
        log::info!("no #{} on page; theme toggle not bound", config.toggle_id);
        return Ok(false);
    };
    bind_once(&control, move || match controller.toggle() {
        Ok(theme) => log::debug!("switched to {theme} theme"),
        Err(err) => log::warn!("theme toggle failed: {err}"),
    })
}

/// Bind the mobile menu button, if present.
///
/// The navigation container is resolved on each click.
///
/// # Errors
///
/// Returns `Dom` if the click listener or the bound marker is rejected.
pub fn attach_menu<D: DomDocument>(config: &MenuConfig, document: &D) -> Result<bool, ChromeError> {
    let controller = MenuController::new(config.clone(), document.clone());

    let Some(button) = controller.button() else {
        log::info!("no #{} on page; menu toggle not bound", config.button_id);
        return Ok(false);
    };
    bind_once(&button, move || match controller.toggle() {
        Ok(state) => log::debug!("menu {state:?}"),
        Err(err) => log::debug!("menu toggle skipped: {err}"),
    })
}

fn bind_once<E, F>(trigger: &E, handler: F) -> Result<bool, ChromeError>
where
    E: DomElement,
    F: FnMut() + 'static,
{
    if trigger.attribute(BOUND_ATTRIBUTE).is_some() {
        return Ok(false);
    }
    trigger.on_click(Box::new(handler))?;
    trigger.set_attribute(BOUND_ATTRIBUTE, "")?;
    Ok(true)
}
