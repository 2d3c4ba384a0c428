//! Page behaviors driven by user clicks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns its config and a document handle and exposes plain
//! synchronous operations. Binding those operations to click events is done
//! separately in `crate::boot`, so the controllers stay callable from tests
//! and from Leptos components alike.

pub mod menu;
pub mod theme;

pub use menu::{MenuController, MenuState};
pub use theme::ThemeController;
