//! Leptos components rendering the chrome markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the same ids and classes static templates use and, once
//! mounted in the browser, bind the shared controllers through `crate::boot`.
//! On the server they render markup only.

pub mod mobile_menu;
pub mod theme_toggle;

pub use mobile_menu::{MobileMenuButton, NavLinks};
pub use theme_toggle::ThemeToggle;
