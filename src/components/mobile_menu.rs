//! Mobile menu button and the navigation container it opens.

use leptos::prelude::*;

use crate::config::{DEFAULT_NAV_SELECTOR, MenuConfig};

#[component]
pub fn MobileMenuButton(#[prop(optional)] config: Option<MenuConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let id = config.button_id.clone();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(document) = crate::browser::BrowserDocument::current() else {
                return;
            };
            if let Err(err) = crate::boot::attach_menu(&config, &document) {
                log::warn!("menu toggle not bound: {err}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <button id=id class="mobile-menu-btn" aria-label="Toggle navigation">
            <i class="fas fa-bars"></i>
        </button>
    }
}

/// Navigation container toggled by [`MobileMenuButton`].
///
/// Renders with the class `nav_selector` targets; selectors that are not a
/// plain `.class` fall back to the default container class.
#[component]
pub fn NavLinks(#[prop(optional)] config: Option<MenuConfig>, children: Children) -> impl IntoView {
    let config = config.unwrap_or_default();
    let class = config
        .nav_class()
        .unwrap_or(&DEFAULT_NAV_SELECTOR[1..])
        .to_owned();

    view! { <ul class=class>{children()}</ul> }
}
