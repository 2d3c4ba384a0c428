//! Theme toggle button.

use leptos::prelude::*;

use crate::config::ThemeConfig;

/// Button that flips between light and dark themes.
///
/// Renders the light-theme moon icon; the stored preference is restored
/// after mount.
#[component]
pub fn ThemeToggle(#[prop(optional)] config: Option<ThemeConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let id = config.toggle_id.clone();
    let icon_class = format!("fas {}", config.moon_class);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(document) = crate::browser::BrowserDocument::current() else {
                return;
            };
            if let Err(err) = crate::boot::attach_theme(&config, &document, crate::browser::LocalStorage) {
                log::warn!("theme toggle not bound: {err}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <button id=id class="theme-toggle" title="Toggle theme" aria-label="Toggle theme">
            <i class=icon_class></i>
        </button>
    }
}
