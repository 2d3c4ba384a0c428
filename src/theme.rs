//! Light/dark theme values and the icon glyph derived from them.
//!
//! DESIGN
//! ======
//! The theme is a strict two-state value. Everything the page shows for it
//! (root attribute, icon class) is derived from a `Theme`, never stored
//! alongside it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;

/// Visual theme selected for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the root attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme. Applying twice returns the original value.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown while this theme is active.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Light => Icon::Moon,
            Self::Dark => Icon::Sun,
        }
    }

    /// Resolve the theme currently displayed from the root attribute value.
    ///
    /// Only an exact `"dark"` reads as dark; an unset or unknown attribute is
    /// the default light styling.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored value names no known theme.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Two-valued status glyph on the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Moon,
    Sun,
}

impl Icon {
    /// CSS class that renders this glyph.
    #[must_use]
    pub fn class(self, config: &ThemeConfig) -> &str {
        match self {
            Self::Moon => &config.moon_class,
            Self::Sun => &config.sun_class,
        }
    }

    /// The glyph this one replaces.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Moon => Self::Sun,
            Self::Sun => Self::Moon,
        }
    }
}
