use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn from_str_accepts_known_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn from_str_rejects_unknown_values() {
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".into())));
    assert_eq!("".parse::<Theme>(), Err(UnknownTheme(String::new())));
}

#[test]
fn display_matches_as_str() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

#[test]
fn from_attribute_only_dark_reads_dark() {
    assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_attribute(None), Theme::Light);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

// =============================================================
// Icon
// =============================================================

#[test]
fn icon_follows_theme() {
    assert_eq!(Theme::Light.icon(), Icon::Moon);
    assert_eq!(Theme::Dark.icon(), Icon::Sun);
}

#[test]
fn icon_class_reads_config() {
    let config = ThemeConfig::default();
    assert_eq!(Icon::Moon.class(&config), "fa-moon");
    assert_eq!(Icon::Sun.class(&config), "fa-sun");
    assert_eq!(Icon::Sun.other(), Icon::Moon);
}
