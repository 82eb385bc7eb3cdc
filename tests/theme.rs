use ratatui::style::Color;
use timedock::theme::{resolve, ResolvedTheme, ThemeMode, ThemeTokens};

#[test]
fn test_absent_theme_resolves_light_defaults() {
    let resolved = resolve(None);
    assert_eq!(resolved.mode, ThemeMode::Light);
    assert_eq!(resolved.primary, Color::Rgb(246, 51, 102));
    assert_eq!(resolved.background, Color::Rgb(255, 255, 255));
    assert_eq!(resolved.paper, Color::Rgb(240, 242, 246));
    assert_eq!(resolved.text, Color::Rgb(38, 39, 48));
    assert_eq!(resolved.font, "Inter, system-ui, sans-serif");
}

#[test]
fn test_dark_base_resolves_dark_defaults() {
    let tokens = ThemeTokens {
        base: Some("dark".to_string()),
        ..Default::default()
    };
    let resolved = resolve(Some(&tokens));
    assert_eq!(resolved.mode, ThemeMode::Dark);
    assert_eq!(resolved.primary, Color::Rgb(246, 51, 102));
    assert_eq!(resolved.background, Color::Rgb(14, 17, 23));
    assert_eq!(resolved.paper, Color::Rgb(30, 30, 30));
    assert_eq!(resolved.text, Color::Rgb(250, 250, 250));
}

#[test]
fn test_any_other_base_is_light() {
    for base in ["light", "Dark", "solarized", ""] {
        let tokens = ThemeTokens {
            base: Some(base.to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(Some(&tokens)).mode, ThemeMode::Light, "base = {base:?}");
    }
}

#[test]
fn test_host_tokens_override_defaults() {
    let tokens = ThemeTokens {
        base: Some("dark".to_string()),
        primary_color: Some("#FF0000".to_string()),
        background_color: Some("#000000".to_string()),
        secondary_background_color: Some("#101010".to_string()),
        text_color: Some("#EEEEEE".to_string()),
        font: Some("monospace".to_string()),
    };
    let resolved = resolve(Some(&tokens));
    assert_eq!(resolved.primary, Color::Rgb(255, 0, 0));
    assert_eq!(resolved.background, Color::Rgb(0, 0, 0));
    assert_eq!(resolved.paper, Color::Rgb(16, 16, 16));
    assert_eq!(resolved.text, Color::Rgb(238, 238, 238));
    assert_eq!(resolved.font, "monospace");
}

#[test]
fn test_unparseable_tokens_fall_back() {
    let tokens = ThemeTokens {
        primary_color: Some("#zzz".to_string()),
        background_color: Some("ffffff".to_string()),
        text_color: Some("#12345".to_string()),
        ..Default::default()
    };
    let resolved = resolve(Some(&tokens));
    let defaults = resolve(None);
    assert_eq!(resolved.primary, defaults.primary);
    assert_eq!(resolved.background, defaults.background);
    assert_eq!(resolved.text, defaults.text);
}

#[test]
fn test_default_resolved_theme_matches_resolve_none() {
    assert_eq!(ResolvedTheme::default(), resolve(None));
}

#[test]
fn test_tokens_deserialize_camel_case() {
    let tokens: ThemeTokens = serde_json::from_str(
        r##"{
            "base": "dark",
            "primaryColor": "#FF4B4B",
            "secondaryBackgroundColor": "#262730",
            "textColor": "#FAFAFA"
        }"##,
    )
    .unwrap();
    assert_eq!(tokens.base.as_deref(), Some("dark"));
    assert_eq!(tokens.primary_color.as_deref(), Some("#FF4B4B"));
    assert_eq!(tokens.secondary_background_color.as_deref(), Some("#262730"));
    assert_eq!(tokens.text_color.as_deref(), Some("#FAFAFA"));
    assert_eq!(tokens.background_color, None);
    assert_eq!(tokens.font, None);
}
