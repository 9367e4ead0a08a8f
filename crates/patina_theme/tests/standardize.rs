use patina_theme::{
    standardize_theme, FontStyle, SyntaxStyle, ThemeError, ThemeOverride, ThemePreset,
    ThemeSource,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn custom(value: serde_json::Value) -> ThemeSource {
    ThemeSource::from_value(value).expect("valid override shape")
}

#[test]
fn no_input_resolves_the_default_preset() {
    let standard = standardize_theme(None).unwrap();
    assert_eq!(standard.theme, ThemePreset::Light.theme());

    // Repeated calls agree on content and id.
    let again = standardize_theme(None).unwrap();
    assert_eq!(standard, again);
}

#[test]
fn named_preset_passes_through_unchanged() {
    let source = ThemeSource::Preset("dark".to_string());
    let standard = standardize_theme(Some(&source)).unwrap();

    let dark = ThemePreset::Dark.theme();
    assert_eq!(standard.theme.colors, dark.colors);
    assert_eq!(standard.theme.syntax, dark.syntax);
    assert_eq!(standard.theme.font, dark.font);
}

#[test]
fn unknown_preset_is_rejected() {
    let source = ThemeSource::Preset("no-such-theme".to_string());
    let err = standardize_theme(Some(&source)).unwrap_err();
    match err {
        ThemeError::UnknownPreset { name } => assert_eq!(name, "no-such-theme"),
        other => panic!("expected UnknownPreset, got {other:?}"),
    }
}

#[test]
fn shallow_override_touches_only_the_named_field() {
    let source = custom(json!({ "colors": { "accent": "blue" } }));
    let standard = standardize_theme(Some(&source)).unwrap();

    let base = ThemePreset::Light.theme();
    assert_eq!(standard.theme.colors.accent, "blue");

    // Everything else is drawn from the default preset.
    let mut expected = base;
    expected.colors.accent = "blue".to_string();
    assert_eq!(standard.theme, expected);
}

#[test]
fn id_is_deterministic_and_content_sensitive() {
    let source = custom(json!({ "colors": { "accent": "blue" } }));
    let first = standardize_theme(Some(&source)).unwrap();
    let second = standardize_theme(Some(&source)).unwrap();
    assert_eq!(first.id, second.id);

    let tweaked = custom(json!({ "colors": { "accent": "red" } }));
    let third = standardize_theme(Some(&tweaked)).unwrap();
    assert_ne!(first.id, third.id);
}

#[test]
fn syntax_shorthand_expands_to_canonical_form() {
    let source = custom(json!({
        "syntax": {
            "plain": "blue",
            "definition": { "color": "green", "fontStyle": "italic" },
            "keyword": { "color": "purple" },
        }
    }));
    let standard = standardize_theme(Some(&source)).unwrap();

    assert_eq!(standard.theme.syntax.plain, SyntaxStyle::color("blue"));
    assert_eq!(
        standard.theme.syntax.definition,
        SyntaxStyle::italic("green")
    );
    // Missing fontStyle defaults to normal.
    assert_eq!(
        standard.theme.syntax.keyword,
        SyntaxStyle::color("purple")
    );
    // Untouched roles keep the preset's canonical value.
    assert_eq!(
        standard.theme.syntax.comment,
        ThemePreset::Light.theme().syntax.comment
    );
}

#[test]
fn full_override_replaces_every_leaf() {
    let source = custom(json!({
        "colors": {
            "activeText": "red",
            "defaultText": "red",
            "inactiveText": "red",
            "activeBackground": "red",
            "defaultBackground": "red",
            "inputBackground": "red",
            "accent": "red",
            "errorBackground": "red",
            "errorForeground": "red",
        },
        "syntax": {
            "plain": "blue",
            "comment": "blue",
            "keyword": "blue",
            "tag": "blue",
            "punctuation": "blue",
            "definition": "blue",
            "property": "blue",
            "static": "blue",
            "string": "blue",
        },
        "font": {
            "body": "",
            "mono": "",
            "size": "14px",
            "lineHeight": "1.4",
        },
    }));
    let standard = standardize_theme(Some(&source)).unwrap();
    let theme = &standard.theme;

    let base = ThemePreset::Light.theme();
    assert_eq!(theme.colors.active_text, "red");
    assert_eq!(theme.colors.accent, "red");
    assert_eq!(theme.colors.error_foreground, "red");
    assert_ne!(theme.colors.accent, base.colors.accent);
    assert_ne!(theme.syntax.plain, base.syntax.plain);
    assert_eq!(theme.syntax.plain, SyntaxStyle::color("blue"));
    assert_eq!(theme.syntax.comment, SyntaxStyle::color("blue"));
    assert_eq!(theme.syntax.static_, SyntaxStyle::color("blue"));
    assert_eq!(theme.syntax.string, SyntaxStyle::color("blue"));
    assert_eq!(theme.font.body, "");
    assert_eq!(theme.font.mono, "");
    assert_eq!(theme.font.size, "14px");
    assert_eq!(theme.font.line_height, "1.4");
}

#[test]
fn standardizing_a_canonical_theme_is_idempotent() {
    let source = custom(json!({
        "colors": { "accent": "hotpink" },
        "syntax": { "comment": { "color": "gray", "fontStyle": "italic" } },
    }));
    let first = standardize_theme(Some(&source)).unwrap();

    // Feed the result back as a full override.
    let round_trip = ThemeSource::Custom(ThemeOverride::from(&first.theme));
    let second = standardize_theme(Some(&round_trip)).unwrap();

    assert_eq!(first.theme, second.theme);
    assert_eq!(first.id, second.id);
}

#[test]
fn non_object_non_string_input_is_rejected() {
    for value in [json!(42), json!(true), json!(null), json!(["dark"])] {
        let err = ThemeSource::from_value(value).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidOverrideShape { .. }));
    }
}

#[test]
fn malformed_syntax_role_is_rejected() {
    let err = ThemeSource::from_value(json!({ "syntax": { "plain": 42 } })).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidOverrideShape { .. }));

    // An object without a color field is neither accepted shape.
    let err =
        ThemeSource::from_value(json!({ "syntax": { "plain": { "fontStyle": "italic" } } }))
            .unwrap_err();
    assert!(matches!(err, ThemeError::InvalidOverrideShape { .. }));
}

#[test]
fn font_style_sentinel_is_normal() {
    assert_eq!(FontStyle::default(), FontStyle::Normal);
    assert_eq!(FontStyle::Normal.as_str(), "normal");
    assert_eq!(FontStyle::Italic.as_str(), "italic");
}
