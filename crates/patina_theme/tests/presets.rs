use patina_theme::{ColorToken, ThemeError, ThemePreset};
use pretty_assertions::assert_eq;

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["dark", "light"]);
}

#[test]
fn default_preset_is_light() {
    assert_eq!(ThemePreset::default(), ThemePreset::Light);
    assert_eq!(
        ThemePreset::default().theme(),
        ThemePreset::Light.theme()
    );
}

#[test]
fn presets_resolve_by_stable_id() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()).unwrap(), *preset);
    }
}

#[test]
fn unknown_preset_id_is_an_error() {
    let err = ThemePreset::from_id("no-such-theme").unwrap_err();
    match err {
        ThemeError::UnknownPreset { name } => assert_eq!(name, "no-such-theme"),
        other => panic!("expected UnknownPreset, got {other:?}"),
    }
}

#[test]
fn light_and_dark_have_distinct_backgrounds() {
    let light = ThemePreset::Light.theme();
    let dark = ThemePreset::Dark.theme();
    assert_ne!(
        light.colors.get(ColorToken::DefaultBackground),
        dark.colors.get(ColorToken::DefaultBackground)
    );
    assert_ne!(
        light.colors.get(ColorToken::ActiveText),
        dark.colors.get(ColorToken::ActiveText)
    );
}

#[test]
fn preset_theme_content_is_reproducible() {
    let a = ThemePreset::Dark.theme();
    let b = ThemePreset::Dark.theme();
    assert_eq!(a, b);
}
