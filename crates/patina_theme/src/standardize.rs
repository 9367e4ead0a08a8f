//! Theme standardization.
//!
//! Turns any accepted input (nothing, a preset name, or a partial override)
//! into a complete canonical theme with a content-derived id. Pure: no
//! caching, no shared state, a fresh value per call.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::error::ThemeError;
use crate::overrides::{ThemeOverride, ThemeSource};
use crate::presets::ThemePreset;
use crate::theme::{StandardTheme, Theme};

/// Resolve and normalize a theme source.
///
/// - `None` resolves the default preset.
/// - A preset name resolves that preset verbatim (it is already canonical).
/// - An override merges onto the default preset, key by key; syntax roles
///   are canonicalized before being written.
///
/// Fails with [`ThemeError::UnknownPreset`] for an unrecognized name. Shape
/// errors in untyped input are caught earlier, by
/// [`ThemeSource::from_value`].
pub fn standardize_theme(source: Option<&ThemeSource>) -> Result<StandardTheme, ThemeError> {
    let theme = match source {
        None => ThemePreset::default().theme(),
        Some(ThemeSource::Preset(name)) => {
            let preset = ThemePreset::from_id(name)?;
            tracing::debug!(preset = preset.id(), "resolved named preset");
            preset.theme()
        }
        Some(ThemeSource::Custom(overrides)) => {
            merge_over(ThemePreset::default().theme(), overrides)
        }
    };

    let id = theme_id(&theme);
    Ok(StandardTheme { theme, id })
}

/// Merge an override onto a base theme, field by field.
fn merge_over(mut base: Theme, overrides: &ThemeOverride) -> Theme {
    if let Some(colors) = &overrides.colors {
        let out = &mut base.colors;
        if let Some(v) = &colors.active_text {
            out.active_text = v.clone();
        }
        if let Some(v) = &colors.default_text {
            out.default_text = v.clone();
        }
        if let Some(v) = &colors.inactive_text {
            out.inactive_text = v.clone();
        }
        if let Some(v) = &colors.active_background {
            out.active_background = v.clone();
        }
        if let Some(v) = &colors.default_background {
            out.default_background = v.clone();
        }
        if let Some(v) = &colors.input_background {
            out.input_background = v.clone();
        }
        if let Some(v) = &colors.accent {
            out.accent = v.clone();
        }
        if let Some(v) = &colors.error_background {
            out.error_background = v.clone();
        }
        if let Some(v) = &colors.error_foreground {
            out.error_foreground = v.clone();
        }
    }

    if let Some(syntax) = &overrides.syntax {
        let out = &mut base.syntax;
        if let Some(v) = &syntax.plain {
            out.plain = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.comment {
            out.comment = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.keyword {
            out.keyword = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.tag {
            out.tag = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.punctuation {
            out.punctuation = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.definition {
            out.definition = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.property {
            out.property = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.static_ {
            out.static_ = v.clone().canonicalize();
        }
        if let Some(v) = &syntax.string {
            out.string = v.clone().canonicalize();
        }
    }

    if let Some(font) = &overrides.font {
        let out = &mut base.font;
        if let Some(v) = &font.body {
            out.body = v.clone();
        }
        if let Some(v) = &font.mono {
            out.mono = v.clone();
        }
        if let Some(v) = &font.size {
            out.size = v.clone();
        }
        if let Some(v) = &font.line_height {
            out.line_height = v.clone();
        }
    }

    base
}

/// Content-derived theme identity: `pt-` plus 64 bits of hash over every
/// canonical field in declaration order.
///
/// Structurally equal themes always hash alike; the canonical form has a
/// fixed field order, so input key order cannot influence the result. The
/// exact digest is stable within a build but is not a compatibility surface.
pub fn theme_id(theme: &Theme) -> String {
    let mut hasher = FxHasher::default();

    let colors = &theme.colors;
    for field in [
        &colors.active_text,
        &colors.default_text,
        &colors.inactive_text,
        &colors.active_background,
        &colors.default_background,
        &colors.input_background,
        &colors.accent,
        &colors.error_background,
        &colors.error_foreground,
    ] {
        hash_field(&mut hasher, field);
    }

    let syntax = &theme.syntax;
    for style in [
        &syntax.plain,
        &syntax.comment,
        &syntax.keyword,
        &syntax.tag,
        &syntax.punctuation,
        &syntax.definition,
        &syntax.property,
        &syntax.static_,
        &syntax.string,
    ] {
        hash_field(&mut hasher, &style.color);
        hash_field(&mut hasher, style.font_style.as_str());
    }

    let font = &theme.font;
    for field in [&font.body, &font.mono, &font.size, &font.line_height] {
        hash_field(&mut hasher, field);
    }

    format!("pt-{:016x}", hasher.finish())
}

fn hash_field(hasher: &mut FxHasher, value: &str) {
    hasher.write(value.as_bytes());
    // Separator so adjacent fields cannot alias across their boundary.
    hasher.write_u8(0xff);
}
