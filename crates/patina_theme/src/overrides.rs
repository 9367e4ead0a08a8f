//! Partial theme input shapes.
//!
//! Every field of an override is optional at every level: absence at a path
//! means "inherit from the base preset at that exact path", never "inherit
//! the whole subtree". Merging happens key-by-key at the `colors`, `syntax`
//! and `font` grouping level and one level below; there is no deeper nesting.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ThemeError;
use crate::theme::Theme;
use crate::tokens::{FontStyle, SyntaxStyle};

/// Source of a theme: a preset name, or a partial override of the default
/// preset. This is the polymorphic input accepted by
/// [`standardize_theme`](crate::standardize_theme).
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ThemeSource {
    /// A built-in preset selector, e.g. `"dark"`.
    Preset(String),
    /// A partial theme merged onto the default preset.
    Custom(ThemeOverride),
}

impl ThemeSource {
    /// Ingest an untyped value (e.g. straight out of a JSON config).
    ///
    /// Shape errors surface here, at the boundary, so nothing downstream
    /// ever sees a malformed override.
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        match value {
            Value::String(name) => Ok(Self::Preset(name)),
            value @ Value::Object(_) => serde_json::from_value::<ThemeOverride>(value)
                .map(Self::Custom)
                .map_err(|err| ThemeError::InvalidOverrideShape {
                    reason: err.to_string(),
                }),
            other => Err(ThemeError::InvalidOverrideShape {
                reason: format!(
                    "expected a preset name or an override object, got {}",
                    value_kind(&other)
                ),
            }),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A partial, user-supplied theme fragment.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverride {
    pub colors: Option<ColorOverrides>,
    pub syntax: Option<SyntaxOverrides>,
    pub font: Option<FontOverrides>,
}

/// Per-role color overrides.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOverrides {
    pub active_text: Option<String>,
    pub default_text: Option<String>,
    pub inactive_text: Option<String>,
    pub active_background: Option<String>,
    pub default_background: Option<String>,
    pub input_background: Option<String>,
    pub accent: Option<String>,
    pub error_background: Option<String>,
    pub error_foreground: Option<String>,
}

/// Per-role syntax overrides. Each role accepts either input shape.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxOverrides {
    pub plain: Option<SyntaxStyleInput>,
    pub comment: Option<SyntaxStyleInput>,
    pub keyword: Option<SyntaxStyleInput>,
    pub tag: Option<SyntaxStyleInput>,
    pub punctuation: Option<SyntaxStyleInput>,
    pub definition: Option<SyntaxStyleInput>,
    pub property: Option<SyntaxStyleInput>,
    #[serde(rename = "static")]
    pub static_: Option<SyntaxStyleInput>,
    pub string: Option<SyntaxStyleInput>,
}

/// Per-field font overrides.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOverrides {
    pub body: Option<String>,
    pub mono: Option<String>,
    pub size: Option<String>,
    pub line_height: Option<String>,
}

/// A syntax role as supplied by the user: either a bare color string or an
/// explicit `{ color, fontStyle }` object with the style optional.
///
/// Canonicalized on ingestion; no internal component ever branches on the
/// shorthand form again.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SyntaxStyleInput {
    /// Shorthand: a bare color, styled as `normal`.
    Shorthand(String),
    /// Explicit color and optional font style.
    #[serde(rename_all = "camelCase")]
    Explicit {
        color: String,
        #[serde(default)]
        font_style: FontStyle,
    },
}

impl SyntaxStyleInput {
    /// Expand to the canonical form.
    pub fn canonicalize(self) -> SyntaxStyle {
        match self {
            Self::Shorthand(color) => SyntaxStyle::color(color),
            Self::Explicit { color, font_style } => SyntaxStyle { color, font_style },
        }
    }
}

impl From<&SyntaxStyle> for SyntaxStyleInput {
    fn from(style: &SyntaxStyle) -> Self {
        Self::Explicit {
            color: style.color.clone(),
            font_style: style.font_style,
        }
    }
}

impl From<&Theme> for ThemeOverride {
    /// Express a complete theme as an override that supplies every leaf.
    /// Standardizing the result reproduces the theme (and its id) exactly.
    fn from(theme: &Theme) -> Self {
        Self {
            colors: Some(ColorOverrides {
                active_text: Some(theme.colors.active_text.clone()),
                default_text: Some(theme.colors.default_text.clone()),
                inactive_text: Some(theme.colors.inactive_text.clone()),
                active_background: Some(theme.colors.active_background.clone()),
                default_background: Some(theme.colors.default_background.clone()),
                input_background: Some(theme.colors.input_background.clone()),
                accent: Some(theme.colors.accent.clone()),
                error_background: Some(theme.colors.error_background.clone()),
                error_foreground: Some(theme.colors.error_foreground.clone()),
            }),
            syntax: Some(SyntaxOverrides {
                plain: Some((&theme.syntax.plain).into()),
                comment: Some((&theme.syntax.comment).into()),
                keyword: Some((&theme.syntax.keyword).into()),
                tag: Some((&theme.syntax.tag).into()),
                punctuation: Some((&theme.syntax.punctuation).into()),
                definition: Some((&theme.syntax.definition).into()),
                property: Some((&theme.syntax.property).into()),
                static_: Some((&theme.syntax.static_).into()),
                string: Some((&theme.syntax.string).into()),
            }),
            font: Some(FontOverrides {
                body: Some(theme.font.body.clone()),
                mono: Some(theme.font.mono.clone()),
                size: Some(theme.font.size.clone()),
                line_height: Some(theme.font.line_height.clone()),
            }),
        }
    }
}
