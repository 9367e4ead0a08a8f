//! Built-in theme presets.
//!
//! The light preset is drawn from the GitHub Primer palette and the dark
//! preset from Atom One Dark; both ship complete, already-canonical themes.
//! The catalog is process-wide read-only state: preset names are part of the
//! public interface and consumers may rely on them as string literals.

use std::fmt::{Display, Formatter};

use crate::error::ThemeError;
use crate::theme::Theme;
use crate::tokens::{ColorTokens, FontTokens, SyntaxStyle, SyntaxTokens};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Light preset, the default base for overrides.
    #[default]
    Light,
    /// Dark preset.
    Dark,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];
        &PRESETS
    }

    /// Look up a preset by its stable id. Unrecognized names are an error,
    /// never a silent fallback to the default.
    pub fn from_id(name: &str) -> Result<Self, ThemeError> {
        ThemePreset::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == name)
            .ok_or_else(|| ThemeError::UnknownPreset {
                name: name.to_string(),
            })
    }

    /// Build the preset's canonical theme. Every call returns a fresh value.
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => light(),
            Self::Dark => dark(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn light() -> Theme {
    Theme {
        colors: ColorTokens {
            active_text: "#24292e".to_string(),
            default_text: "#6a737d".to_string(),
            inactive_text: "#e1e4e8".to_string(),
            active_background: "#f6f8fa".to_string(),
            default_background: "#ffffff".to_string(),
            input_background: "#ffffff".to_string(),
            accent: "#0366d6".to_string(),
            error_background: "#ffeef0".to_string(),
            error_foreground: "#cb2431".to_string(),
        },
        syntax: SyntaxTokens {
            plain: SyntaxStyle::color("#24292e"),
            comment: SyntaxStyle::italic("#6a737d"),
            keyword: SyntaxStyle::color("#d73a49"),
            tag: SyntaxStyle::color("#22863a"),
            punctuation: SyntaxStyle::color("#24292e"),
            definition: SyntaxStyle::color("#6f42c1"),
            property: SyntaxStyle::color("#005cc5"),
            static_: SyntaxStyle::color("#e36209"),
            string: SyntaxStyle::color("#032f62"),
        },
        font: FontTokens::default(),
    }
}

fn dark() -> Theme {
    Theme {
        colors: ColorTokens {
            active_text: "#abb2bf".to_string(),
            default_text: "#5c6370".to_string(),
            inactive_text: "#3e4451".to_string(),
            active_background: "#2c313a".to_string(),
            default_background: "#282c34".to_string(),
            input_background: "#21252b".to_string(),
            accent: "#61afef".to_string(),
            error_background: "#392a2d".to_string(),
            error_foreground: "#e06c75".to_string(),
        },
        syntax: SyntaxTokens {
            plain: SyntaxStyle::color("#abb2bf"),
            comment: SyntaxStyle::italic("#5c6370"),
            keyword: SyntaxStyle::color("#c678dd"),
            tag: SyntaxStyle::color("#e06c75"),
            punctuation: SyntaxStyle::color("#abb2bf"),
            definition: SyntaxStyle::color("#61afef"),
            property: SyntaxStyle::color("#d19a66"),
            static_: SyntaxStyle::color("#56b6c2"),
            string: SyntaxStyle::color("#98c379"),
        },
        font: FontTokens::default(),
    }
}
