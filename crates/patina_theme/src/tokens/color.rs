//! Color tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Text colors
    ActiveText,
    DefaultText,
    InactiveText,

    // Surface colors
    ActiveBackground,
    DefaultBackground,
    InputBackground,

    // Accent
    Accent,

    // Error colors
    ErrorBackground,
    ErrorForeground,
}

impl ColorToken {
    /// Full token list, in emission order.
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 9] = [
            ColorToken::ActiveText,
            ColorToken::DefaultText,
            ColorToken::InactiveText,
            ColorToken::ActiveBackground,
            ColorToken::DefaultBackground,
            ColorToken::InputBackground,
            ColorToken::Accent,
            ColorToken::ErrorBackground,
            ColorToken::ErrorForeground,
        ];
        &TOKENS
    }

    /// Stable role name used in token maps and CSS variables.
    pub fn key(self) -> &'static str {
        match self {
            Self::ActiveText => "activeText",
            Self::DefaultText => "defaultText",
            Self::InactiveText => "inactiveText",
            Self::ActiveBackground => "activeBackground",
            Self::DefaultBackground => "defaultBackground",
            Self::InputBackground => "inputBackground",
            Self::Accent => "accent",
            Self::ErrorBackground => "errorBackground",
            Self::ErrorForeground => "errorForeground",
        }
    }
}

/// Complete set of semantic color tokens.
///
/// Values are CSS color strings and are passed through to the styling layer
/// unchanged; this crate does not parse or validate color syntax.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    // Text colors
    pub active_text: String,
    pub default_text: String,
    pub inactive_text: String,

    // Surface colors
    pub active_background: String,
    pub default_background: String,
    pub input_background: String,

    // Accent
    pub accent: String,

    // Error colors
    pub error_background: String,
    pub error_foreground: String,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::ActiveText => &self.active_text,
            ColorToken::DefaultText => &self.default_text,
            ColorToken::InactiveText => &self.inactive_text,
            ColorToken::ActiveBackground => &self.active_background,
            ColorToken::DefaultBackground => &self.default_background,
            ColorToken::InputBackground => &self.input_background,
            ColorToken::Accent => &self.accent,
            ColorToken::ErrorBackground => &self.error_background,
            ColorToken::ErrorForeground => &self.error_foreground,
        }
    }
}
