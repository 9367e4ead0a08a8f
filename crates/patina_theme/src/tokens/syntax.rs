//! Syntax highlighting tokens for theming

use serde::{Deserialize, Serialize};

/// Syntax role token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SyntaxToken {
    Plain,
    Comment,
    Keyword,
    Tag,
    Punctuation,
    Definition,
    Property,
    Static,
    String,
}

impl SyntaxToken {
    /// Full token list, in emission order.
    pub fn all() -> &'static [SyntaxToken] {
        const TOKENS: [SyntaxToken; 9] = [
            SyntaxToken::Plain,
            SyntaxToken::Comment,
            SyntaxToken::Keyword,
            SyntaxToken::Tag,
            SyntaxToken::Punctuation,
            SyntaxToken::Definition,
            SyntaxToken::Property,
            SyntaxToken::Static,
            SyntaxToken::String,
        ];
        &TOKENS
    }

    /// Stable role name used in token maps and CSS variables.
    pub fn key(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Comment => "comment",
            Self::Keyword => "keyword",
            Self::Tag => "tag",
            Self::Punctuation => "punctuation",
            Self::Definition => "definition",
            Self::Property => "property",
            Self::Static => "static",
            Self::String => "string",
        }
    }
}

/// Font style applied to a syntax role. `Normal` is the "no style" form.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// CSS `font-style` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Canonical style for a single syntax role.
///
/// User input may abbreviate a role to a bare color string; normalization
/// expands every role to this form before it reaches any consumer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxStyle {
    pub color: String,
    pub font_style: FontStyle,
}

impl SyntaxStyle {
    /// Plain-styled color, the expansion of the shorthand form.
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            font_style: FontStyle::Normal,
        }
    }

    /// Italic variant of a color.
    pub fn italic(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            font_style: FontStyle::Italic,
        }
    }
}

/// Complete set of syntax highlighting tokens
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxTokens {
    pub plain: SyntaxStyle,
    pub comment: SyntaxStyle,
    pub keyword: SyntaxStyle,
    pub tag: SyntaxStyle,
    pub punctuation: SyntaxStyle,
    pub definition: SyntaxStyle,
    pub property: SyntaxStyle,
    #[serde(rename = "static")]
    pub static_: SyntaxStyle,
    pub string: SyntaxStyle,
}

impl SyntaxTokens {
    /// Get a style by token key
    pub fn get(&self, token: SyntaxToken) -> &SyntaxStyle {
        match token {
            SyntaxToken::Plain => &self.plain,
            SyntaxToken::Comment => &self.comment,
            SyntaxToken::Keyword => &self.keyword,
            SyntaxToken::Tag => &self.tag,
            SyntaxToken::Punctuation => &self.punctuation,
            SyntaxToken::Definition => &self.definition,
            SyntaxToken::Property => &self.property,
            SyntaxToken::Static => &self.static_,
            SyntaxToken::String => &self.string,
        }
    }
}
