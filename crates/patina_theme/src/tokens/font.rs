//! Font tokens for theming

use serde::{Deserialize, Serialize};

/// Font token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontToken {
    Body,
    Mono,
    Size,
    LineHeight,
}

impl FontToken {
    /// Full token list, in emission order.
    pub fn all() -> &'static [FontToken] {
        const TOKENS: [FontToken; 4] = [
            FontToken::Body,
            FontToken::Mono,
            FontToken::Size,
            FontToken::LineHeight,
        ];
        &TOKENS
    }

    /// Stable field name used in token maps and CSS variables.
    pub fn key(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Mono => "mono",
            Self::Size => "size",
            Self::LineHeight => "lineHeight",
        }
    }
}

/// Complete set of font tokens.
///
/// `body` and `mono` are font-family stacks; an empty string means "inherit"
/// and is passed through to the styling layer untouched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontTokens {
    pub body: String,
    pub mono: String,
    pub size: String,
    pub line_height: String,
}

impl FontTokens {
    /// Get a value by token key
    pub fn get(&self, token: FontToken) -> &str {
        match token {
            FontToken::Body => &self.body,
            FontToken::Mono => &self.mono,
            FontToken::Size => &self.size,
            FontToken::LineHeight => &self.line_height,
        }
    }
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            body: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif"
                .to_string(),
            mono: "\"SF Mono\", \"Fira Mono\", Menlo, Consolas, monospace".to_string(),
            size: "13px".to_string(),
            line_height: "1.4".to_string(),
        }
    }
}
