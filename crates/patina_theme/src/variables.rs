//! Token map projection for CSS-variable-driven styling engines.
//!
//! A canonical theme projects to a flat, category-qualified map of string
//! values: one entry per color role, two per syntax role (color and font
//! style), one per font field. Pure and total: by the time a `Theme` exists,
//! every precondition already holds, so there is no error path here.

use indexmap::IndexMap;

use crate::theme::Theme;
use crate::tokens::{ColorToken, FontToken, SyntaxToken};

/// Flat token map keyed by `<category>-<role>` (and `-color`/`-fontStyle`
/// for syntax roles). Iteration order matches token declaration order.
pub type TokenMap = IndexMap<String, String>;

/// Prefix for generated CSS custom properties.
pub const CSS_VARIABLE_PREFIX: &str = "--patina-";

/// Project a canonical theme into a flat token map.
///
/// Values pass through unchanged; an empty font stack stays an empty string
/// and the consuming style engine interprets it as "inherit".
pub fn token_map(theme: &Theme) -> TokenMap {
    let mut tokens = TokenMap::with_capacity(
        ColorToken::all().len() + SyntaxToken::all().len() * 2 + FontToken::all().len(),
    );

    for token in ColorToken::all() {
        tokens.insert(
            format!("colors-{}", token.key()),
            theme.colors.get(*token).to_string(),
        );
    }

    for token in SyntaxToken::all() {
        let style = theme.syntax.get(*token);
        tokens.insert(format!("syntax-{}-color", token.key()), style.color.clone());
        tokens.insert(
            format!("syntax-{}-fontStyle", token.key()),
            style.font_style.as_str().to_string(),
        );
    }

    for token in FontToken::all() {
        tokens.insert(
            format!("font-{}", token.key()),
            theme.font.get(*token).to_string(),
        );
    }

    tokens
}

/// Generate a CSS custom-property map from a canonical theme.
///
/// Same projection as [`token_map`], with each key rendered as a
/// `--patina-*` variable name ready to be written into a stylesheet rule.
pub fn css_variable_map(theme: &Theme) -> TokenMap {
    token_map(theme)
        .into_iter()
        .map(|(key, value)| (format!("{CSS_VARIABLE_PREFIX}{key}"), value))
        .collect()
}
