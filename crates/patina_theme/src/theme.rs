//! Canonical theme types

use serde::{Deserialize, Serialize};

use crate::tokens::{ColorTokens, FontTokens, SyntaxTokens};

/// A fully-populated theme in canonical form.
///
/// Every role is present and every syntax entry is in explicit
/// `{ color, fontStyle }` form. The type system enforces completeness:
/// a partially-populated theme is unrepresentable, so consumers of a
/// `Theme` never need to branch on missing roles.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ColorTokens,
    pub syntax: SyntaxTokens,
    pub font: FontTokens,
}

/// A standardized theme paired with its content-derived identity.
///
/// The id is a pure function of the theme content: two structurally equal
/// themes always carry the same id. Consumers use it as a memoization key,
/// e.g. to avoid re-registering a stylesheet for a theme already seen.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandardTheme {
    pub theme: Theme,
    pub id: String,
}
