//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a standardized theme:
//! - Colors (UI color roles)
//! - Syntax (highlighting roles with color + font style)
//! - Font (families, size, line height)

mod color;
mod font;
mod syntax;

pub use color::*;
pub use font::*;
pub use syntax::*;
