//! Patina Theme System
//!
//! Theme standardization for the Patina editor toolkit: built-in presets,
//! partial user overrides, and a flat design-token projection for the
//! CSS-variable styling layer.
//!
//! # Overview
//!
//! Consumers hand this crate a theme source — nothing, a preset name, or a
//! partial override — and get back a complete, internally consistent theme
//! plus a deterministic content id:
//!
//! ```rust,ignore
//! use patina_theme::{standardize_theme, token_map, ThemeSource};
//!
//! // Resolve the active theme before first paint.
//! let source = ThemeSource::Preset("dark".into());
//! let standard = standardize_theme(Some(&source))?;
//!
//! // Register its token set with the styling engine, keyed by id.
//! let tokens = token_map(&standard.theme);
//! styling.register(&standard.id, tokens);
//! ```
//!
//! # Architecture
//!
//! Three pure stages, one-way data flow:
//!
//! - [`ThemePreset`]: static catalog of built-in themes (leaf).
//! - [`standardize_theme`]: merges an override onto the resolved preset,
//!   canonicalizes syntax shorthand, derives the content id.
//! - [`token_map`] / [`css_variable_map`]: projects a canonical theme into
//!   the flat token set the styling engine consumes.
//!
//! Everything is a synchronous function over immutable inputs; there is no
//! shared mutable state and calls are safe from any thread. Consumers may
//! memoize by [`StandardTheme::id`], this crate itself never caches.
//!
//! # Tokens
//!
//! - [`ColorTokens`]: UI color roles (text, backgrounds, accent, error)
//! - [`SyntaxTokens`]: highlighting roles, each a [`SyntaxStyle`]
//! - [`FontTokens`]: body/mono stacks, size, line height

pub mod error;
pub mod overrides;
pub mod presets;
pub mod standardize;
pub mod theme;
pub mod tokens;
pub mod variables;

// Re-export commonly used types
pub use error::ThemeError;
pub use overrides::{
    ColorOverrides, FontOverrides, SyntaxOverrides, SyntaxStyleInput, ThemeOverride, ThemeSource,
};
pub use presets::ThemePreset;
pub use standardize::{standardize_theme, theme_id};
pub use theme::{StandardTheme, Theme};
pub use tokens::*;
pub use variables::{css_variable_map, token_map, TokenMap, CSS_VARIABLE_PREFIX};
