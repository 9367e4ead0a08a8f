use thiserror::Error;

/// Errors raised while standardizing a theme.
///
/// Both variants are caller errors, raised synchronously at the offending
/// call. Normalization either fully succeeds or fully fails; there is no
/// partial result and nothing to retry.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A string selector named a preset that is not in the built-in catalog.
    /// Surfaced to the caller, never silently defaulted.
    #[error("unknown theme preset `{name}`")]
    UnknownPreset { name: String },

    /// The override input had the wrong shape, e.g. a number where a preset
    /// name or override object was expected, or a syntax role that is
    /// neither a color string nor a `{ color, fontStyle }` object.
    #[error("invalid theme override: {reason}")]
    InvalidOverrideShape { reason: String },
}
