use thiserror::Error;

/// Errors from reading or writing properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// No property with this name exists on the object.
    #[error("property '{0}' not found")]
    NotFound(String),

    /// The new value is a different variant than the property holds.
    #[error("property '{property}' holds {expected} values, got {found}")]
    VariantMismatch {
        property: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The property does not accept writes through the inspector path.
    #[error("property '{0}' is read-only")]
    ReadOnly(String),
}
