//! Error types for archive decoding.

use crate::ValueKind;
use thiserror::Error;

/// An archive field could not be turned into the value a decoder asked for.
///
/// Factories that hit one of these must fail as a whole rather than hand back
/// a partially built instance.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required field is absent.
    #[error("missing archive field '{0}'")]
    MissingField(String),

    /// A field exists but holds a different kind of value.
    #[error("archive field '{field}' holds {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A numeric field is outside the range of the target type.
    #[error("archive field '{field}' value {value} is out of range")]
    OutOfRange { field: String, value: String },

    /// The archive's type tag names a different type than the decoder handles.
    #[error("archive is tagged '{found}', expected '{expected}'")]
    TagMismatch { expected: String, found: String },

    /// The archive's type tag names a type nobody registered.
    #[error("unknown archived type '{0}'")]
    UnknownType(String),

    /// The JSON rendition could not be read or written.
    #[error("archive json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for archive decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
