use crate::{Archive, DecodeError, DecodeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed archive value.
///
/// The `as_*` accessors take the field name only to build a useful
/// [`DecodeError`] when the value is of the wrong kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
    Blob(Vec<u8>),
    Archive(Archive),
}

/// The kind of an [`ArchiveValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Bool,
    Integer,
    Float,
    Blob,
    Archive,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Blob => "blob",
            ValueKind::Archive => "archive",
        };
        f.write_str(name)
    }
}

impl ArchiveValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            ArchiveValue::String(_) => ValueKind::String,
            ArchiveValue::Bool(_) => ValueKind::Bool,
            ArchiveValue::Integer(_) => ValueKind::Integer,
            ArchiveValue::Float(_) => ValueKind::Float,
            ArchiveValue::Blob(_) => ValueKind::Blob,
            ArchiveValue::Archive(_) => ValueKind::Archive,
        }
    }

    fn mismatch(&self, field: &str, expected: ValueKind) -> DecodeError {
        DecodeError::TypeMismatch {
            field: field.to_string(),
            expected,
            found: self.kind(),
        }
    }

    pub fn as_string(&self, field: &str) -> DecodeResult<&str> {
        match self {
            ArchiveValue::String(s) => Ok(s),
            other => Err(other.mismatch(field, ValueKind::String)),
        }
    }

    pub fn as_bool(&self, field: &str) -> DecodeResult<bool> {
        match self {
            ArchiveValue::Bool(b) => Ok(*b),
            other => Err(other.mismatch(field, ValueKind::Bool)),
        }
    }

    pub fn as_integer(&self, field: &str) -> DecodeResult<i64> {
        match self {
            ArchiveValue::Integer(i) => Ok(*i),
            other => Err(other.mismatch(field, ValueKind::Integer)),
        }
    }

    /// Reads a float. Integer fields are widened; nothing else is coerced.
    pub fn as_float(&self, field: &str) -> DecodeResult<f64> {
        match self {
            ArchiveValue::Float(f) => Ok(*f),
            ArchiveValue::Integer(i) => Ok(*i as f64),
            other => Err(other.mismatch(field, ValueKind::Float)),
        }
    }

    pub fn as_blob(&self, field: &str) -> DecodeResult<&[u8]> {
        match self {
            ArchiveValue::Blob(b) => Ok(b),
            other => Err(other.mismatch(field, ValueKind::Blob)),
        }
    }

    pub fn as_archive(&self, field: &str) -> DecodeResult<&Archive> {
        match self {
            ArchiveValue::Archive(a) => Ok(a),
            other => Err(other.mismatch(field, ValueKind::Archive)),
        }
    }
}

impl From<String> for ArchiveValue {
    fn from(v: String) -> Self {
        ArchiveValue::String(v)
    }
}

impl From<&str> for ArchiveValue {
    fn from(v: &str) -> Self {
        ArchiveValue::String(v.to_string())
    }
}

impl From<bool> for ArchiveValue {
    fn from(v: bool) -> Self {
        ArchiveValue::Bool(v)
    }
}

impl From<i64> for ArchiveValue {
    fn from(v: i64) -> Self {
        ArchiveValue::Integer(v)
    }
}

impl From<f64> for ArchiveValue {
    fn from(v: f64) -> Self {
        ArchiveValue::Float(v)
    }
}

impl From<Vec<u8>> for ArchiveValue {
    fn from(v: Vec<u8>) -> Self {
        ArchiveValue::Blob(v)
    }
}

impl From<Archive> for ArchiveValue {
    fn from(v: Archive) -> Self {
        ArchiveValue::Archive(v)
    }
}
