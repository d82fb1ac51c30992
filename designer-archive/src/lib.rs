//! Archive protocol for the designer object broker.
//!
//! An [`Archive`] is an ordered bag of named, typed fields. It is both the seed
//! data handed to a create-from-archive factory and the output of encoding any
//! object or property. Field names may repeat; repeated fields are addressed by
//! index in insertion order.
//!
//! By convention the `class` field ([`CLASS_FIELD`]) carries the type name of
//! whatever was archived, which makes an archive self-describing enough to be
//! restored without knowing its type up front.
//!
//! The on-disk layout is not defined here. [`Archive::to_json`] and
//! [`Archive::from_json`] are provided for callers that want a portable text
//! form.

mod archive;
mod error;
mod value;

pub use archive::{Archive, Field};
pub use error::{DecodeError, DecodeResult};
pub use value::{ArchiveValue, ValueKind};

/// Name of the field holding an archive's type tag.
pub const CLASS_FIELD: &str = "class";
