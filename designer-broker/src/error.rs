//! Error types for the broker.

use designer_archive::DecodeError;
use thiserror::Error;

/// Broker errors.
///
/// Only the registration variants ever escape the broker's public
/// `make_*`/`find_*` surface, and only at start-up: everything else resolves
/// to "nothing created" there. The `try_*` entry points return the full error
/// for callers that want to know why.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// A type with this name (compared case-insensitively) is already registered.
    #[error("duplicate {registry} type '{type_name}'")]
    DuplicateType {
        registry: &'static str,
        type_name: String,
    },

    /// Type names must be non-empty.
    #[error("invalid {registry} type name '{type_name}'")]
    InvalidTypeName {
        registry: &'static str,
        type_name: String,
    },

    /// No type with this name is registered.
    #[error("unknown {registry} type '{type_name}'")]
    UnknownType {
        registry: &'static str,
        type_name: String,
    },

    /// A factory could not decode its seed archive.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The broker has shut down and no longer creates or resolves objects.
    #[error("object broker has shut down")]
    ShutDown,

    /// The configuration file is not valid TOML for [`crate::BrokerConfig`].
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for broker operations.
pub type BrokerResult<T> = Result<T, BrokerError>;
