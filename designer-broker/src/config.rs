//! Broker configuration, read from a TOML file such as:
//!
//! ```toml
//! register_builtin_objects = true
//! register_builtin_properties = true
//! disabled_types = ["ScrollBar"]
//! live_set_capacity = 64
//! ```

use crate::error::BrokerResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Settings applied when a [`crate::Broker`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Register the built-in object catalogue (`Window`, `Button`, ...).
    #[serde(default = "default_true")]
    pub register_builtin_objects: bool,
    /// Register the built-in property types (`StringProperty`, ...).
    #[serde(default = "default_true")]
    pub register_builtin_properties: bool,
    /// Built-in type names to leave out. Compared case-insensitively.
    #[serde(default)]
    pub disabled_types: Vec<String>,
    /// Initial capacity of the live-object index.
    #[serde(default = "default_live_set_capacity")]
    pub live_set_capacity: usize,
}

fn default_true() -> bool {
    true
}

fn default_live_set_capacity() -> usize {
    20
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            register_builtin_objects: true,
            register_builtin_properties: true,
            disabled_types: Vec::new(),
            live_set_capacity: default_live_set_capacity(),
        }
    }
}

impl BrokerConfig {
    /// A config that registers nothing; every type comes from the host.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            register_builtin_objects: false,
            register_builtin_properties: false,
            ..Self::default()
        }
    }

    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> BrokerResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a config file, reporting failures.
    pub fn try_load_from(path: impl AsRef<Path>) -> BrokerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads a config file, falling back to defaults with a warning when it is
    /// missing or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No broker config found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded broker config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load broker config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Whether `type_name` is listed in `disabled_types`.
    #[must_use]
    pub fn is_disabled(&self, type_name: &str) -> bool {
        self.disabled_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(type_name))
    }
}
