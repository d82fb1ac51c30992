//! Identifier types used throughout the designer core.
//!
//! Object ids are plain monotonically increasing integers handed out by the
//! broker's identity manager, not random UUIDs: they are only meaningful for
//! the lifetime of one process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a live object.
///
/// `0` is reserved and means "no object"; the identity manager starts
/// counting at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The "no object" id.
    pub const NONE: ObjectId = ObjectId(0);

    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// True for [`ObjectId::NONE`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True for any id other than [`ObjectId::NONE`].
    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for ObjectId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<ObjectId> for u64 {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
