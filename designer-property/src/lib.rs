//! Property model for designer objects.
//!
//! - [`PropertyValue`]: the closed set of value variants a property can hold
//! - [`Property`]: a named, typed unit of state owned by an object (or free-standing)
//! - [`types`]: names of the built-in property types
//!
//! Every value and property encodes to and decodes from a
//! [`designer_archive::Archive`]. Nothing in this crate knows about
//! registries: a property's type name is plain data, set by whichever factory
//! built it.

mod error;
mod property;
pub mod types;
mod value;

pub use error::PropertyError;
pub use property::Property;
pub use value::PropertyValue;
