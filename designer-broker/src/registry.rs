//! Name → descriptor tables.
//!
//! A registry is populated once while the broker is being built and is
//! read-only afterwards, so it carries no lock. Iteration order is
//! registration order and stays stable for the life of the broker.

use crate::descriptor::TypeDescriptor;
use crate::error::{BrokerError, BrokerResult};
use crate::object::Object;
use designer_property::Property;
use tracing::debug;

/// Registry of object types.
pub type ObjectTypeRegistry = TypeRegistry<Object>;

/// Registry of property types.
pub type PropertyTypeRegistry = TypeRegistry<Property>;

/// An ordered table of type descriptors keyed by type name.
///
/// Type names are unique under ASCII case-insensitive comparison.
#[derive(Debug)]
pub struct TypeRegistry<T> {
    label: &'static str,
    descriptors: Vec<TypeDescriptor<T>>,
}

impl<T> TypeRegistry<T> {
    /// Creates an empty registry. `label` names the registry in errors and logs.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            descriptors: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Adds a descriptor. Fails if the name is empty or already taken
    /// (ignoring ASCII case).
    pub fn register(&mut self, descriptor: TypeDescriptor<T>) -> BrokerResult<()> {
        let type_name = descriptor.type_name();
        if type_name.trim().is_empty() {
            return Err(BrokerError::InvalidTypeName {
                registry: self.label,
                type_name: type_name.to_string(),
            });
        }
        if self.lookup(type_name).is_some() {
            return Err(BrokerError::DuplicateType {
                registry: self.label,
                type_name: type_name.to_string(),
            });
        }

        debug!(registry = self.label, type_name, "type registered");
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Case-insensitive lookup; first match wins.
    #[must_use]
    pub fn lookup(&self, type_name: &str) -> Option<&TypeDescriptor<T>> {
        self.descriptors
            .iter()
            .find(|d| d.type_name().eq_ignore_ascii_case(type_name))
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn find_exact(&self, type_name: &str) -> Option<&TypeDescriptor<T>> {
        self.descriptors.iter().find(|d| d.type_name() == type_name)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TypeDescriptor<T>> {
        self.descriptors.get(index)
    }

    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(TypeDescriptor::type_name)
    }

    #[must_use]
    pub fn friendly_name_at(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(TypeDescriptor::friendly_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor<T>> {
        self.descriptors.iter()
    }
}
