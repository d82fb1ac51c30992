//! Domain objects: a type name, an id and an ordered set of named properties.

use crate::descriptor::RestoreContext;
use designer_archive::{Archive, DecodeError, DecodeResult};
use designer_property::{Property, PropertyError, PropertyValue};
use designer_types::ObjectId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Archive field holding one nested property archive per property.
const PROPERTY_FIELD: &str = "property";

/// Shared handle to a registered object. The holder that received it from the
/// broker owns the object's lifetime.
pub type ObjectRef = Arc<Object>;

/// A unit of domain state the host tool manipulates.
///
/// Objects are built unregistered (id [`ObjectId::NONE`]) by a factory; the
/// identity manager assigns the id exactly once when it registers them.
/// Properties are exclusively owned and guarded by a per-object lock so a
/// registered object can be edited through a shared [`ObjectRef`].
#[derive(Debug)]
pub struct Object {
    id: ObjectId,
    type_name: String,
    properties: RwLock<Vec<Property>>,
}

impl Object {
    /// An unregistered object with no properties.
    pub fn new(type_name: &str) -> Self {
        Self {
            id: ObjectId::NONE,
            type_name: type_name.to_string(),
            properties: RwLock::new(Vec::new()),
        }
    }

    /// Adds a property, replacing any existing property of the same name in place.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        let properties = self
            .properties
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        upsert(properties, property);
        self
    }

    #[must_use]
    pub fn with_properties(self, properties: impl IntoIterator<Item = Property>) -> Self {
        properties
            .into_iter()
            .fold(self, |object, property| object.with_property(property))
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// True once the identity manager has assigned an id.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        debug_assert!(self.id.is_none(), "object id assigned twice");
        self.id = id;
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Property>> {
        self.properties.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Property>> {
        self.properties.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the named property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<Property> {
        self.read().iter().find(|p| p.name() == name).cloned()
    }

    /// A copy of the named property's value.
    #[must_use]
    pub fn property_value(&self, name: &str) -> Option<PropertyValue> {
        self.read()
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.value().clone())
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.read().iter().any(|p| p.name() == name)
    }

    /// Writes a property value the way an inspector would: the property must
    /// exist, accept writes and hold the same value variant.
    pub fn set_property(&self, name: &str, value: impl Into<PropertyValue>) -> Result<(), PropertyError> {
        let mut properties = self.write();
        let property = properties
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| PropertyError::NotFound(name.to_string()))?;
        property.set_value(value)
    }

    /// Adds a property, returning the one it replaced.
    pub fn insert_property(&self, property: Property) -> Option<Property> {
        upsert(&mut self.write(), property)
    }

    pub fn remove_property(&self, name: &str) -> Option<Property> {
        let mut properties = self.write();
        let index = properties.iter().position(|p| p.name() == name)?;
        Some(properties.remove(index))
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn property_at(&self, index: usize) -> Option<Property> {
        self.read().get(index).cloned()
    }

    #[must_use]
    pub fn property_names(&self) -> Vec<String> {
        self.read().iter().map(|p| p.name().to_string()).collect()
    }

    /// A snapshot of every property, in order.
    #[must_use]
    pub fn properties(&self) -> Vec<Property> {
        self.read().clone()
    }

    /// Encodes the object: its `class` tag followed by one nested `property`
    /// archive per property. The id is not part of the encoding.
    #[must_use]
    pub fn encode(&self) -> Archive {
        let mut archive = Archive::with_class(&self.type_name);
        for property in self.read().iter() {
            archive.add(PROPERTY_FIELD, property.encode());
        }
        archive
    }

    /// Decodes `archive` into this object.
    ///
    /// A `class` tag, when present, must name this object's type (ignoring
    /// ASCII case). Archived properties whose name matches an existing
    /// property decode into it; others are rebuilt through the property
    /// registry from their own `class` tag. Either every property applies or
    /// none does.
    pub fn decode_into(&mut self, archive: &Archive, ctx: &RestoreContext<'_>) -> DecodeResult<()> {
        if let Some(class) = archive.class() {
            if !class.eq_ignore_ascii_case(&self.type_name) {
                return Err(DecodeError::TagMismatch {
                    expected: self.type_name.clone(),
                    found: class.to_string(),
                });
            }
        }

        let properties = self
            .properties
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = properties.clone();
        for value in archive.get_all(PROPERTY_FIELD) {
            let nested = value.as_archive(PROPERTY_FIELD)?;
            let name = nested.find_string("name")?;
            match next.iter_mut().find(|p| p.name() == name) {
                Some(existing) => existing.decode_into(nested)?,
                None => next.push(ctx.restore_property(nested)?),
            }
        }
        *properties = next;
        Ok(())
    }

    /// An unregistered copy carrying the same type and properties.
    #[must_use]
    pub fn duplicate(&self) -> Object {
        Object {
            id: ObjectId::NONE,
            type_name: self.type_name.clone(),
            properties: RwLock::new(self.properties()),
        }
    }

    /// Rewrites reference properties whose target appears in `map`.
    /// Returns how many were rewritten.
    pub(crate) fn remap_references(&self, map: &HashMap<ObjectId, ObjectId>) -> usize {
        let mut rewritten = 0;
        for property in self.write().iter_mut() {
            let Some(old) = property.value().as_reference() else {
                continue;
            };
            if let Some(new) = map.get(&old) {
                if property.replace_value(PropertyValue::Reference(*new)).is_ok() {
                    rewritten += 1;
                }
            }
        }
        rewritten
    }
}

fn upsert(properties: &mut Vec<Property>, property: Property) -> Option<Property> {
    match properties.iter_mut().find(|p| p.name() == property.name()) {
        Some(slot) => Some(std::mem::replace(slot, property)),
        None => {
            properties.push(property);
            None
        }
    }
}
