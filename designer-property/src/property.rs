use crate::types;
use crate::{PropertyError, PropertyValue};
use designer_archive::{Archive, DecodeError, DecodeResult};
use designer_types::{Color, ObjectId, Point, Rect};

/// A named, typed unit of state.
///
/// The value variant is fixed when the property is built; [`Property::set_value`]
/// refuses values of another variant. The type name is whatever the factory
/// that built the property registered under, and is written as the archive's
/// `class` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    type_name: String,
    name: String,
    description: String,
    read_only: bool,
    value: PropertyValue,
}

impl Property {
    pub fn new(type_name: &str, name: &str, value: impl Into<PropertyValue>) -> Self {
        Self {
            type_name: type_name.to_string(),
            name: name.to_string(),
            description: String::new(),
            read_only: false,
            value: value.into(),
        }
    }

    pub fn string(name: &str, value: &str) -> Self {
        Self::new(types::STRING_PROPERTY, name, value)
    }

    pub fn bool(name: &str, value: bool) -> Self {
        Self::new(types::BOOL_PROPERTY, name, value)
    }

    pub fn integer(name: &str, value: i64) -> Self {
        Self::new(types::INT_PROPERTY, name, value)
    }

    pub fn float(name: &str, value: f64) -> Self {
        Self::new(types::FLOAT_PROPERTY, name, value)
    }

    pub fn color(name: &str, value: Color) -> Self {
        Self::new(types::COLOR_PROPERTY, name, value)
    }

    pub fn rect(name: &str, value: Rect) -> Self {
        Self::new(types::RECT_PROPERTY, name, value)
    }

    pub fn point(name: &str, value: Point) -> Self {
        Self::new(types::POINT_PROPERTY, name, value)
    }

    pub fn reference(name: &str, value: ObjectId) -> Self {
        Self::new(types::REFERENCE_PROPERTY, name, value)
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[must_use]
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Replaces the value. The new value must be the same variant and the
    /// property must not be read-only.
    pub fn set_value(&mut self, value: impl Into<PropertyValue>) -> Result<(), PropertyError> {
        if self.read_only {
            return Err(PropertyError::ReadOnly(self.name.clone()));
        }
        self.replace_value(value.into())
    }

    /// Like [`Property::set_value`] but ignores the read-only flag. Used when
    /// the owning object itself updates a property.
    pub fn replace_value(&mut self, value: PropertyValue) -> Result<(), PropertyError> {
        if !self.value.same_variant(&value) {
            return Err(PropertyError::VariantMismatch {
                property: self.name.clone(),
                expected: self.value.variant_name(),
                found: value.variant_name(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Encodes the property: `class`, `name`, `description`, `read_only`
    /// and the nested `value` archive.
    #[must_use]
    pub fn encode(&self) -> Archive {
        Archive::with_class(&self.type_name)
            .with("name", self.name.as_str())
            .with("description", self.description.as_str())
            .with("read_only", self.read_only)
            .with("value", self.value.encode())
    }

    /// Decodes `archive` into this property.
    ///
    /// A `class` tag, when present, must match this property's type name
    /// exactly. Fields absent from the archive keep their current values. On
    /// error the property is left untouched.
    pub fn decode_into(&mut self, archive: &Archive) -> DecodeResult<()> {
        if let Some(class) = archive.class() {
            if class != self.type_name {
                return Err(DecodeError::TagMismatch {
                    expected: self.type_name.clone(),
                    found: class.to_string(),
                });
            }
        }

        let mut value = self.value.clone();
        if let Some(nested) = archive.get("value") {
            value.decode_into(nested.as_archive("value")?)?;
        }
        let name = match archive.get("name") {
            Some(v) => Some(v.as_string("name")?.to_string()),
            None => None,
        };
        let description = match archive.get("description") {
            Some(v) => Some(v.as_string("description")?.to_string()),
            None => None,
        };
        let read_only = match archive.get("read_only") {
            Some(v) => Some(v.as_bool("read_only")?),
            None => None,
        };

        self.value = value;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(read_only) = read_only {
            self.read_only = read_only;
        }
        Ok(())
    }
}
