use crate::{ArchiveValue, CLASS_FIELD, DecodeError, DecodeResult};
use serde::{Deserialize, Serialize};

/// One named field of an [`Archive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: ArchiveValue,
}

/// An ordered sequence of named, typed fields.
///
/// Insertion order is preserved and names may repeat. Lookups by name return
/// the first match; [`Archive::get_at`] and [`Archive::get_all`] reach the
/// others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    fields: Vec<Field>,
}

impl Archive {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an archive whose first field is the `class` tag.
    #[must_use]
    pub fn with_class(type_name: &str) -> Self {
        let mut archive = Self::new();
        archive.add(CLASS_FIELD, type_name);
        archive
    }

    /// Returns the `class` tag, if present and a string.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self.get(CLASS_FIELD) {
            Some(ArchiveValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the `class` tag or a decode error explaining why it is unusable.
    pub fn find_class(&self) -> DecodeResult<&str> {
        self.find_string(CLASS_FIELD)
    }

    /// Appends a field, keeping any existing fields of the same name.
    pub fn add(&mut self, name: &str, value: impl Into<ArchiveValue>) -> &mut Self {
        self.fields.push(Field {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Builder form of [`Archive::add`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ArchiveValue>) -> Self {
        self.add(name, value);
        self
    }

    /// Replaces the first field called `name`, or appends one.
    pub fn set(&mut self, name: &str, value: impl Into<ArchiveValue>) -> &mut Self {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    /// Removes every field called `name`, returning how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| f.name != name);
        before - self.fields.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArchiveValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// The `index`-th field called `name`.
    #[must_use]
    pub fn get_at(&self, name: &str, index: usize) -> Option<&ArchiveValue> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .nth(index)
            .map(|f| &f.value)
    }

    /// All fields called `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ArchiveValue> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.name == name)
            .map(|f| &f.value)
    }

    /// Number of fields called `name`.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.fields.iter().filter(|f| f.name == name).count()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn find(&self, name: &str) -> DecodeResult<&ArchiveValue> {
        self.get(name)
            .ok_or_else(|| DecodeError::MissingField(name.to_string()))
    }

    pub fn find_string(&self, name: &str) -> DecodeResult<&str> {
        self.find(name)?.as_string(name)
    }

    pub fn find_bool(&self, name: &str) -> DecodeResult<bool> {
        self.find(name)?.as_bool(name)
    }

    pub fn find_integer(&self, name: &str) -> DecodeResult<i64> {
        self.find(name)?.as_integer(name)
    }

    pub fn find_float(&self, name: &str) -> DecodeResult<f64> {
        self.find(name)?.as_float(name)
    }

    pub fn find_blob(&self, name: &str) -> DecodeResult<&[u8]> {
        self.find(name)?.as_blob(name)
    }

    pub fn find_archive(&self, name: &str) -> DecodeResult<&Archive> {
        self.find(name)?.as_archive(name)
    }

    /// Total number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Distinct field names in order of first appearance.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for field in &self.fields {
            if !names.contains(&field.name.as_str()) {
                names.push(&field.name);
            }
        }
        names
    }

    /// Renders the archive as compact JSON.
    ///
    /// JSON has no infinity or NaN, so a non-finite float anywhere in the
    /// archive is an [`DecodeError::OutOfRange`] rather than a `null` that
    /// [`Archive::from_json`] could not read back.
    pub fn to_json(&self) -> DecodeResult<String> {
        self.ensure_finite()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the archive as indented JSON. Same rules as [`Archive::to_json`].
    pub fn to_json_pretty(&self) -> DecodeResult<String> {
        self.ensure_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn ensure_finite(&self) -> DecodeResult<()> {
        for field in &self.fields {
            match &field.value {
                ArchiveValue::Float(f) if !f.is_finite() => {
                    return Err(DecodeError::OutOfRange {
                        field: field.name.clone(),
                        value: f.to_string(),
                    });
                }
                ArchiveValue::Archive(nested) => nested.ensure_finite()?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Parses an archive from its JSON rendition.
    pub fn from_json(json: &str) -> DecodeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<Field> for Archive {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
