//! Type descriptors: a registered name plus its two factories.

use crate::object::Object;
use crate::registry::PropertyTypeRegistry;
use designer_archive::{Archive, DecodeError, DecodeResult};
use designer_property::Property;
use std::fmt;
use std::sync::Arc;

/// Builds a default instance.
pub type CreateDefault<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Builds an instance from a seed archive. Must fail as a whole on any decode
/// error rather than return a partially restored instance.
pub type CreateFromArchive<T> =
    Arc<dyn Fn(&Archive, &RestoreContext<'_>) -> DecodeResult<T> + Send + Sync>;

/// Descriptor of an object type.
pub type ObjectDescriptor = TypeDescriptor<Object>;

/// Descriptor of a property type.
pub type PropertyDescriptor = TypeDescriptor<Property>;

/// A registered type: its name, an optional human-friendly label and the
/// create-default / create-from-archive factory pair.
pub struct TypeDescriptor<T> {
    type_name: String,
    friendly_name: Option<String>,
    create_default: CreateDefault<T>,
    create_from_archive: CreateFromArchive<T>,
}

impl<T> TypeDescriptor<T> {
    pub fn new<D, A>(type_name: &str, create_default: D, create_from_archive: A) -> Self
    where
        D: Fn() -> T + Send + Sync + 'static,
        A: Fn(&Archive, &RestoreContext<'_>) -> DecodeResult<T> + Send + Sync + 'static,
    {
        Self {
            type_name: type_name.to_string(),
            friendly_name: None,
            create_default: Arc::new(create_default),
            create_from_archive: Arc::new(create_from_archive),
        }
    }

    #[must_use]
    pub fn with_friendly_name(mut self, friendly_name: &str) -> Self {
        self.friendly_name = Some(friendly_name.to_string());
        self
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    /// Runs the create-default factory.
    pub fn create_default(&self) -> T {
        (self.create_default)()
    }

    /// Runs the create-from-archive factory.
    pub fn create_from_archive(&self, archive: &Archive, ctx: &RestoreContext<'_>) -> DecodeResult<T> {
        (self.create_from_archive)(archive, ctx)
    }
}

impl TypeDescriptor<Object> {
    /// An object type whose archive factory starts from the defaults and
    /// decodes the archive into them.
    pub fn object<D>(type_name: &str, friendly_name: &str, create_default: D) -> Self
    where
        D: Fn() -> Object + Send + Sync + 'static,
    {
        let create_default = Arc::new(create_default);
        let defaults = Arc::clone(&create_default);
        Self {
            type_name: type_name.to_string(),
            friendly_name: Some(friendly_name.to_string()),
            create_default,
            create_from_archive: archive_factory(move |archive, ctx| {
                let mut object = defaults();
                object.decode_into(archive, ctx)?;
                Ok(object)
            }),
        }
    }
}

impl TypeDescriptor<Property> {
    /// A property type whose archive factory starts from the default property
    /// and decodes the archive into it. The default should carry `type_name`
    /// as its own type name so archived `class` tags line up.
    pub fn property<D>(type_name: &str, create_default: D) -> Self
    where
        D: Fn() -> Property + Send + Sync + 'static,
    {
        let create_default = Arc::new(create_default);
        let defaults = Arc::clone(&create_default);
        Self {
            type_name: type_name.to_string(),
            friendly_name: None,
            create_default,
            create_from_archive: archive_factory(move |archive, _ctx| {
                let mut property = defaults();
                property.decode_into(archive)?;
                Ok(property)
            }),
        }
    }
}

fn archive_factory<T, F>(factory: F) -> CreateFromArchive<T>
where
    F: Fn(&Archive, &RestoreContext<'_>) -> DecodeResult<T> + Send + Sync + 'static,
{
    Arc::new(factory)
}

impl<T> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            friendly_name: self.friendly_name.clone(),
            create_default: Arc::clone(&self.create_default),
            create_from_archive: Arc::clone(&self.create_from_archive),
        }
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("friendly_name", &self.friendly_name)
            .finish_non_exhaustive()
    }
}

/// What an archive factory can reach while restoring: the property registry,
/// so archived properties can be rebuilt from their `class` tag.
#[derive(Clone, Copy)]
pub struct RestoreContext<'a> {
    properties: &'a PropertyTypeRegistry,
}

impl<'a> RestoreContext<'a> {
    pub fn new(properties: &'a PropertyTypeRegistry) -> Self {
        Self { properties }
    }

    /// Rebuilds a property from its archive, resolving the factory by the
    /// archive's exact `class` tag.
    pub fn restore_property(&self, archive: &Archive) -> DecodeResult<Property> {
        let class = archive.find_class()?;
        let descriptor = self
            .properties
            .find_exact(class)
            .ok_or_else(|| DecodeError::UnknownType(class.to_string()))?;
        descriptor.create_from_archive(archive, self)
    }
}
