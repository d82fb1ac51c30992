//! The broker facade.
//!
//! Composes the object and property type registries with the identity
//! manager. Callers create, restore and resolve objects by type name or id
//! without knowing any concrete type.
//!
//! Every "not found" condition resolves to `None` at this boundary; the
//! `try_*` variants return the underlying [`BrokerError`] instead.

use crate::builtins;
use crate::config::BrokerConfig;
use crate::descriptor::{ObjectDescriptor, PropertyDescriptor, RestoreContext};
use crate::error::{BrokerError, BrokerResult};
use crate::identity::IdentityManager;
use crate::object::{Object, ObjectRef};
use crate::registry::{ObjectTypeRegistry, PropertyTypeRegistry};
use designer_archive::Archive;
use designer_property::{Property, PropertyValue};
use designer_types::ObjectId;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// `class` tag of an archived set of objects (a designed layout).
pub const LAYOUT_CLASS: &str = "Layout";

/// Field of a layout archive holding one nested object archive per object.
const OBJECT_FIELD: &str = "object";

/// Field of a nested layout entry recording the id the object had when saved.
const SAVED_ID_FIELD: &str = "id";

// ================================================================
// Builder
// ================================================================

/// Collects type registrations before the broker exists.
///
/// Registration is only possible here, so the registries are fixed by the
/// time any caller can reach them.
#[derive(Debug)]
pub struct BrokerBuilder {
    config: BrokerConfig,
    objects: ObjectTypeRegistry,
    properties: PropertyTypeRegistry,
}

impl BrokerBuilder {
    fn new(config: BrokerConfig) -> BrokerResult<Self> {
        let mut builder = Self {
            config,
            objects: ObjectTypeRegistry::new("object"),
            properties: PropertyTypeRegistry::new("property"),
        };

        if builder.config.register_builtin_properties {
            for descriptor in builtins::property_types() {
                if builder.config.is_disabled(descriptor.type_name()) {
                    continue;
                }
                builder.properties.register(descriptor)?;
            }
        }
        if builder.config.register_builtin_objects {
            for descriptor in builtins::object_types() {
                if builder.config.is_disabled(descriptor.type_name()) {
                    continue;
                }
                builder.objects.register(descriptor)?;
            }
        }
        Ok(builder)
    }

    /// Registers an object type. A name clash is a start-up error.
    pub fn register_object(mut self, descriptor: ObjectDescriptor) -> BrokerResult<Self> {
        self.objects.register(descriptor)?;
        Ok(self)
    }

    /// Registers a property type. A name clash is a start-up error.
    pub fn register_property(mut self, descriptor: PropertyDescriptor) -> BrokerResult<Self> {
        self.properties.register(descriptor)?;
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Broker {
        info!(
            object_types = self.objects.count(),
            property_types = self.properties.count(),
            "Object broker ready"
        );
        Broker {
            identity: IdentityManager::with_capacity(self.config.live_set_capacity),
            config: self.config,
            objects: self.objects,
            properties: self.properties,
        }
    }
}

// ================================================================
// Broker
// ================================================================

/// The object broker.
///
/// Construct once, share (it is `Send + Sync`), shut down once. After
/// [`Broker::shutdown`] nothing is created or resolved any more and
/// unregistration is a no-op; dropping the broker shuts it down.
#[derive(Debug)]
pub struct Broker {
    config: BrokerConfig,
    objects: ObjectTypeRegistry,
    properties: PropertyTypeRegistry,
    identity: IdentityManager,
}

impl Broker {
    /// Starts a builder with the built-in types `config` asks for.
    pub fn builder(config: BrokerConfig) -> BrokerResult<BrokerBuilder> {
        BrokerBuilder::new(config)
    }

    /// A broker with exactly the built-in types `config` asks for.
    pub fn new(config: BrokerConfig) -> BrokerResult<Self> {
        Ok(Self::builder(config)?.build())
    }

    /// A broker with every built-in type.
    pub fn with_builtins() -> BrokerResult<Self> {
        Self::new(BrokerConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }

    #[must_use]
    pub fn identity(&self) -> &IdentityManager {
        &self.identity
    }

    fn restore_context(&self) -> RestoreContext<'_> {
        RestoreContext::new(&self.properties)
    }

    fn ensure_running(&self) -> BrokerResult<()> {
        if self.is_shut_down() {
            return Err(BrokerError::ShutDown);
        }
        Ok(())
    }

    // ================================================================
    // Creation
    // ================================================================

    /// Creates and registers an object of `type_name` (case-insensitive).
    ///
    /// With an archive the type's create-from-archive factory runs, otherwise
    /// its create-default factory. Returns `None` for unknown names, decode
    /// failures and after shutdown; no id is spent in any of those cases.
    pub fn make_object(&self, type_name: &str, archive: Option<&Archive>) -> Option<ObjectRef> {
        match self.try_make_object(type_name, archive) {
            Ok(object) => Some(object),
            Err(e) => {
                warn!(type_name, error = %e, "Object not created");
                None
            }
        }
    }

    /// [`Broker::make_object`], reporting why nothing was created.
    pub fn try_make_object(&self, type_name: &str, archive: Option<&Archive>) -> BrokerResult<ObjectRef> {
        self.ensure_running()?;
        let descriptor =
            self.objects
                .lookup(type_name)
                .ok_or_else(|| BrokerError::UnknownType {
                    registry: self.objects.label(),
                    type_name: type_name.to_string(),
                })?;

        let object = match archive {
            Some(archive) => descriptor.create_from_archive(archive, &self.restore_context())?,
            None => descriptor.create_default(),
        };
        Ok(self.register(object))
    }

    /// Creates a free-standing property of `type_name` (case-insensitive).
    /// Properties have no id and are never registered.
    pub fn make_property(&self, type_name: &str, archive: Option<&Archive>) -> Option<Property> {
        match self.try_make_property(type_name, archive) {
            Ok(property) => Some(property),
            Err(e) => {
                warn!(type_name, error = %e, "Property not created");
                None
            }
        }
    }

    /// [`Broker::make_property`], reporting why nothing was created.
    pub fn try_make_property(&self, type_name: &str, archive: Option<&Archive>) -> BrokerResult<Property> {
        let descriptor =
            self.properties
                .lookup(type_name)
                .ok_or_else(|| BrokerError::UnknownType {
                    registry: self.properties.label(),
                    type_name: type_name.to_string(),
                })?;

        Ok(match archive {
            Some(archive) => descriptor.create_from_archive(archive, &self.restore_context())?,
            None => descriptor.create_default(),
        })
    }

    /// Registers an object built outside the registries (or by a factory the
    /// caller ran directly). `None` after shutdown.
    pub fn register_object(&self, object: Object) -> Option<ObjectRef> {
        if self.is_shut_down() {
            return None;
        }
        Some(self.register(object))
    }

    fn register(&self, object: Object) -> ObjectRef {
        let object = self.identity.register(object);
        debug!(id = %object.id(), type_name = object.type_name(), "Object registered");
        object
    }

    /// Removes an object from the live set. Its owner drops it afterwards.
    /// No-op for unknown objects and after shutdown.
    pub fn unregister_object(&self, object: &Object) -> bool {
        self.identity.unregister(object)
    }

    /// A registered copy of `object` with a fresh id.
    pub fn duplicate_object(&self, object: &Object) -> Option<ObjectRef> {
        self.register_object(object.duplicate())
    }

    // ================================================================
    // Lookup
    // ================================================================

    /// Resolves an id to its live object. `ObjectId::NONE` never resolves.
    pub fn find_object(&self, id: ObjectId) -> Option<ObjectRef> {
        if self.is_shut_down() {
            return None;
        }
        self.identity.resolve(id)
    }

    /// Follows a reference property value to the object it names.
    pub fn resolve_reference(&self, value: &PropertyValue) -> Option<ObjectRef> {
        self.find_object(value.as_reference()?)
    }

    /// Exact (case-sensitive) object type lookup.
    #[must_use]
    pub fn find_type_descriptor(&self, type_name: &str) -> Option<&ObjectDescriptor> {
        self.objects.find_exact(type_name)
    }

    /// Exact (case-sensitive) property type lookup.
    #[must_use]
    pub fn find_property_descriptor(&self, type_name: &str) -> Option<&PropertyDescriptor> {
        self.properties.find_exact(type_name)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.identity.live_count()
    }

    #[must_use]
    pub fn live_ids(&self) -> Vec<ObjectId> {
        self.identity.live_ids()
    }

    // ================================================================
    // Enumeration
    // ================================================================

    #[must_use]
    pub fn count_types(&self) -> usize {
        self.objects.count()
    }

    #[must_use]
    pub fn type_at(&self, index: usize) -> Option<&str> {
        self.objects.name_at(index)
    }

    #[must_use]
    pub fn friendly_type_at(&self, index: usize) -> Option<&str> {
        self.objects.friendly_name_at(index)
    }

    #[must_use]
    pub fn count_properties(&self) -> usize {
        self.properties.count()
    }

    #[must_use]
    pub fn property_at(&self, index: usize) -> Option<&str> {
        self.properties.name_at(index)
    }

    #[must_use]
    pub fn object_types(&self) -> &ObjectTypeRegistry {
        &self.objects
    }

    #[must_use]
    pub fn property_types(&self) -> &PropertyTypeRegistry {
        &self.properties
    }

    // ================================================================
    // Archives
    // ================================================================

    /// Restores an archived object, resolving its factory by the archive's
    /// exact `class` tag.
    pub fn restore_object(&self, archive: &Archive) -> Option<ObjectRef> {
        match self.try_restore_object(archive) {
            Ok(object) => Some(object),
            Err(e) => {
                warn!(class = ?archive.class(), error = %e, "Object not restored");
                None
            }
        }
    }

    /// [`Broker::restore_object`], reporting why nothing was restored.
    pub fn try_restore_object(&self, archive: &Archive) -> BrokerResult<ObjectRef> {
        self.ensure_running()?;
        let class = archive.find_class()?;
        let descriptor =
            self.find_type_descriptor(class)
                .ok_or_else(|| BrokerError::UnknownType {
                    registry: self.objects.label(),
                    type_name: class.to_string(),
                })?;
        let object = descriptor.create_from_archive(archive, &self.restore_context())?;
        Ok(self.register(object))
    }

    /// Archives a set of objects as a layout. Each entry records the id the
    /// object had so references between them survive a reload.
    #[must_use]
    pub fn archive_objects(&self, objects: &[ObjectRef]) -> Archive {
        let mut layout = Archive::with_class(LAYOUT_CLASS);
        for object in objects {
            let saved_id = i64::try_from(object.id().get()).unwrap_or(i64::MAX);
            layout.add(OBJECT_FIELD, object.encode().with(SAVED_ID_FIELD, saved_id));
        }
        layout
    }

    /// Restores a layout archived by [`Broker::archive_objects`].
    ///
    /// Entries of unknown types or that fail to decode are skipped with a
    /// warning; a stale layout still loads whatever it can. Reference
    /// properties pointing at objects of the same layout are rewritten to the
    /// restored objects' new ids.
    pub fn restore_objects(&self, layout: &Archive) -> Vec<ObjectRef> {
        if self.is_shut_down() {
            return Vec::new();
        }

        let mut restored = Vec::new();
        let mut remap: HashMap<ObjectId, ObjectId> = HashMap::new();
        for entry in layout.get_all(OBJECT_FIELD) {
            let archive = match entry.as_archive(OBJECT_FIELD) {
                Ok(archive) => archive,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed layout entry");
                    continue;
                }
            };
            let Some(object) = self.restore_object(archive) else {
                continue;
            };
            if let Some(saved) = archive
                .get(SAVED_ID_FIELD)
                .and_then(|v| v.as_integer(SAVED_ID_FIELD).ok())
                .and_then(|raw| u64::try_from(raw).ok())
            {
                remap.insert(ObjectId::new(saved), object.id());
            }
            restored.push(object);
        }

        let rewritten: usize = restored
            .iter()
            .map(|object| object.remap_references(&remap))
            .sum();
        info!(
            objects = restored.len(),
            references = rewritten,
            "Layout restored"
        );
        restored
    }

    // ================================================================
    // Lifecycle
    // ================================================================

    /// Begins shutdown. Returns `true` for the call that actually shut the
    /// broker down; later calls do nothing.
    pub fn shutdown(&self) -> bool {
        let first = self.identity.begin_shutdown();
        if first {
            info!(live_objects = self.identity.live_count(), "Object broker shut down");
        }
        first
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.identity.is_quitting()
    }
}

impl Drop for Broker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
