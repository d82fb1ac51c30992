//! Runtime object/property broker.
//!
//! The broker lets a host application create, archive, restore and look up
//! domain objects purely by a type name known at runtime:
//! - [`TypeRegistry`]: name → [`TypeDescriptor`] tables for object and property types
//! - [`IdentityManager`]: hands out [`ObjectId`]s and tracks live objects by weak handle
//! - [`Object`]: a typed bag of named [`Property`] values
//! - [`Broker`]: the facade composing all of the above, built with [`BrokerBuilder`]
//! - [`BrokerConfig`]: which built-in types to register, read from TOML
//!
//! There is no process-wide instance. The host constructs one `Broker`, shares
//! it (typically as `Arc<Broker>`), and shuts it down once. Tests build as many
//! as they like.
//!
//! ```
//! use designer_broker::Broker;
//!
//! let broker = Broker::with_builtins().unwrap();
//! let button = broker.make_object("button", None).unwrap();
//! assert_eq!(button.type_name(), "Button");
//! assert!(broker.find_object(button.id()).is_some());
//! broker.unregister_object(&button);
//! assert!(broker.find_object(button.id()).is_none());
//! ```

mod broker;
pub mod builtins;
mod config;
mod descriptor;
mod error;
mod identity;
mod object;
mod registry;

pub use broker::{Broker, BrokerBuilder, LAYOUT_CLASS};
pub use config::BrokerConfig;
pub use descriptor::{
    CreateDefault, CreateFromArchive, ObjectDescriptor, PropertyDescriptor, RestoreContext,
    TypeDescriptor,
};
pub use error::{BrokerError, BrokerResult};
pub use identity::IdentityManager;
pub use object::{Object, ObjectRef};
pub use registry::{ObjectTypeRegistry, PropertyTypeRegistry, TypeRegistry};

pub use designer_archive::{Archive, ArchiveValue, DecodeError, DecodeResult};
pub use designer_property::{Property, PropertyError, PropertyValue};
pub use designer_types::{Color, ObjectId, Point, Rect};
