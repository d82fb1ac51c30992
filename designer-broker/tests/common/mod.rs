//! Shared test helpers for broker tests.

#![allow(dead_code)]

use designer_broker::{
    Archive, Broker, BrokerConfig, DecodeResult, Object, ObjectDescriptor, Property,
    RestoreContext, TypeDescriptor,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The "Box" type: a single `label` property defaulting to "".
pub fn box_type() -> ObjectDescriptor {
    TypeDescriptor::object("Box", "Box", || {
        Object::new("Box").with_property(Property::string("label", ""))
    })
}

/// A broker with no built-in objects, only the built-in properties and `Box`.
pub fn box_broker() -> Broker {
    let config = BrokerConfig {
        register_builtin_objects: false,
        ..BrokerConfig::default()
    };
    Broker::builder(config)
        .unwrap()
        .register_object(box_type())
        .unwrap()
        .build()
}

/// Counts which factory of a type ran.
#[derive(Default)]
pub struct FactoryCalls {
    pub defaults: AtomicUsize,
    pub archives: AtomicUsize,
}

impl FactoryCalls {
    pub fn defaults(&self) -> usize {
        self.defaults.load(Ordering::SeqCst)
    }

    pub fn archives(&self) -> usize {
        self.archives.load(Ordering::SeqCst)
    }
}

/// An object type whose factories record their calls in `calls`.
pub fn counting_type(type_name: &'static str, calls: Arc<FactoryCalls>) -> ObjectDescriptor {
    let default_calls = Arc::clone(&calls);
    TypeDescriptor::new(
        type_name,
        move || {
            default_calls.defaults.fetch_add(1, Ordering::SeqCst);
            Object::new(type_name).with_property(Property::string("origin", "default"))
        },
        move |archive: &Archive, ctx: &RestoreContext<'_>| -> DecodeResult<Object> {
            calls.archives.fetch_add(1, Ordering::SeqCst);
            let mut object =
                Object::new(type_name).with_property(Property::string("origin", "archive"));
            object.decode_into(archive, ctx)?;
            Ok(object)
        },
    )
    .with_friendly_name("Counting")
}
