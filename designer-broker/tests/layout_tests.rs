mod common;

use common::box_broker;
use designer_broker::{
    Archive, Broker, DecodeError, Object, ObjectId, Property, PropertyValue, Rect, LAYOUT_CLASS,
};
use pretty_assertions::assert_eq;

#[test]
fn archive_objects_writes_layout() {
    let broker = Broker::with_builtins().unwrap();
    let window = broker.make_object("Window", None).unwrap();
    let button = broker.make_object("Button", None).unwrap();

    let layout = broker.archive_objects(&[window.clone(), button.clone()]);
    assert_eq!(layout.class(), Some(LAYOUT_CLASS));
    assert_eq!(layout.count("object"), 2);

    let entry = layout.get_at("object", 1).unwrap().as_archive("object").unwrap();
    assert_eq!(entry.class(), Some("Button"));
    assert_eq!(entry.find_integer("id").unwrap(), button.id().get() as i64);
}

#[test]
fn restore_objects_assigns_fresh_ids() {
    let broker = Broker::with_builtins().unwrap();
    let window = broker.make_object("Window", None).unwrap();
    window.set_property("title", "Preferences").unwrap();
    let layout = broker.archive_objects(&[window.clone()]);

    let restored = broker.restore_objects(&layout);
    assert_eq!(restored.len(), 1);
    assert_ne!(restored[0].id(), window.id());
    assert_eq!(restored[0].property_value("title"), Some("Preferences".into()));
}

#[test]
fn restore_objects_remaps_references() {
    let broker = box_broker();
    let target = broker.make_object("Box", None).unwrap();
    target.set_property("label", "Target").unwrap();
    let source = broker
        .register_object(
            Object::new("Box")
                .with_property(Property::string("label", "Source"))
                .with_property(Property::reference("buddy", target.id())),
        )
        .unwrap();

    // a reference leaving the layout stays as it was
    let outsider = ObjectId::new(9_999);
    source.insert_property(Property::reference("elsewhere", outsider));

    let layout = broker.archive_objects(&[target.clone(), source.clone()]);
    let restored = broker.restore_objects(&layout);
    assert_eq!(restored.len(), 2);

    let new_target = &restored[0];
    let new_source = &restored[1];
    assert_eq!(
        new_source.property_value("buddy"),
        Some(PropertyValue::Reference(new_target.id()))
    );
    assert_eq!(
        new_source.property_value("elsewhere"),
        Some(PropertyValue::Reference(outsider))
    );

    let resolved = broker
        .resolve_reference(&new_source.property_value("buddy").unwrap())
        .unwrap();
    assert_eq!(resolved.property_value("label"), Some("Target".into()));
}

#[test]
fn restore_objects_skips_bad_entries() {
    let broker = box_broker();
    let good = broker.make_object("Box", None).unwrap();

    let mut layout = broker.archive_objects(&[good.clone()]);
    layout.add("object", Archive::with_class("Gizmo"));
    layout.add("object", "not an archive");
    layout.add("object", Archive::new());

    let restored = broker.restore_objects(&layout);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].type_name(), "Box");
}

#[test]
fn restore_objects_survives_json() {
    let broker = Broker::with_builtins().unwrap();
    let list = broker.make_object("ListView", None).unwrap();
    list.set_property("selected_index", 4_i64).unwrap();
    let json = broker.archive_objects(&[list]).to_json().unwrap();

    let layout = Archive::from_json(&json).unwrap();
    let restored = broker.restore_objects(&layout);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].property_value("selected_index"), Some(4_i64.into()));
}

#[test]
fn restore_objects_after_shutdown_is_empty() {
    let broker = Broker::with_builtins().unwrap();
    let view = broker.make_object("View", None).unwrap();
    let layout = broker.archive_objects(&[view]);
    broker.shutdown();
    assert!(broker.restore_objects(&layout).is_empty());
}

#[test]
fn layout_with_infinite_frame_is_not_written_as_json() {
    let broker = Broker::with_builtins().unwrap();
    let view = broker.make_object("View", None).unwrap();
    view.set_property("frame", Rect::new(0.0, 0.0, f32::INFINITY, 10.0))
        .unwrap();

    let layout = broker.archive_objects(&[view.clone()]);
    assert!(matches!(
        layout.to_json(),
        Err(DecodeError::OutOfRange { ref field, .. }) if field == "right"
    ));

    view.set_property("frame", Rect::new(0.0, 0.0, f32::MAX, 10.0))
        .unwrap();
    let json = broker.archive_objects(&[view]).to_json().unwrap();
    let restored = broker.restore_objects(&Archive::from_json(&json).unwrap());
    assert_eq!(restored.len(), 1);
    assert_eq!(
        restored[0].property_value("frame"),
        Some(Rect::new(0.0, 0.0, f32::MAX, 10.0).into())
    );
}
