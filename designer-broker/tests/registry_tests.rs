use designer_broker::{
    builtins, BrokerError, Object, ObjectTypeRegistry, PropertyTypeRegistry, TypeDescriptor,
};

fn registry_with(names: &[&str]) -> ObjectTypeRegistry {
    let mut registry = ObjectTypeRegistry::new("object");
    for name in names {
        let type_name = name.to_string();
        registry
            .register(TypeDescriptor::object(name, name, move || Object::new(&type_name)))
            .unwrap();
    }
    registry
}

#[test]
fn new_registry_is_empty() {
    let registry = PropertyTypeRegistry::new("property");
    assert!(registry.is_empty());
    assert_eq!(registry.count(), 0);
    assert_eq!(registry.label(), "property");
    assert!(registry.get(0).is_none());
}

#[test]
fn lookup_ignores_ascii_case() {
    let registry = registry_with(&["Button", "Window"]);
    for name in ["Button", "button", "BUTTON", "bUtToN"] {
        assert_eq!(registry.lookup(name).unwrap().type_name(), "Button");
    }
    assert!(registry.lookup("Butto").is_none());
}

#[test]
fn find_exact_is_case_sensitive() {
    let registry = registry_with(&["Button"]);
    assert!(registry.find_exact("Button").is_some());
    assert!(registry.find_exact("button").is_none());
}

#[test]
fn register_rejects_case_insensitive_duplicate() {
    let mut registry = registry_with(&["ListView"]);
    let err = registry
        .register(TypeDescriptor::object("LISTVIEW", "List", || Object::new("LISTVIEW")))
        .unwrap_err();
    assert!(matches!(err, BrokerError::DuplicateType { .. }));
    assert_eq!(registry.count(), 1);
    assert_eq!(registry.name_at(0), Some("ListView"));
}

#[test]
fn register_rejects_blank_name() {
    let mut registry = ObjectTypeRegistry::new("object");
    for name in ["", "   "] {
        let err = registry
            .register(TypeDescriptor::object(name, "Nothing", || Object::new("")))
            .unwrap_err();
        assert!(matches!(err, BrokerError::InvalidTypeName { .. }));
    }
    assert!(registry.is_empty());
}

#[test]
fn order_is_registration_order() {
    let registry = registry_with(&["Zeta", "Alpha", "Mid"]);
    let names: Vec<&str> = registry.iter().map(|d| d.type_name()).collect();
    assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    assert_eq!(registry.name_at(1), Some("Alpha"));
    assert_eq!(registry.friendly_name_at(2), Some("Mid"));
    assert!(registry.name_at(3).is_none());
}

#[test]
fn descriptor_factories_build_instances() {
    let mut registry = PropertyTypeRegistry::new("property");
    for descriptor in builtins::property_types() {
        registry.register(descriptor).unwrap();
    }

    let descriptor = registry.lookup("colorproperty").unwrap();
    let property = descriptor.create_default();
    assert_eq!(property.type_name(), "ColorProperty");
    assert!(descriptor.friendly_name().is_none());
}

#[test]
fn descriptor_debug_names_type() {
    let descriptor = TypeDescriptor::object("Button", "Button", || Object::new("Button"));
    let debug = format!("{descriptor:?}");
    assert!(debug.contains("Button"));

    let copy = descriptor.clone();
    assert_eq!(copy.type_name(), descriptor.type_name());
}
