//! The built-in object catalogue and property types.
//!
//! Built-in objects are plain property bags: the catalogue only decides which
//! properties each type starts with. Widget behaviour lives with the host.

use crate::descriptor::{ObjectDescriptor, PropertyDescriptor, TypeDescriptor};
use crate::object::Object;
use designer_property::{types, Property};
use designer_types::{Color, ObjectId, Point, Rect};

pub const OBJECT: &str = "Object";
pub const WINDOW: &str = "Window";
pub const VIEW: &str = "View";
pub const BUTTON: &str = "Button";
pub const CHECK_BOX: &str = "CheckBox";
pub const BOX: &str = "Box";
pub const CONTROL: &str = "Control";
pub const SCROLL_BAR: &str = "ScrollBar";
pub const LIST_VIEW: &str = "ListView";
pub const TEXT_CONTROL: &str = "TextControl";

/// Default panel background.
pub const PANEL_COLOR: Color = Color::rgb(216, 216, 216);

fn view_properties(frame: Rect) -> Vec<Property> {
    vec![
        Property::string("name", ""),
        Property::rect("frame", frame),
        Property::bool("visible", true),
        Property::color("background", PANEL_COLOR),
    ]
}

fn control_properties(label: &str, frame: Rect) -> Vec<Property> {
    let mut properties = view_properties(frame);
    properties.extend([
        Property::string("label", label),
        Property::bool("enabled", true),
        Property::integer("value", 0),
    ]);
    properties
}

fn window() -> Object {
    Object::new(WINDOW).with_properties([
        Property::string("title", "Untitled"),
        Property::rect("frame", Rect::new(100.0, 100.0, 500.0, 400.0)),
        Property::bool("visible", false),
        Property::color("background", PANEL_COLOR),
    ])
}

fn view() -> Object {
    Object::new(VIEW).with_properties(view_properties(Rect::new(0.0, 0.0, 100.0, 100.0)))
}

fn control() -> Object {
    Object::new(CONTROL).with_properties(control_properties("", Rect::new(0.0, 0.0, 100.0, 25.0)))
}

fn button() -> Object {
    Object::new(BUTTON)
        .with_properties(control_properties("Button", Rect::new(0.0, 0.0, 75.0, 25.0)))
}

fn check_box() -> Object {
    Object::new(CHECK_BOX)
        .with_properties(control_properties("Checkbox", Rect::new(0.0, 0.0, 100.0, 20.0)))
}

fn group_box() -> Object {
    Object::new(BOX)
        .with_properties(view_properties(Rect::new(0.0, 0.0, 200.0, 150.0)))
        .with_property(Property::string("label", ""))
}

fn scroll_bar() -> Object {
    Object::new(SCROLL_BAR)
        .with_properties(view_properties(Rect::new(0.0, 0.0, 14.0, 100.0)))
        .with_properties([
            Property::integer("min", 0),
            Property::integer("max", 100),
            Property::integer("value", 0),
            Property::bool("horizontal", false),
        ])
}

fn list_view() -> Object {
    Object::new(LIST_VIEW)
        .with_properties(view_properties(Rect::new(0.0, 0.0, 150.0, 200.0)))
        .with_properties([
            Property::bool("multiple_selection", false),
            Property::integer("selected_index", -1),
        ])
}

fn text_control() -> Object {
    Object::new(TEXT_CONTROL)
        .with_properties(control_properties("", Rect::new(0.0, 0.0, 150.0, 25.0)))
        .with_property(Property::string("text", ""))
}

/// Built-in object types, in registration order.
#[must_use]
pub fn object_types() -> Vec<ObjectDescriptor> {
    vec![
        TypeDescriptor::object(OBJECT, "Generic Object", || Object::new(OBJECT)),
        TypeDescriptor::object(WINDOW, "Window", window),
        TypeDescriptor::object(VIEW, "View", view),
        TypeDescriptor::object(BUTTON, "Button", button),
        TypeDescriptor::object(CHECK_BOX, "Checkbox", check_box),
        TypeDescriptor::object(BOX, "Box", group_box),
        TypeDescriptor::object(CONTROL, "Generic Control", control),
        TypeDescriptor::object(SCROLL_BAR, "ScrollBar", scroll_bar),
        TypeDescriptor::object(LIST_VIEW, "List", list_view),
        TypeDescriptor::object(TEXT_CONTROL, "Text Control", text_control),
    ]
}

/// Built-in property types, in the order of [`types::BUILTIN`].
#[must_use]
pub fn property_types() -> Vec<PropertyDescriptor> {
    vec![
        TypeDescriptor::property(types::STRING_PROPERTY, || Property::string("", "")),
        TypeDescriptor::property(types::BOOL_PROPERTY, || Property::bool("", false)),
        TypeDescriptor::property(types::INT_PROPERTY, || Property::integer("", 0)),
        TypeDescriptor::property(types::FLOAT_PROPERTY, || Property::float("", 0.0)),
        TypeDescriptor::property(types::COLOR_PROPERTY, || {
            Property::color("", Color::BLACK)
        }),
        TypeDescriptor::property(types::RECT_PROPERTY, || {
            Property::rect("", Rect::default())
        }),
        TypeDescriptor::property(types::POINT_PROPERTY, || {
            Property::point("", Point::default())
        }),
        TypeDescriptor::property(types::REFERENCE_PROPERTY, || {
            Property::reference("", ObjectId::NONE)
        }),
    ]
}
