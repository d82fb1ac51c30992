//! Names of the built-in property types.
//!
//! These are the type tags written into a property archive's `class` field
//! and the keys the broker's property registry is populated with.

pub const STRING_PROPERTY: &str = "StringProperty";
pub const BOOL_PROPERTY: &str = "BoolProperty";
pub const INT_PROPERTY: &str = "IntProperty";
pub const FLOAT_PROPERTY: &str = "FloatProperty";
pub const COLOR_PROPERTY: &str = "ColorProperty";
pub const RECT_PROPERTY: &str = "RectProperty";
pub const POINT_PROPERTY: &str = "PointProperty";
pub const REFERENCE_PROPERTY: &str = "ReferenceProperty";

/// All built-in property type names, in registration order.
pub const BUILTIN: [&str; 8] = [
    STRING_PROPERTY,
    BOOL_PROPERTY,
    INT_PROPERTY,
    FLOAT_PROPERTY,
    COLOR_PROPERTY,
    RECT_PROPERTY,
    POINT_PROPERTY,
    REFERENCE_PROPERTY,
];
