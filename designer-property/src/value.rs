//! Property value variants and their archive form.
//!
//! Archive layout per variant:
//! - `String`, `Bool`, `Integer`, `Float`, `Reference`: a single `value` field
//! - `Color`: integer fields `red`, `green`, `blue`, `alpha`
//! - `Rect`: float fields `left`, `top`, `right`, `bottom`
//! - `Point`: float fields `x`, `y`
//!
//! Decoding overwrites only the fields present in the archive and either
//! applies all of them or none.

use designer_archive::{Archive, DecodeError, DecodeResult};
use designer_types::{approx_eq, Color, ObjectId, Point, Rect};

const VALUE: &str = "value";

/// The value held by a property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
    Color(Color),
    Rect(Rect),
    Point(Point),
    /// Another object, referred to by id rather than owned.
    Reference(ObjectId),
}

impl PropertyValue {
    /// Short lowercase name of the variant, used in error messages.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Float(_) => "float",
            PropertyValue::Color(_) => "color",
            PropertyValue::Rect(_) => "rect",
            PropertyValue::Point(_) => "point",
            PropertyValue::Reference(_) => "reference",
        }
    }

    /// True when both values are the same variant, regardless of payload.
    #[must_use]
    pub fn same_variant(&self, other: &PropertyValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Value equality.
    ///
    /// Exact for strings, bools, integers, colours and references. Floats,
    /// points and rects compare each component within
    /// [`designer_types::FLOAT_EPSILON`]. Different variants are never equal.
    #[must_use]
    pub fn equals(&self, other: &PropertyValue) -> bool {
        match (self, other) {
            (PropertyValue::String(a), PropertyValue::String(b)) => a == b,
            (PropertyValue::Bool(a), PropertyValue::Bool(b)) => a == b,
            (PropertyValue::Integer(a), PropertyValue::Integer(b)) => a == b,
            (PropertyValue::Float(a), PropertyValue::Float(b)) => approx_eq(*a, *b),
            (PropertyValue::Color(a), PropertyValue::Color(b)) => a == b,
            (PropertyValue::Rect(a), PropertyValue::Rect(b)) => a == b,
            (PropertyValue::Point(a), PropertyValue::Point(b)) => a == b,
            (PropertyValue::Reference(a), PropertyValue::Reference(b)) => a == b,
            _ => false,
        }
    }

    /// Encodes the value into a fresh archive.
    #[must_use]
    pub fn encode(&self) -> Archive {
        let mut archive = Archive::new();
        match self {
            PropertyValue::String(s) => {
                archive.add(VALUE, s.as_str());
            }
            PropertyValue::Bool(b) => {
                archive.add(VALUE, *b);
            }
            PropertyValue::Integer(i) => {
                archive.add(VALUE, *i);
            }
            PropertyValue::Float(f) => {
                archive.add(VALUE, *f);
            }
            PropertyValue::Color(c) => {
                archive
                    .add("red", i64::from(c.red))
                    .add("green", i64::from(c.green))
                    .add("blue", i64::from(c.blue))
                    .add("alpha", i64::from(c.alpha));
            }
            PropertyValue::Rect(r) => {
                archive
                    .add("left", f64::from(r.left))
                    .add("top", f64::from(r.top))
                    .add("right", f64::from(r.right))
                    .add("bottom", f64::from(r.bottom));
            }
            PropertyValue::Point(p) => {
                archive.add("x", f64::from(p.x)).add("y", f64::from(p.y));
            }
            PropertyValue::Reference(id) => {
                // ids never exceed i64::MAX in practice; saturate rather than wrap
                archive.add(VALUE, i64::try_from(id.get()).unwrap_or(i64::MAX));
            }
        }
        archive
    }

    /// Decodes `archive` into this value, keeping the variant.
    ///
    /// On error the value is left untouched.
    pub fn decode_into(&mut self, archive: &Archive) -> DecodeResult<()> {
        let mut next = self.clone();
        match &mut next {
            PropertyValue::String(s) => {
                if let Some(v) = archive.get(VALUE) {
                    *s = v.as_string(VALUE)?.to_string();
                }
            }
            PropertyValue::Bool(b) => {
                if let Some(v) = archive.get(VALUE) {
                    *b = v.as_bool(VALUE)?;
                }
            }
            PropertyValue::Integer(i) => {
                if let Some(v) = archive.get(VALUE) {
                    *i = v.as_integer(VALUE)?;
                }
            }
            PropertyValue::Float(f) => {
                if let Some(v) = archive.get(VALUE) {
                    *f = v.as_float(VALUE)?;
                }
            }
            PropertyValue::Color(c) => {
                read_channel(archive, "red", &mut c.red)?;
                read_channel(archive, "green", &mut c.green)?;
                read_channel(archive, "blue", &mut c.blue)?;
                read_channel(archive, "alpha", &mut c.alpha)?;
            }
            PropertyValue::Rect(r) => {
                read_f32(archive, "left", &mut r.left)?;
                read_f32(archive, "top", &mut r.top)?;
                read_f32(archive, "right", &mut r.right)?;
                read_f32(archive, "bottom", &mut r.bottom)?;
            }
            PropertyValue::Point(p) => {
                read_f32(archive, "x", &mut p.x)?;
                read_f32(archive, "y", &mut p.y)?;
            }
            PropertyValue::Reference(id) => {
                if let Some(v) = archive.get(VALUE) {
                    let raw = v.as_integer(VALUE)?;
                    let raw = u64::try_from(raw).map_err(|_| out_of_range(VALUE, raw))?;
                    *id = ObjectId::new(raw);
                }
            }
        }
        *self = next;
        Ok(())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            PropertyValue::Rect(r) => Some(*r),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_point(&self) -> Option<Point> {
        match self {
            PropertyValue::Point(p) => Some(*p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_reference(&self) -> Option<ObjectId> {
        match self {
            PropertyValue::Reference(id) => Some(*id),
            _ => None,
        }
    }
}

fn out_of_range(field: &str, value: impl ToString) -> DecodeError {
    DecodeError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn read_channel(archive: &Archive, field: &str, slot: &mut u8) -> DecodeResult<()> {
    if let Some(v) = archive.get(field) {
        let raw = v.as_integer(field)?;
        *slot = u8::try_from(raw).map_err(|_| out_of_range(field, raw))?;
    }
    Ok(())
}

fn read_f32(archive: &Archive, field: &str, slot: &mut f32) -> DecodeResult<()> {
    if let Some(v) = archive.get(field) {
        let raw = v.as_float(field)?;
        if raw.is_finite() && raw.abs() > f64::from(f32::MAX) {
            return Err(out_of_range(field, raw));
        }
        *slot = raw as f32;
    }
    Ok(())
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Integer(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<Color> for PropertyValue {
    fn from(v: Color) -> Self {
        PropertyValue::Color(v)
    }
}

impl From<Rect> for PropertyValue {
    fn from(v: Rect) -> Self {
        PropertyValue::Rect(v)
    }
}

impl From<Point> for PropertyValue {
    fn from(v: Point) -> Self {
        PropertyValue::Point(v)
    }
}

impl From<ObjectId> for PropertyValue {
    fn from(v: ObjectId) -> Self {
        PropertyValue::Reference(v)
    }
}
