//! Geometry and colour values.

use crate::approx_eq_f32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// An opaque colour.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// An axis-aligned rectangle given by its edges.
///
/// `PartialEq` is tolerant: edges are compared with [`crate::FLOAT_EPSILON`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        approx_eq_f32(self.left, other.left)
            && approx_eq_f32(self.top, other.top)
            && approx_eq_f32(self.right, other.right)
            && approx_eq_f32(self.bottom, other.bottom)
    }
}

/// A 2D point.
///
/// `PartialEq` is tolerant: coordinates are compared with [`crate::FLOAT_EPSILON`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq_f32(self.x, other.x) && approx_eq_f32(self.y, other.y)
    }
}
