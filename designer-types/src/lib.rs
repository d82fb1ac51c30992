//! Core type definitions for the designer object broker.
//!
//! This crate defines the small, dependency-free value types every other
//! designer crate builds on:
//! - [`ObjectId`]: process-unique object identifier (0 means "no object")
//! - [`Color`], [`Rect`], [`Point`]: geometry and colour values carried by properties
//! - [`FLOAT_EPSILON`]: the tolerance used when comparing floating point values
//!
//! Nothing here knows about archives, registries or concrete widget types.

mod geometry;
mod ids;

pub use geometry::{Color, Point, Rect};
pub use ids::ObjectId;

/// Tolerance for floating point equality.
///
/// Float, point and rect values go through text or binary archive forms that
/// may drop low-order bits, so two values whose components differ by at most
/// this much compare equal.
pub const FLOAT_EPSILON: f64 = 1e-5;

/// Compares two floats with [`FLOAT_EPSILON`] tolerance. NaN never compares equal.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_EPSILON
}

/// [`approx_eq`] for `f32` components.
#[must_use]
pub fn approx_eq_f32(a: f32, b: f32) -> bool {
    approx_eq(f64::from(a), f64::from(b))
}
