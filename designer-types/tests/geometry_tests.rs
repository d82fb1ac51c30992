use designer_types::{approx_eq, approx_eq_f32, Color, Point, Rect, FLOAT_EPSILON};
use proptest::prelude::*;

// ── Epsilon ───────────────────────────────────────────────────────

#[test]
fn epsilon_is_documented_default() {
    assert_eq!(FLOAT_EPSILON, 1e-5);
}

#[test]
fn approx_eq_within_epsilon() {
    assert!(approx_eq(1.0, 1.0 + 5e-6));
    assert!(approx_eq(-3.25, -3.25));
}

#[test]
fn approx_eq_outside_epsilon() {
    assert!(!approx_eq(1.0, 1.001));
}

#[test]
fn approx_eq_nan_never_equal() {
    assert!(!approx_eq(f64::NAN, f64::NAN));
    assert!(!approx_eq_f32(f32::NAN, 0.0));
}

// ── Color ─────────────────────────────────────────────────────────

#[test]
fn rgb_is_opaque() {
    let c = Color::rgb(1, 2, 3);
    assert_eq!(c, Color::new(1, 2, 3, 255));
}

#[test]
fn color_display_is_hex() {
    assert_eq!(Color::new(255, 0, 16, 128).to_string(), "#ff001080");
}

#[test]
fn color_equality_is_exact() {
    assert_ne!(Color::rgb(10, 10, 10), Color::rgb(10, 10, 11));
}

// ── Rect ──────────────────────────────────────────────────────────

#[test]
fn rect_equality_tolerates_small_drift() {
    let a = Rect::new(1.0, 2.0, 3.0, 4.0);
    let b = Rect::new(1.000_001, 2.0, 3.0, 3.999_999);
    assert_eq!(a, b);
}

#[test]
fn rect_equality_rejects_large_drift() {
    assert_ne!(Rect::new(1.0, 2.0, 3.0, 4.0), Rect::new(1.0, 2.0, 3.0, 4.1));
}

// ── Point ─────────────────────────────────────────────────────────

#[test]
fn point_equality_tolerates_small_drift() {
    assert_eq!(Point::new(0.5, 0.25), Point::new(0.500_002, 0.25));
    assert_ne!(Point::new(0.5, 0.25), Point::new(0.6, 0.25));
}

proptest! {
    #[test]
    fn point_equality_is_reflexive(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
        let p = Point::new(x, y);
        prop_assert_eq!(p, p);
    }

    #[test]
    fn rect_equality_is_symmetric(
        l in -1.0e3f32..1.0e3,
        t in -1.0e3f32..1.0e3,
        w in 0.0f32..1.0e3,
        h in 0.0f32..1.0e3,
        drift in -1.0e-3f32..1.0e-3,
    ) {
        let a = Rect::new(l, t, l + w, t + h);
        let b = Rect::new(l + drift, t, l + w, t + h - drift);
        prop_assert_eq!(a == b, b == a);
    }
}
