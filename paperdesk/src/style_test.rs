#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Display (CSS form)
// =============================================================

#[test]
fn whole_values_render_without_fraction() {
    let t = Transform::new(5.0, 10.0, 0.0);
    assert_eq!(t.to_string(), "translateX(5px) translateY(10px) rotateZ(0deg)");
}

#[test]
fn fractional_offsets_render_unrounded() {
    let t = Transform::new(0.5, -2.25, 90.0);
    assert_eq!(t.to_string(), "translateX(0.5px) translateY(-2.25px) rotateZ(90deg)");
}

#[test]
fn fractional_tilt_renders_unrounded() {
    let t = Transform::new(0.0, 0.0, 352.7);
    assert_eq!(t.to_string(), "translateX(0px) translateY(0px) rotateZ(352.7deg)");
}

#[test]
fn negative_offsets_keep_their_sign() {
    let t = Transform::new(-12.0, -0.5, 270.0);
    assert_eq!(t.to_string(), "translateX(-12px) translateY(-0.5px) rotateZ(270deg)");
}

// =============================================================
// Value semantics / serde
// =============================================================

#[test]
fn transform_equality() {
    assert_eq!(Transform::new(1.0, 2.0, 3.0), Transform::new(1.0, 2.0, 3.0));
    assert_ne!(Transform::new(1.0, 2.0, 3.0), Transform::new(1.0, 2.0, 4.0));
}

#[test]
fn transform_serde_round_trip() {
    let t = Transform::new(5.0, 10.0, 345.5);
    let json = serde_json::to_string(&t).unwrap();
    let back: Transform = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
