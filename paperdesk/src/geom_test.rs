#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Point / Offset
// =============================================================

#[test]
fn point_default_is_origin() {
    let p = Point::default();
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn point_delta_from() {
    let d = pt(60.0, 65.0).delta_from(pt(50.0, 50.0));
    assert_eq!(d, Offset::new(10.0, 15.0));
}

#[test]
fn point_delta_from_is_signed() {
    let d = pt(55.0, 60.0).delta_from(pt(60.0, 65.0));
    assert_eq!(d, Offset::new(-5.0, -5.0));
}

#[test]
fn offset_zero() {
    assert_eq!(Offset::ZERO, Offset::new(0.0, 0.0));
}

#[test]
fn offset_accumulate() {
    let mut o = Offset::new(10.0, 15.0);
    o.accumulate(Offset::new(-5.0, -5.0));
    assert_eq!(o, Offset::new(5.0, 10.0));
}

#[test]
fn offset_accumulate_from_zero() {
    let mut o = Offset::ZERO;
    o.accumulate(Offset::new(1.5, -2.5));
    assert_eq!(o, Offset::new(1.5, -2.5));
}

// =============================================================
// anchor_angle_deg
// =============================================================

#[test]
fn angle_along_positive_x_is_zero() {
    assert_eq!(anchor_angle_deg(pt(0.0, 0.0), pt(100.0, 0.0)), Some(0.0));
}

#[test]
fn angle_along_positive_y_is_ninety() {
    assert_eq!(anchor_angle_deg(pt(0.0, 0.0), pt(0.0, 100.0)), Some(90.0));
}

#[test]
fn angle_along_negative_x_is_one_eighty() {
    assert_eq!(anchor_angle_deg(pt(0.0, 0.0), pt(-100.0, 0.0)), Some(180.0));
}

#[test]
fn angle_along_negative_y_wraps_to_two_seventy() {
    assert_eq!(anchor_angle_deg(pt(0.0, 0.0), pt(0.0, -100.0)), Some(270.0));
}

#[test]
fn angle_is_relative_to_the_anchor() {
    assert_eq!(anchor_angle_deg(pt(50.0, 50.0), pt(50.0, 120.0)), Some(90.0));
}

#[test]
fn angle_rounds_to_whole_degrees() {
    // atan2(1, 100) ≈ 0.573° → rounds to 1.
    assert_eq!(anchor_angle_deg(pt(0.0, 0.0), pt(100.0, 1.0)), Some(1.0));
}

#[test]
fn angle_of_coincident_points_is_undefined() {
    assert_eq!(anchor_angle_deg(pt(10.0, 20.0), pt(10.0, 20.0)), None);
}

#[test]
fn angle_is_always_in_range() {
    let anchor = pt(0.0, 0.0);
    let probes = [
        pt(3.0, 4.0),
        pt(-3.0, 4.0),
        pt(-3.0, -4.0),
        pt(3.0, -4.0),
        pt(1.0, 0.0),
        pt(0.0, -1.0),
    ];
    for probe in probes {
        let deg = anchor_angle_deg(anchor, probe).unwrap();
        assert!((0.0..360.0).contains(&deg), "angle {deg} out of range for {probe:?}");
        assert_eq!(deg, deg.round(), "angle {deg} not a whole degree");
    }
}

// =============================================================
// normalize_deg
// =============================================================

#[test]
fn normalize_passes_through_positive_angles() {
    assert_eq!(normalize_deg(45.0), 45.0);
}

#[test]
fn normalize_wraps_negative_angles() {
    assert_eq!(normalize_deg(-90.0), 270.0);
    assert_eq!(normalize_deg(-1.0), 359.0);
}

#[test]
fn normalize_rounds_before_wrapping() {
    assert_eq!(normalize_deg(-0.4), 0.0);
    assert_eq!(normalize_deg(89.6), 90.0);
}

#[test]
fn normalize_boundary_values() {
    assert_eq!(normalize_deg(0.0), 0.0);
    assert_eq!(normalize_deg(180.0), 180.0);
    assert_eq!(normalize_deg(-180.0), 180.0);
}
