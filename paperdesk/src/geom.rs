#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::DEG_PER_TURN;

/// A point in global pointer coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to this point.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Offset {
        Offset { dx: self.x - origin.x, dy: self.y - origin.y }
    }
}

/// A displacement between two points, or an accumulated offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    /// The zero displacement.
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Accumulate another displacement into this one.
    pub fn accumulate(&mut self, other: Offset) {
        self.dx += other.dx;
        self.dy += other.dy;
    }
}

/// Angle of the direction from `anchor` to `pointer`, in whole degrees
/// normalized to `[0, 360)`. Zero degrees points along +x, angles grow
/// toward +y.
///
/// Returns `None` when the two points coincide: the direction is undefined
/// and callers skip their rotation update for that event rather than
/// propagate a non-finite angle.
#[must_use]
pub fn anchor_angle_deg(anchor: Point, pointer: Point) -> Option<f64> {
    let dir = pointer.delta_from(anchor);
    if dir.dx == 0.0 && dir.dy == 0.0 {
        return None;
    }
    Some(normalize_deg(dir.dy.atan2(dir.dx).to_degrees()))
}

/// Normalize an angle from `atan2` range (−180..=180) to a whole number of
/// degrees in `[0, 360)`, rounding half-away-from-zero first.
#[must_use]
pub fn normalize_deg(deg: f64) -> f64 {
    (DEG_PER_TURN + deg.round()) % DEG_PER_TURN
}
