//! Per-sheet interaction state machine.
//!
//! A `SheetController` turns a stream of pointer events into an accumulated
//! translation and a rotation angle. It is pure state — no surface handle, no
//! clock, no randomness — so the whole gesture protocol is unit-testable.
//! The [`crate::desk::Desk`] owns one controller per sheet and applies
//! whatever transform a move event yields.

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;

use crate::consts::DEG_PER_TURN;
use crate::geom::{self, Offset, Point};
use crate::input::{Button, Gesture};
use crate::style::Transform;

/// Interaction state for one sheet.
///
/// Pointer tracking runs continuously: `pointer` and `velocity` update on
/// every move event even while idle (except during a spin, when both are
/// frozen so that ending the spin does not produce a translation jump).
/// The transform is only emitted mid-gesture.
#[derive(Debug, Clone)]
pub struct SheetController {
    gesture: Gesture,
    /// Pointer position captured at primary-button press; the pivot for
    /// angle computation. Deliberately NOT reset by a secondary-button
    /// press: a spin pivots around the last drag's press point, or around
    /// the origin if the sheet has never been dragged.
    anchor: Point,
    /// Latest known global pointer position.
    pointer: Point,
    /// Pointer position at the previous applied update.
    prev_pointer: Point,
    /// `pointer - prev_pointer` as of the last move event. Stale while
    /// idle, but never applied unless translating.
    velocity: Offset,
    rotation_deg: f64,
    translation: Offset,
}

impl SheetController {
    /// Create a controller whose sheet starts rotated by `tilt_deg`.
    ///
    /// The tilt is stored normalized into `[0, 360)` (so a −7.3° tilt
    /// becomes 352.7°) and keeps its fractional part until the first spin
    /// replaces it with a whole-degree angle.
    #[must_use]
    pub fn new(tilt_deg: f64) -> Self {
        Self {
            gesture: Gesture::Idle,
            anchor: Point::default(),
            pointer: Point::default(),
            prev_pointer: Point::default(),
            velocity: Offset::ZERO,
            rotation_deg: tilt_deg.rem_euclid(DEG_PER_TURN),
            translation: Offset::ZERO,
        }
    }

    // --- Queries ---

    /// The gesture currently in progress.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Current rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Accumulated translation in pixels.
    #[must_use]
    pub fn translation(&self) -> Offset {
        self.translation
    }

    /// The composed transform the sheet carries right now.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.translation.dx, self.translation.dy, self.rotation_deg)
    }

    // --- Events ---

    /// Feed a global pointer-move event.
    ///
    /// Returns the transform to write to the surface while a gesture is in
    /// progress, `None` while idle. While translating, the per-event
    /// displacement accumulates into the translation; while rotating, the
    /// pointer's direction from the anchor becomes the new rotation. A move
    /// landing exactly on the anchor mid-spin leaves the rotation unchanged
    /// (the direction is undefined there).
    pub fn pointer_move(&mut self, point: Point) -> Option<Transform> {
        if self.gesture.is_rotating() {
            if let Some(deg) = geom::anchor_angle_deg(self.anchor, point) {
                self.rotation_deg = deg;
            }
        } else {
            self.pointer = point;
            self.velocity = self.pointer.delta_from(self.prev_pointer);
        }

        if !self.gesture.is_active() {
            return None;
        }
        if self.gesture == Gesture::Translating {
            self.translation.accumulate(self.velocity);
        }
        self.prev_pointer = self.pointer;
        Some(self.transform())
    }

    /// Feed a button press on this sheet.
    ///
    /// Returns `true` when the press starts a gesture, in which case the
    /// caller promotes the sheet in the stacking order. A press while a
    /// gesture is already in progress is ignored entirely (no re-anchor, no
    /// mode change, no promotion), as is any button other than primary or
    /// secondary.
    pub fn pointer_down(&mut self, button: Button) -> bool {
        if self.gesture.is_active() {
            return false;
        }
        match button {
            Button::Primary => {
                self.gesture = Gesture::Translating;
                // Press point becomes the spin pivot and re-arms velocity
                // tracking so the first drag step starts from here.
                self.anchor = self.pointer;
                self.prev_pointer = self.pointer;
                true
            }
            Button::Secondary => {
                self.gesture = Gesture::Rotating;
                true
            }
            Button::Middle => false,
        }
    }

    /// Feed the global button release. Ends any gesture in place — no
    /// snapping or inertia. Safe to call with no gesture in progress.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

impl Default for SheetController {
    /// A controller with no initial tilt.
    fn default() -> Self {
        Self::new(0.0)
    }
}
