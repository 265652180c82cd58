//! Input model: pointer buttons, replayable pointer events, and the gesture
//! state machine.
//!
//! `Button` and `PointerEvent` are the wire-facing types: a replay script is
//! a sequence of `PointerEvent`s, one JSON object per line. `Gesture` is the
//! per-sheet interaction state tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button; starts a drag.
    Primary,
    /// Middle mouse button (scroll wheel click); ignored.
    Middle,
    /// Right mouse button; starts a spin.
    Secondary,
}

/// A single pointer event as fed to the desk, and as written in replay
/// scripts (internally tagged, e.g. `{"type":"move","x":10.0,"y":20.0}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Global pointer motion in viewport coordinates.
    Move { x: f64, y: f64 },
    /// Button press on one sheet, identified by attach order.
    Down { sheet: usize, button: Button },
    /// Global button release; ends whatever gesture is in progress.
    Up,
}

/// The interaction in progress on one sheet.
///
/// Exactly one variant holds at a time; `Rotating` implies the sheet is
/// active. A press while already active is ignored, so the only transitions
/// are `Idle → Translating` (primary down), `Idle → Rotating` (secondary
/// down), and back to `Idle` on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Primary-button drag; per-event pointer displacement accumulates into
    /// the sheet's translation.
    Translating,
    /// Secondary-button spin; the pointer's direction from the anchor drives
    /// the sheet's rotation.
    Rotating,
}

impl Gesture {
    /// Whether any gesture is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the gesture is a spin.
    #[must_use]
    pub fn is_rotating(self) -> bool {
        matches!(self, Self::Rotating)
    }
}
