//! Shared numeric constants for the paperdesk crate.

// ── Angles ──────────────────────────────────────────────────────

/// Degrees in a full turn.
pub const DEG_PER_TURN: f64 = 360.0;

// ── Initial tilt ────────────────────────────────────────────────

/// Lower bound of the random tilt a sheet is born with, in degrees.
pub const TILT_MIN_DEG: f64 = -15.0;

/// Upper bound of the random tilt a sheet is born with, in degrees.
pub const TILT_MAX_DEG: f64 = 15.0;
