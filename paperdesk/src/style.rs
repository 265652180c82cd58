//! The composed transform a sheet carries and its CSS string form.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Composed 2D transform for one sheet: translate, then rotate.
///
/// `x` and `y` are accumulated pixel offsets, unrounded. `deg` is a whole
/// number in `[0, 360)` once the sheet has been spun; before that it holds
/// the sheet's initial tilt, which may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub deg: f64,
}

impl Transform {
    #[must_use]
    pub fn new(x: f64, y: f64, deg: f64) -> Self {
        Self { x, y, deg }
    }
}

impl fmt::Display for Transform {
    /// Renders the CSS form, `translateX(<x>px) translateY(<y>px)
    /// rotateZ(<deg>deg)`. Whole values print without a fraction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}px) translateY({}px) rotateZ({}deg)",
            self.x, self.y, self.deg
        )
    }
}
