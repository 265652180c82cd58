//! Direct-manipulation engine for draggable, rotatable "paper" sheets.
//!
//! A [`desk::Desk`] owns one [`sheet::SheetController`] per attached surface
//! and dispatches the host's pointer events to them: a primary-button press
//! starts a drag, a secondary-button press starts a spin, and either press
//! promotes the sheet above its siblings. The host environment (DOM, test
//! double, console) stays behind the [`surface::Surface`] trait; the engine
//! only ever hands it a composed transform and a stacking order.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`desk`] | Sheet registry, event dispatcher, and stacking-order counter |
//! | [`sheet`] | Per-sheet interaction state machine |
//! | [`surface`] | Opaque host-handle contract |
//! | [`geom`] | Points, displacements, and anchor-relative angle math |
//! | [`input`] | Pointer buttons, replay events, and the gesture enum |
//! | [`style`] | Composed transform and its CSS string form |
//! | [`consts`] | Shared numeric constants (tilt range, degrees per turn) |

pub mod consts;
pub mod desk;
pub mod geom;
pub mod input;
pub mod sheet;
pub mod style;
pub mod surface;

pub use desk::{Desk, DeskError, SheetId, StackOrder};
pub use geom::{Offset, Point};
pub use input::{Button, Gesture, PointerEvent};
pub use sheet::SheetController;
pub use style::Transform;
pub use surface::Surface;
