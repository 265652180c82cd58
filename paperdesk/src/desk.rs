//! Sheet registry and event dispatcher.
//!
//! Rather than each sheet subscribing to the host's global pointer streams
//! on its own, a single `Desk` owns all controllers and fans each global
//! event out in attach order; idle controllers track the pointer but emit
//! nothing. The desk also owns the one piece of shared state, the
//! stacking-order counter.

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

use rand::Rng;
use uuid::Uuid;

use crate::consts::{TILT_MAX_DEG, TILT_MIN_DEG};
use crate::geom::Point;
use crate::input::Button;
use crate::sheet::SheetController;
use crate::surface::Surface;

/// Unique identifier for an attached sheet.
pub type SheetId = Uuid;

/// Errors surfaced by the desk.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// The sheet id does not belong to this desk.
    #[error("no sheet with id {0}")]
    UnknownSheet(SheetId),
}

/// Take-next counter for stacking order.
///
/// Starts at 1; every gesture start takes the current value and bumps the
/// counter, so handed-out orders are unique and strictly increasing for the
/// life of the desk. There is no way to reset or decrement it.
#[derive(Debug)]
pub struct StackOrder {
    next: i64,
}

impl StackOrder {
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the current top order and advance the counter.
    pub fn take_next(&mut self) -> i64 {
        let order = self.next;
        self.next += 1;
        order
    }

    /// The value the next `take_next` will hand out.
    #[must_use]
    pub fn peek(&self) -> i64 {
        self.next
    }
}

impl Default for StackOrder {
    fn default() -> Self {
        Self::new()
    }
}

struct Sheet<S> {
    id: SheetId,
    surface: S,
    controller: SheetController,
}

/// The registry: one controller per attached surface, plus the shared
/// stacking-order counter.
///
/// The host forwards its raw events here: global pointer motion to
/// [`Desk::pointer_move`], per-sheet presses to [`Desk::pointer_down`], and
/// global releases to [`Desk::pointer_up`]. Events are processed one at a
/// time in call order; nothing blocks and nothing is cancelled — a gesture
/// only ends via pointer-up.
pub struct Desk<S: Surface> {
    sheets: Vec<Sheet<S>>,
    stack: StackOrder,
}

impl<S: Surface> Desk<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { sheets: Vec::new(), stack: StackOrder::new() }
    }

    // --- Registry ---

    /// Attach a surface, giving its sheet a random initial tilt between
    /// [`TILT_MIN_DEG`] and [`TILT_MAX_DEG`]. Returns the sheet's id.
    ///
    /// Sheets live for the desk's lifetime; there is no detach.
    pub fn attach(&mut self, surface: S) -> SheetId {
        let tilt_deg = rand::rng().random_range(TILT_MIN_DEG..TILT_MAX_DEG);
        self.attach_with_tilt(surface, tilt_deg)
    }

    /// Attach a surface with a fixed initial tilt, for deterministic
    /// replays and tests.
    pub fn attach_with_tilt(&mut self, surface: S, tilt_deg: f64) -> SheetId {
        let id = Uuid::new_v4();
        tracing::debug!(%id, tilt_deg, "sheet attached");
        self.sheets.push(Sheet { id, surface, controller: SheetController::new(tilt_deg) });
        id
    }

    // --- Events ---

    /// Dispatch a global pointer-move to every sheet. Sheets mid-gesture get
    /// their updated transform written to their surface; idle sheets only
    /// track the pointer.
    pub fn pointer_move(&mut self, point: Point) {
        for sheet in &mut self.sheets {
            if let Some(transform) = sheet.controller.pointer_move(point) {
                tracing::trace!(id = %sheet.id, %transform, "transform applied");
                sheet.surface.set_transform(transform);
            }
        }
    }

    /// Dispatch a button press on the sheet with the given id.
    ///
    /// A primary or secondary press on an idle sheet starts a gesture and
    /// promotes the sheet: it is written the counter's next stacking order.
    /// Presses on an already-active sheet, and other buttons, change
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::UnknownSheet`] if no sheet has this id.
    pub fn pointer_down(&mut self, id: SheetId, button: Button) -> Result<(), DeskError> {
        let sheet = self
            .sheets
            .iter_mut()
            .find(|sheet| sheet.id == id)
            .ok_or(DeskError::UnknownSheet(id))?;
        if sheet.controller.pointer_down(button) {
            let order = self.stack.take_next();
            tracing::debug!(%id, ?button, order, gesture = ?sheet.controller.gesture(), "gesture started");
            sheet.surface.set_stack_order(order);
        }
        Ok(())
    }

    /// Dispatch the global button release: every sheet returns to idle where
    /// it is. Harmless when nothing was active.
    pub fn pointer_up(&mut self) {
        for sheet in &mut self.sheets {
            if sheet.controller.gesture().is_active() {
                tracing::debug!(id = %sheet.id, "gesture ended");
            }
            sheet.controller.pointer_up();
        }
    }

    // --- Queries ---

    /// Ids of all attached sheets, in attach order.
    #[must_use]
    pub fn sheet_ids(&self) -> Vec<SheetId> {
        self.sheets.iter().map(|sheet| sheet.id).collect()
    }

    /// The controller for a sheet, if the id belongs to this desk.
    #[must_use]
    pub fn controller(&self, id: SheetId) -> Option<&SheetController> {
        self.sheets
            .iter()
            .find(|sheet| sheet.id == id)
            .map(|sheet| &sheet.controller)
    }

    /// Number of attached sheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns `true` if no sheet has been attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl<S: Surface> Default for Desk<S> {
    fn default() -> Self {
        Self::new()
    }
}
