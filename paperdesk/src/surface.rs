//! The contract between the engine and whatever renders a sheet.

use crate::style::Transform;

/// Opaque handle to a host-rendered sheet.
///
/// The desk is generic over this trait so the interaction core never touches
/// a real DOM: a browser host writes `transform.to_string()` into the
/// element's style, a test double records the calls. Writes are fire-and-
/// forget; the host's rendering layer is trusted to apply them.
pub trait Surface {
    /// Apply the composed transform to this sheet.
    fn set_transform(&mut self, transform: Transform);

    /// Set this sheet's stacking order; higher values render above lower.
    fn set_stack_order(&mut self, order: i64);
}
