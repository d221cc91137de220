//! The seam between the drag core and whatever executes animations.

use draglet_graphics::Point;

use crate::SpringSpec;

/// Receives fire-and-forget movement requests from the drag core.
///
/// Implementations run on their own scheduler (a frame clock, a test double,
/// an external physics engine). The core never awaits completion: a new
/// gesture may start while a previous request is still settling, in which
/// case the new grant simply snapshots whatever position the control holds
/// at that instant.
pub trait Animator {
    /// Spring the control toward `target`.
    fn spring_to(&self, target: Point, spec: SpringSpec);
}
