use draglet_graphics::Point;

/// Lifecycle of the drag state machine. `Idle` is both the initial and the
/// terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Ephemeral value opened at gesture grant and discarded at release.
///
/// Holding the origin here, rather than in a long-lived field, ties its
/// validity to the session: no stale pre-drag coordinates can leak between
/// gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Absolute position of the control at the instant of the grant.
    pub origin: Point,
}

impl DragSession {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }
}
