use std::cell::Cell;
use std::rc::Rc;

use draglet_animation::{Animator, SpringSpec};
use draglet_foundation::{PointerEvent, PositionModel};
use draglet_graphics::Point;

use crate::{AnchorName, AnchorSnapper, DragCallbacks, DragSession, DragState};

/// Orchestrates the gesture state machine: Idle --grant--> Dragging
/// --release--> Idle.
///
/// Runs entirely on the UI event loop. The animator is fired and forgotten;
/// a new grant may arrive while a previous request is still settling, in
/// which case the new session's origin is whatever the position holds at
/// that instant.
pub struct DragController {
    state: DragState,
    session: Option<DragSession>,
    position: PositionModel,
    snapper: AnchorSnapper,
    animator: Rc<dyn Animator>,
    callbacks: DragCallbacks,
    reverse: bool,
    tolerance: f32,
    spring: SpringSpec,
    home: Point,
    current_anchor: Rc<Cell<Option<AnchorName>>>,
}

impl DragController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: PositionModel,
        snapper: AnchorSnapper,
        animator: Rc<dyn Animator>,
        callbacks: DragCallbacks,
        reverse: bool,
        tolerance: f32,
        spring: SpringSpec,
        home: Point,
        current_anchor: Rc<Cell<Option<AnchorName>>>,
    ) -> Self {
        Self {
            state: DragState::Idle,
            session: None,
            position,
            snapper,
            animator,
            callbacks,
            reverse,
            tolerance,
            spring,
            home,
            current_anchor,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Open a gesture session: snapshot the origin, zero the offset.
    pub fn grant(&mut self, _event: &PointerEvent) {
        let origin = self.position.position();
        log::trace!("drag grant at ({}, {})", origin.x, origin.y);
        self.session = Some(DragSession::new(origin));
        self.position.begin_gesture();
        self.state = DragState::Dragging;
    }

    /// Fold a per-move delta into the position and notify the move callback.
    /// Visual feedback only; classification happens at release.
    pub fn drag(&mut self, event: &PointerEvent, delta: Point) {
        if self.state != DragState::Dragging {
            return;
        }
        self.position.apply_delta(delta);
        self.callbacks.notify_move(event, delta);
    }

    /// Close the session: classify tap vs. drag and dispatch accordingly.
    pub fn release(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.state = DragState::Idle;

        let current = self.position.position();
        let movement = session.origin.abs_delta(current);
        let is_tap =
            self.tolerance > 0.0 && movement.x < self.tolerance && movement.y < self.tolerance;
        log::trace!(
            "drag release: movement ({}, {}), classified as {}",
            movement.x,
            movement.y,
            if is_tap { "tap" } else { "drag" }
        );

        if is_tap {
            self.callbacks.notify_tap(event);
            if !self.reverse {
                // Anchored mode swallows taps entirely: no release callback,
                // no snap, position stays at the tap point.
                self.position.flatten_offset();
                return;
            }
        } else if !self.reverse {
            // A real drag in anchored mode snaps to the nearest anchor and
            // never reports the release.
            event.consume();
            self.position.flatten_offset();
            let anchor = self.snapper.nearest(current);
            self.current_anchor.set(Some(anchor.name));
            self.animator.spring_to(anchor.position, self.spring);
            return;
        }

        // Reverse mode, tap or drag alike: report the release, then spring
        // back to the resting position resolved at mount. Not the grant
        // origin: a grant landing mid-flight would otherwise pin the control
        // wherever the interrupted animation happened to be.
        self.callbacks.notify_release(event);
        self.position.flatten_offset();
        self.animator.spring_to(self.home, self.spring);
    }

    /// Pass-through notification; fires regardless of drag state.
    pub fn long_press(&self, event: &PointerEvent) {
        self.callbacks.notify_long_press(event);
    }

    /// Pass-through notification; fires regardless of drag state.
    pub fn press_in(&self, event: &PointerEvent) {
        self.callbacks.notify_press_in(event);
    }

    /// Pass-through notification; fires regardless of drag state.
    pub fn press_out(&self, event: &PointerEvent) {
        self.callbacks.notify_press_out(event);
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
