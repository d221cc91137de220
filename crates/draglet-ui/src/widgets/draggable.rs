//! The mounted draggable control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use draglet_animation::Animator;
use draglet_foundation::{
    PlatformTraits, PointerEvent, PositionListenerRegistration, PositionModel, ViewportEvents,
    ViewportSubscription,
};
use draglet_graphics::Point;

use crate::{
    AnchorName, AnchorSnapper, DragCallbacks, DragController, DraggableConfig, ResolvedLayout,
};

/// A mounted draggable control.
///
/// Wires the position model, anchor snapper, and drag controller together
/// for one mount/unmount lifecycle. The hosting platform feeds pointer
/// events in; the control feeds movement requests out through the animator
/// it was mounted with.
///
/// While anchored layout is active (reverse disabled) the control also
/// holds a position listener and a viewport subscription; both are scoped
/// guards released on unmount or plain drop, including mid-gesture.
pub struct Draggable {
    config: DraggableConfig,
    traits: PlatformTraits,
    viewport: ViewportEvents,
    position: PositionModel,
    snapper: AnchorSnapper,
    controller: Rc<RefCell<DragController>>,
    current_anchor: Rc<Cell<Option<AnchorName>>>,
    pending_reposition: Rc<Cell<bool>>,
    observed: Rc<Cell<Point>>,
    position_listener: Option<PositionListenerRegistration>,
    viewport_subscription: Option<ViewportSubscription>,
}

impl Draggable {
    pub fn mount(
        config: DraggableConfig,
        callbacks: DragCallbacks,
        viewport: &ViewportEvents,
        animator: Rc<dyn Animator>,
        traits: PlatformTraits,
    ) -> Self {
        let layout = ResolvedLayout::resolve(&config, viewport.size(), &traits);
        let position = PositionModel::new(layout.origin);
        let snapper = AnchorSnapper::new(
            position.clone(),
            viewport.clone(),
            config.render_size,
            traits,
        );
        let current_anchor = Rc::new(Cell::new(None));
        let controller = Rc::new(RefCell::new(DragController::new(
            position.clone(),
            snapper.clone(),
            animator,
            callbacks,
            config.reverse,
            config.tolerance,
            config.spring,
            layout.origin,
            Rc::clone(&current_anchor),
        )));

        let pending_reposition = Rc::new(Cell::new(false));
        let observed = Rc::new(Cell::new(position.position()));

        let mut widget = Self {
            config,
            traits,
            viewport: viewport.clone(),
            position,
            snapper,
            controller,
            current_anchor,
            pending_reposition,
            observed,
            position_listener: None,
            viewport_subscription: None,
        };

        if widget.config.anchored_layout_active() {
            if let Some(start) = widget.config.start_position {
                widget.snapper.snap_to(start);
                widget.observed.set(widget.position.position());
            }

            // Cached mirror of the last broadcast position; render glue
            // reads it without touching the model.
            let observed = Rc::clone(&widget.observed);
            widget.position_listener = Some(
                widget
                    .position
                    .add_listener(move |position| observed.set(position)),
            );

            let controller = Rc::clone(&widget.controller);
            let snapper = widget.snapper.clone();
            let current_anchor = Rc::clone(&widget.current_anchor);
            let pending = Rc::clone(&widget.pending_reposition);
            let start = widget.config.start_position;
            widget.viewport_subscription = Some(widget.viewport.subscribe(move |_| {
                if controller.borrow().is_dragging() {
                    // Never interrupt an open session; reposition once the
                    // gesture settles back to Idle.
                    pending.set(true);
                } else {
                    reposition_to_retained_anchor(&snapper, &current_anchor, start);
                }
            }));
        }

        widget
    }

    pub fn pointer_grant(&self, event: &PointerEvent) {
        self.controller.borrow_mut().grant(event);
    }

    pub fn pointer_move(&self, event: &PointerEvent, delta: Point) {
        self.controller.borrow_mut().drag(event, delta);
    }

    pub fn pointer_release(&self, event: &PointerEvent) {
        self.controller.borrow_mut().release(event);
        if self.pending_reposition.get() {
            self.pending_reposition.set(false);
            reposition_to_retained_anchor(
                &self.snapper,
                &self.current_anchor,
                self.config.start_position,
            );
        }
    }

    pub fn long_press(&self, event: &PointerEvent) {
        self.controller.borrow().long_press(event);
    }

    pub fn press_in(&self, event: &PointerEvent) {
        self.controller.borrow().press_in(event);
    }

    pub fn press_out(&self, event: &PointerEvent) {
        self.controller.borrow().press_out(event);
    }

    /// Current absolute position of the control.
    pub fn position(&self) -> Point {
        self.position.position()
    }

    /// Handle to the underlying position model. The animator implementation
    /// drives this model toward the targets it receives.
    pub fn position_model(&self) -> PositionModel {
        self.position.clone()
    }

    /// Cached copy of the last position broadcast to listeners. Maintained
    /// while anchored layout is active.
    pub fn observed_position(&self) -> Point {
        self.observed.get()
    }

    /// Anchor chosen by the most recent snap, if any.
    pub fn current_anchor(&self) -> Option<AnchorName> {
        self.current_anchor.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().is_dragging()
    }

    /// Non-animated reposition onto a named anchor.
    pub fn snap_to(&self, name: AnchorName) {
        self.snapper.snap_to(name);
    }

    /// Resting layout for the live viewport.
    pub fn layout(&self) -> ResolvedLayout {
        ResolvedLayout::resolve(&self.config, self.viewport.size(), &self.traits)
    }

    pub fn config(&self) -> &DraggableConfig {
        &self.config
    }

    /// Tear the control down. Dropping the widget releases the same
    /// resources; this only makes the point explicit at call sites.
    pub fn unmount(mut self) {
        self.position_listener.take();
        self.viewport_subscription.take();
    }
}

fn reposition_to_retained_anchor(
    snapper: &AnchorSnapper,
    current_anchor: &Cell<Option<AnchorName>>,
    start: Option<AnchorName>,
) {
    if let Some(name) = current_anchor.get().or(start) {
        snapper.snap_to(name);
    }
}

#[cfg(test)]
#[path = "../tests/draggable_tests.rs"]
mod tests;
