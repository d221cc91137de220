use super::*;

use draglet_graphics::Size;
use draglet_testing::{pointer_down, pointer_move, pointer_up, RecordingAnimator};

const VIEWPORT: Size = Size::new(400.0, 800.0);

fn anchored_config(start: &str) -> DraggableConfig {
    DraggableConfig::default()
        .with_reverse(false)
        .with_sticky(true)
        .with_start_position(start)
}

fn mount_anchored(
    viewport: &ViewportEvents,
    config: DraggableConfig,
) -> (Draggable, Rc<RecordingAnimator>) {
    let animator = RecordingAnimator::new();
    let animator_handle: Rc<dyn Animator> = animator.clone();
    let widget = Draggable::mount(
        config,
        DragCallbacks::new(),
        viewport,
        animator_handle,
        PlatformTraits::overlay(),
    );
    animator.bind(widget.position_model());
    (widget, animator)
}

#[test]
fn mount_places_the_control_at_the_centered_default() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let animator: Rc<dyn Animator> = RecordingAnimator::new();
    let widget = Draggable::mount(
        DraggableConfig::default(),
        DragCallbacks::new(),
        &viewport,
        animator,
        PlatformTraits::overlay(),
    );

    assert_eq!(widget.position(), Point::new(264.0, 264.0));
    assert_eq!(widget.layout().z_index, Some(999));
}

#[test]
fn start_anchor_is_ignored_outside_anchored_layout() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let animator: Rc<dyn Animator> = RecordingAnimator::new();
    let widget = Draggable::mount(
        DraggableConfig::default().with_start_position("bottomRight"),
        DragCallbacks::new(),
        &viewport,
        animator,
        PlatformTraits::overlay(),
    );

    // Reverse mode: no anchored layout, no initial snap.
    assert_eq!(widget.position(), Point::new(264.0, 264.0));
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(widget.position_model().listener_count(), 0);
}

#[test]
fn anchored_mount_snaps_to_the_start_anchor() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) = mount_anchored(&viewport, anchored_config("bottomRight"));
    assert_eq!(widget.position(), Point::new(324.0, 724.0));
    assert_eq!(widget.observed_position(), Point::new(324.0, 724.0));
}

#[test]
fn unknown_start_anchor_leaves_the_position_unchanged() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) = mount_anchored(&viewport, anchored_config("bottomCentre"));
    // Sticky layout with no resolvable start anchor: container origin.
    assert_eq!(widget.position(), Point::ZERO);
}

#[test]
fn rotation_repositions_to_the_last_chosen_anchor() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, animator) = mount_anchored(&viewport, anchored_config("topLeft"));
    assert_eq!(widget.position(), Point::new(20.0, 20.0));

    widget.pointer_grant(&pointer_down(20.0, 20.0));
    widget.pointer_move(&pointer_move(320.0, 700.0), Point::new(300.0, 680.0));
    widget.pointer_release(&pointer_up(320.0, 700.0));
    assert_eq!(widget.current_anchor(), Some(AnchorName::BottomRight));
    assert_eq!(widget.position(), Point::new(324.0, 724.0));
    assert_eq!(animator.request_count(), 1);

    viewport.set_size(Size::new(800.0, 400.0));
    // Same named anchor, recomputed for the rotated viewport, without a new
    // animation request.
    assert_eq!(widget.position(), Point::new(724.0, 324.0));
    assert_eq!(animator.request_count(), 1);
}

#[test]
fn rotation_before_any_snap_falls_back_to_the_start_anchor() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) = mount_anchored(&viewport, anchored_config("bottomLeft"));
    assert_eq!(widget.position(), Point::new(20.0, 724.0));

    viewport.set_size(Size::new(800.0, 400.0));
    assert_eq!(widget.position(), Point::new(20.0, 324.0));
}

#[test]
fn rotation_during_a_gesture_is_deferred_until_release() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) = mount_anchored(&viewport, anchored_config("topLeft"));

    widget.pointer_grant(&pointer_down(20.0, 20.0));
    widget.pointer_move(&pointer_move(30.0, 30.0), Point::new(10.0, 10.0));

    viewport.set_size(Size::new(800.0, 400.0));
    // The open session is left alone.
    assert!(widget.is_dragging());
    assert_eq!(widget.position(), Point::new(30.0, 30.0));

    widget.pointer_release(&pointer_up(30.0, 30.0));
    assert!(!widget.is_dragging());
    assert_eq!(widget.current_anchor(), Some(AnchorName::TopLeft));
    assert_eq!(widget.position(), Point::new(20.0, 20.0));
}

#[test]
fn observed_position_mirrors_moves() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) =
        mount_anchored(&viewport, DraggableConfig::default().with_reverse(false));
    assert_eq!(widget.observed_position(), Point::new(264.0, 264.0));

    widget.pointer_grant(&pointer_down(264.0, 264.0));
    widget.pointer_move(&pointer_move(269.0, 269.0), Point::new(5.0, 5.0));
    assert_eq!(widget.observed_position(), widget.position());
    assert_eq!(widget.observed_position(), Point::new(269.0, 269.0));
}

#[test]
fn unmount_releases_every_listener() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) = mount_anchored(&viewport, anchored_config("topLeft"));
    let model = widget.position_model();
    assert_eq!(viewport.listener_count(), 1);
    assert_eq!(model.listener_count(), 1);

    widget.unmount();
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(model.listener_count(), 0);
}

#[test]
fn dropping_mid_gesture_also_releases_listeners() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let (widget, _animator) = mount_anchored(&viewport, anchored_config("topLeft"));
    let model = widget.position_model();

    widget.pointer_grant(&pointer_down(20.0, 20.0));
    drop(widget);
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(model.listener_count(), 0);
}

#[test]
fn reverse_gesture_through_the_widget_springs_home() {
    let viewport = ViewportEvents::new(VIEWPORT);
    let taps = Rc::new(Cell::new(0u32));
    let animator = RecordingAnimator::new();
    let animator_handle: Rc<dyn Animator> = animator.clone();
    let widget = Draggable::mount(
        DraggableConfig::default().with_tolerance(10.0),
        DragCallbacks::new().on_tap({
            let taps = Rc::clone(&taps);
            move |_| taps.set(taps.get() + 1)
        }),
        &viewport,
        animator_handle,
        PlatformTraits::overlay(),
    );

    widget.pointer_grant(&pointer_down(264.0, 264.0));
    widget.pointer_move(&pointer_move(266.0, 264.0), Point::new(2.0, 0.0));
    widget.pointer_release(&pointer_up(266.0, 264.0));

    assert_eq!(taps.get(), 1);
    assert_eq!(animator.last_target(), Some(Point::new(264.0, 264.0)));
}
