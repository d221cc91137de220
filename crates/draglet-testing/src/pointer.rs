use draglet_foundation::{PointerEvent, PointerEventKind};
use draglet_graphics::Point;

/// Pointer-down event at the given coordinates.
pub fn pointer_down(x: f32, y: f32) -> PointerEvent {
    let point = Point::new(x, y);
    PointerEvent::new(PointerEventKind::Down, point, point)
}

/// Pointer-move event at the given coordinates.
pub fn pointer_move(x: f32, y: f32) -> PointerEvent {
    let point = Point::new(x, y);
    PointerEvent::new(PointerEventKind::Move, point, point)
}

/// Pointer-up event at the given coordinates.
pub fn pointer_up(x: f32, y: f32) -> PointerEvent {
    let point = Point::new(x, y);
    PointerEvent::new(PointerEventKind::Up, point, point)
}
