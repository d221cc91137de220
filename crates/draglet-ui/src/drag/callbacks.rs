use draglet_foundation::PointerEvent;
use draglet_graphics::Point;
use std::rc::Rc;

type EventHandler = Rc<dyn Fn(&PointerEvent)>;
type MoveHandler = Rc<dyn Fn(&PointerEvent, Point)>;

/// Optional gesture callbacks. Every slot may be empty; invocation is a
/// presence check followed by a call, never an error.
#[derive(Clone, Default)]
pub struct DragCallbacks {
    on_move: Option<MoveHandler>,
    on_tap: Option<EventHandler>,
    on_release: Option<EventHandler>,
    on_long_press: Option<EventHandler>,
    on_press_in: Option<EventHandler>,
    on_press_out: Option<EventHandler>,
}

impl DragCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoked synchronously with each per-move delta.
    pub fn on_move(mut self, handler: impl Fn(&PointerEvent, Point) + 'static) -> Self {
        self.on_move = Some(Rc::new(handler));
        self
    }

    /// Invoked when a release classifies as a tap.
    pub fn on_tap(mut self, handler: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_tap = Some(Rc::new(handler));
        self
    }

    /// Invoked at the end of a drag, in the modes that report it.
    pub fn on_release(mut self, handler: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_release = Some(Rc::new(handler));
        self
    }

    pub fn on_long_press(mut self, handler: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_long_press = Some(Rc::new(handler));
        self
    }

    pub fn on_press_in(mut self, handler: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_press_in = Some(Rc::new(handler));
        self
    }

    pub fn on_press_out(mut self, handler: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_press_out = Some(Rc::new(handler));
        self
    }

    pub(crate) fn notify_move(&self, event: &PointerEvent, delta: Point) {
        if let Some(handler) = &self.on_move {
            handler(event, delta);
        }
    }

    pub(crate) fn notify_tap(&self, event: &PointerEvent) {
        if let Some(handler) = &self.on_tap {
            handler(event);
        }
    }

    pub(crate) fn notify_release(&self, event: &PointerEvent) {
        if let Some(handler) = &self.on_release {
            handler(event);
        }
    }

    pub(crate) fn notify_long_press(&self, event: &PointerEvent) {
        if let Some(handler) = &self.on_long_press {
            handler(event);
        }
    }

    pub(crate) fn notify_press_in(&self, event: &PointerEvent) {
        if let Some(handler) = &self.on_press_in {
            handler(event);
        }
    }

    pub(crate) fn notify_press_out(&self, event: &PointerEvent) {
        if let Some(handler) = &self.on_press_out {
            handler(event);
        }
    }
}
