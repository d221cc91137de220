//! Observable holder for the control's position and in-gesture offset.

use draglet_graphics::Point;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type PositionListener = Rc<dyn Fn(Point)>;

/// Current absolute position of the control plus the offset accumulated
/// during an open gesture session.
///
/// The offset is meaningful only between grant and release; it is zeroed at
/// each grant and folded away at release. While a session is open the model
/// keeps `position == grant origin + offset`.
///
/// Cloning produces another handle to the same state.
pub struct PositionModel {
    inner: Rc<RefCell<PositionInner>>,
}

struct PositionInner {
    position: Point,
    offset: Point,
    next_listener_id: u64,
    listeners: SmallVec<[(u64, PositionListener); 2]>,
}

impl PositionModel {
    pub fn new(initial: Point) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PositionInner {
                position: initial,
                offset: Point::ZERO,
                next_listener_id: 0,
                listeners: SmallVec::new(),
            })),
        }
    }

    /// Current absolute position, including any in-gesture offset already
    /// applied.
    pub fn position(&self) -> Point {
        self.inner.borrow().position
    }

    /// Offset accumulated since the last gesture grant.
    pub fn offset(&self) -> Point {
        self.inner.borrow().offset
    }

    /// Zero the offset at gesture grant.
    pub fn begin_gesture(&self) {
        self.inner.borrow_mut().offset = Point::ZERO;
    }

    /// Fold a per-move delta into both the offset and the absolute position,
    /// then notify listeners.
    pub fn apply_delta(&self, delta: Point) {
        let position = {
            let mut inner = self.inner.borrow_mut();
            inner.offset += delta;
            inner.position += delta;
            inner.position
        };
        self.notify(position);
    }

    /// Fold the accumulated offset into the absolute position. The position
    /// itself is already absolute, so this only discards the offset.
    pub fn flatten_offset(&self) {
        self.inner.borrow_mut().offset = Point::ZERO;
    }

    /// Set the absolute position directly and notify listeners.
    pub fn set_position(&self, position: Point) {
        self.inner.borrow_mut().position = position;
        self.notify(position);
    }

    /// Register a listener invoked after every position change. The listener
    /// stays registered until the returned registration is cancelled or
    /// dropped.
    pub fn add_listener(
        &self,
        listener: impl Fn(Point) + 'static,
    ) -> PositionListenerRegistration {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        PositionListenerRegistration {
            inner: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Number of live listeners. Reaches zero once every registration has
    /// been dropped.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self, position: Point) {
        // Listeners may re-enter the model, so call them outside the borrow.
        let listeners: SmallVec<[PositionListener; 2]> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(position);
        }
    }
}

impl Clone for PositionModel {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Scoped handle to a registered position listener. Dropping it (or calling
/// [`cancel`](Self::cancel)) deregisters the listener.
pub struct PositionListenerRegistration {
    inner: Weak<RefCell<PositionInner>>,
    id: Option<u64>,
}

impl PositionListenerRegistration {
    pub fn cancel(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let (Some(id), Some(inner)) = (self.id.take(), self.inner.upgrade()) {
            inner
                .borrow_mut()
                .listeners
                .retain(|(listener_id, _)| *listener_id != id);
        }
    }
}

impl Drop for PositionListenerRegistration {
    fn drop(&mut self) {
        self.remove();
    }
}
