//! Viewport size with change subscriptions (device rotation, window resize).

use draglet_graphics::Size;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type ViewportListener = Rc<dyn Fn(Size)>;

/// Current viewport size plus change notifications.
///
/// The hosting platform owns one of these and pushes new sizes into it; the
/// control subscribes while sticky layout is active and repositions itself
/// on change. Cloning produces another handle to the same state.
pub struct ViewportEvents {
    inner: Rc<RefCell<ViewportInner>>,
}

struct ViewportInner {
    size: Size,
    next_listener_id: u64,
    listeners: SmallVec<[(u64, ViewportListener); 2]>,
}

impl ViewportEvents {
    pub fn new(size: Size) -> Self {
        if size.is_empty() {
            log::warn!(
                "ViewportEvents created with degenerate size {}x{}",
                size.width,
                size.height
            );
        }
        Self {
            inner: Rc::new(RefCell::new(ViewportInner {
                size,
                next_listener_id: 0,
                listeners: SmallVec::new(),
            })),
        }
    }

    pub fn size(&self) -> Size {
        self.inner.borrow().size
    }

    /// Record a new viewport size and notify subscribers. Unchanged sizes
    /// are ignored.
    pub fn set_size(&self, size: Size) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.size == size {
                return;
            }
            inner.size = size;
        }
        // Subscribers may re-enter (e.g. to read the size), so call them
        // outside the borrow.
        let listeners: SmallVec<[ViewportListener; 2]> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(size);
        }
    }

    /// Subscribe to size changes. The subscription lasts until the returned
    /// guard is cancelled or dropped.
    pub fn subscribe(&self, listener: impl Fn(Size) + 'static) -> ViewportSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        ViewportSubscription {
            inner: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Clone for ViewportEvents {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Scoped handle to a viewport-change subscription. Dropping it (or calling
/// [`cancel`](Self::cancel)) deregisters the listener.
pub struct ViewportSubscription {
    inner: Weak<RefCell<ViewportInner>>,
    id: Option<u64>,
}

impl ViewportSubscription {
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

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_see_size_changes() {
        let viewport = ViewportEvents::new(Size::new(400.0, 800.0));
        let last = Rc::new(Cell::new(Size::ZERO));

        let subscription = {
            let last = Rc::clone(&last);
            viewport.subscribe(move |size| last.set(size))
        };

        viewport.set_size(Size::new(800.0, 400.0));
        assert_eq!(last.get(), Size::new(800.0, 400.0));
        assert_eq!(viewport.size(), Size::new(800.0, 400.0));
        drop(subscription);
    }

    #[test]
    fn unchanged_size_does_not_notify() {
        let viewport = ViewportEvents::new(Size::new(400.0, 800.0));
        let fired = Rc::new(Cell::new(0u32));
        let subscription = {
            let fired = Rc::clone(&fired);
            viewport.subscribe(move |_| fired.set(fired.get() + 1))
        };
        viewport.set_size(Size::new(400.0, 800.0));
        assert_eq!(fired.get(), 0);
        drop(subscription);
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let viewport = ViewportEvents::new(Size::new(400.0, 800.0));
        let subscription = viewport.subscribe(|_| {});
        assert_eq!(viewport.listener_count(), 1);
        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);
    }
}
