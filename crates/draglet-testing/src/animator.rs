use std::cell::RefCell;
use std::rc::Rc;

use draglet_animation::{Animator, SpringSpec};
use draglet_foundation::PositionModel;
use draglet_graphics::Point;

/// Animator double that records every spring request.
///
/// Built with [`settling`](Self::settling) it also writes the target straight
/// into the position model, standing in for an animation that has already
/// finished; built with [`new`](Self::new) the position is left untouched, as
/// if the animation were still in flight.
pub struct RecordingAnimator {
    requests: RefCell<Vec<(Point, SpringSpec)>>,
    settle_into: RefCell<Option<PositionModel>>,
}

impl RecordingAnimator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            requests: RefCell::new(Vec::new()),
            settle_into: RefCell::new(None),
        })
    }

    pub fn settling(position: PositionModel) -> Rc<Self> {
        let animator = Self::new();
        animator.bind(position);
        animator
    }

    /// Start settling requests into `position`. Lets a test bind the model
    /// after the widget that owns it has been mounted.
    pub fn bind(&self, position: PositionModel) {
        *self.settle_into.borrow_mut() = Some(position);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_target(&self) -> Option<Point> {
        self.requests.borrow().last().map(|(target, _)| *target)
    }

    pub fn targets(&self) -> Vec<Point> {
        self.requests
            .borrow()
            .iter()
            .map(|(target, _)| *target)
            .collect()
    }
}

impl Animator for RecordingAnimator {
    fn spring_to(&self, target: Point, spec: SpringSpec) {
        self.requests.borrow_mut().push((target, spec));
        // Drop the borrow before touching the model; its listeners may call
        // back into this animator.
        let position = self.settle_into.borrow().clone();
        if let Some(position) = position {
            position.set_position(target);
        }
    }
}
