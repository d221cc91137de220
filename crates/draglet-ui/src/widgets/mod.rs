//! Widget-level wiring of the drag core.

mod draggable;

pub use draggable::*;
