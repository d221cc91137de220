//! Gesture-session lifecycle: state machine, callbacks, dispatch.

mod callbacks;
mod controller;
mod session;

pub use callbacks::*;
pub use controller::*;
pub use session::*;
