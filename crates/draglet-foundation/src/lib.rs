//! Foundation types for the Draglet drag core.
//!
//! Holds the pieces the controller builds on: the pointer-event vocabulary
//! delivered by the external gesture tracker, platform capabilities resolved
//! once at startup, and the two observable state holders (control position,
//! viewport size) whose listeners are scoped resources.

mod input;
mod platform;
mod position;
mod viewport;

pub use input::*;
pub use platform::*;
pub use position::*;
pub use viewport::*;
