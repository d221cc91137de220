//! Test doubles for the drag core's external collaborators.
//!
//! Production code talks to a real gesture tracker and a real animation
//! scheduler; tests drive the same seams with the pieces here: hand-built
//! pointer events and an animator that records every request and can settle
//! the position model immediately instead of over frames.

mod animator;
mod pointer;

pub use animator::*;
pub use pointer::*;
