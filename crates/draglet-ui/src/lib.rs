//! Draggable floating control for single-threaded UI event loops.
//!
//! The control follows the pointer while a gesture session is open, then
//! either snaps to the nearest of eight screen-edge anchors (sticky mode) or
//! springs back to its resting position (reverse mode). Raw touch capture,
//! animation execution, and drawing stay outside this crate behind the
//! collaborator seams in `draglet-foundation` and `draglet-animation`.

mod anchors;
mod config;
mod drag;
mod layout;
pub mod widgets;

pub use anchors::*;
pub use config::*;
pub use drag::*;
pub use layout::*;
pub use widgets::Draggable;
