//! Pure math/data value types for Draglet
//!
//! This crate contains the geometry primitives and styling values consumed
//! by the gesture core and handed to the rendering collaborator. No drawing
//! happens here.

mod geometry;
mod style;

pub use geometry::*;
pub use style::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::style::{Color, ImageSource, RenderShape};
}
