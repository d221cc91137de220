//! Animation request vocabulary for Draglet.
//!
//! The drag core never runs animations itself: on release it fires a single
//! request at an [`Animator`] and moves on. Everything here is the data that
//! request carries, plus the interpolation trait an animator implementation
//! needs to service it.

mod animator;
mod spring;

pub use animator::*;
pub use spring::*;
