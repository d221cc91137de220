//! Resting-layout resolution for the control's container.

use draglet_foundation::{PlatformTraits, DEFAULT_Z_INDEX};
use draglet_graphics::{Point, Rect, Size};

use crate::DraggableConfig;

/// Where the control's container sits and how it stacks, before any gesture
/// moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedLayout {
    /// Frame of the positioning container. On platforms without absolute
    /// stacking this spans the full viewport so the control can be
    /// absolutely positioned inside it.
    pub container: Rect,
    /// Top-left of the control within the container.
    pub origin: Point,
    /// Stacking order; `None` where the platform ignores it.
    pub z_index: Option<i32>,
    /// Width of the touchable area around the control.
    pub touch_width: f32,
}

impl ResolvedLayout {
    pub fn resolve(config: &DraggableConfig, viewport: Size, traits: &PlatformTraits) -> Self {
        let origin = if config.sticky {
            // Anchored layout: the snap drives the position, the container
            // starts at the viewport origin.
            Point::ZERO
        } else {
            let centered = viewport.width / 2.0 - config.render_size;
            Point {
                x: config.x.unwrap_or(centered + config.offset_x),
                // The vertical default derives from the viewport width as
                // well; long-standing behavior, reproduced as-is.
                y: config.y.unwrap_or(centered + config.offset_y),
            }
        };

        let touch_width = config.render_size * 2.0;
        if traits.supports_z_index {
            Self {
                container: Rect::from_origin_size(origin, Size::new(touch_width, touch_width)),
                origin,
                z_index: Some(config.z.unwrap_or(DEFAULT_Z_INDEX)),
                touch_width,
            }
        } else {
            Self {
                container: Rect::from_size(viewport),
                origin,
                z_index: None,
                touch_width,
            }
        }
    }
}
