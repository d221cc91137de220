//! Construction-time configuration for the draggable control.

use draglet_animation::SpringSpec;
use draglet_graphics::{Color, ImageSource, RenderShape};

use crate::AnchorName;

/// Configuration consumed once at mount. Every field has a documented
/// default; absence of a value is never an error.
#[derive(Clone, Debug)]
pub struct DraggableConfig {
    /// Size of the rendered control in logical pixels.
    pub render_size: f32,
    pub render_shape: RenderShape,
    pub render_color: Color,
    pub render_text: String,
    pub image_source: Option<ImageSource>,
    /// Horizontal offset added to the centered default position.
    pub offset_x: f32,
    /// Vertical offset added to the centered default position.
    pub offset_y: f32,
    /// Explicit horizontal override; wins over the centered default.
    pub x: Option<f32>,
    /// Explicit vertical override; wins over the centered default.
    pub y: Option<f32>,
    /// Stacking order, honored only where the platform supports it.
    pub z: Option<i32>,
    /// Spring back to the resting position on release.
    pub reverse: bool,
    /// Rest on one of the eight edge anchors instead of a free position.
    pub sticky: bool,
    /// Anchor to occupy before the first gesture, when anchored layout is
    /// active.
    pub start_position: Option<AnchorName>,
    /// Maximum per-axis movement still classified as a tap. Zero disables
    /// tap classification entirely.
    pub tolerance: f32,
    /// Spring used for snap and reverse animations.
    pub spring: SpringSpec,
}

impl Default for DraggableConfig {
    fn default() -> Self {
        Self {
            render_size: 36.0,
            render_shape: RenderShape::Circle,
            render_color: Color::YELLOW_GREEN,
            render_text: "＋".to_string(),
            image_source: None,
            offset_x: 100.0,
            offset_y: 100.0,
            x: None,
            y: None,
            z: None,
            reverse: true,
            sticky: false,
            start_position: None,
            tolerance: 0.0,
            spring: SpringSpec::default_spring(),
        }
    }
}

impl DraggableConfig {
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_render_size(mut self, render_size: f32) -> Self {
        self.render_size = render_size;
        self
    }

    pub fn with_offsets(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = Some(z);
        self
    }

    /// Set the start anchor from its camelCase string form. Unknown names
    /// leave the start position unset.
    pub fn with_start_position(mut self, name: &str) -> Self {
        self.start_position = AnchorName::parse(name);
        if self.start_position.is_none() {
            log::warn!("ignoring unknown start position {name:?}");
        }
        self
    }

    /// Sticky layout and viewport observation are active only while the
    /// control is not in reverse mode.
    pub(crate) fn anchored_layout_active(&self) -> bool {
        !self.reverse
    }
}
