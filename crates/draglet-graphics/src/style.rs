//! Styling values handed to the rendering collaborator.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        )
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    /// Default fill of the floating control.
    pub const YELLOW_GREEN: Color = Color::from_rgb_u8(154, 205, 50);
}

/// Shape the renderer draws the control with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderShape {
    #[default]
    Circle,
    Square,
}

/// Image the renderer may draw instead of the shape fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Uri(String),
    Resource(u32),
}
