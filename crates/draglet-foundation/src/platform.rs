//! Platform capabilities resolved once at startup.
//!
//! Layout and anchor computation consume these values uniformly instead of
//! branching on a platform identifier at every call site.

/// Bottom inset reserved for a soft navigation bar, in logical pixels.
pub const SOFT_NAV_BAR_INSET: f32 = 70.0;

/// Stacking order assigned to the control when the platform honors z-index
/// and the caller did not pick one.
pub const DEFAULT_Z_INDEX: i32 = 999;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformTraits {
    /// Extra space kept clear above the bottom screen edge.
    pub bottom_inset: f32,
    /// Whether absolute stacking order is available. When it is not, the
    /// control's container is sized to the full viewport instead.
    pub supports_z_index: bool,
}

impl PlatformTraits {
    /// Platform with native absolute stacking and no reserved bottom edge.
    pub fn overlay() -> Self {
        Self {
            bottom_inset: 0.0,
            supports_z_index: true,
        }
    }

    /// Platform that reserves room for a soft navigation bar and ignores
    /// z-index.
    pub fn soft_nav_bar() -> Self {
        Self {
            bottom_inset: SOFT_NAV_BAR_INSET,
            supports_z_index: false,
        }
    }
}

impl Default for PlatformTraits {
    fn default() -> Self {
        Self::overlay()
    }
}
