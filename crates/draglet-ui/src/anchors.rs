//! The eight screen-edge anchors and nearest-anchor selection.

use draglet_foundation::{PlatformTraits, PositionModel, ViewportEvents};
use draglet_graphics::{Point, Size};
use smallvec::SmallVec;

/// Padding kept between an anchor and the screen edge, in logical pixels.
pub const ANCHOR_PADDING: f32 = 20.0;

/// Named anchor positions in their fixed enumeration order. The order
/// doubles as the tie-break for equidistant candidates: first listed wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorName {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl AnchorName {
    pub const ALL: [AnchorName; 8] = [
        AnchorName::TopLeft,
        AnchorName::TopMiddle,
        AnchorName::TopRight,
        AnchorName::MiddleLeft,
        AnchorName::MiddleRight,
        AnchorName::BottomLeft,
        AnchorName::BottomMiddle,
        AnchorName::BottomRight,
    ];

    /// Parse the camelCase config-string form. Unknown names resolve to
    /// `None`; callers treat that as "no anchor", never an error.
    pub fn parse(name: &str) -> Option<AnchorName> {
        match name {
            "topLeft" => Some(AnchorName::TopLeft),
            "topMiddle" => Some(AnchorName::TopMiddle),
            "topRight" => Some(AnchorName::TopRight),
            "middleLeft" => Some(AnchorName::MiddleLeft),
            "middleRight" => Some(AnchorName::MiddleRight),
            "bottomLeft" => Some(AnchorName::BottomLeft),
            "bottomMiddle" => Some(AnchorName::BottomMiddle),
            "bottomRight" => Some(AnchorName::BottomRight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorName::TopLeft => "topLeft",
            AnchorName::TopMiddle => "topMiddle",
            AnchorName::TopRight => "topRight",
            AnchorName::MiddleLeft => "middleLeft",
            AnchorName::MiddleRight => "middleRight",
            AnchorName::BottomLeft => "bottomLeft",
            AnchorName::BottomMiddle => "bottomMiddle",
            AnchorName::BottomRight => "bottomRight",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub name: AnchorName,
    pub position: Point,
}

/// Compute the eight anchor candidates for the current viewport.
///
/// Candidates are recomputed on demand rather than cached; a rotation simply
/// produces a fresh table on the next call.
pub fn compute_anchors(
    viewport: Size,
    render_size: f32,
    traits: &PlatformTraits,
) -> SmallVec<[Anchor; 8]> {
    let padding = ANCHOR_PADDING;
    let padding_right = padding * 2.0 + render_size;
    let width = viewport.width;
    let height = viewport.height;
    let middle_x = width / 2.0 - render_size;
    let right_x = width - padding_right;
    let bottom_y = height - padding_right - traits.bottom_inset;

    AnchorName::ALL
        .iter()
        .map(|&name| {
            let position = match name {
                AnchorName::TopLeft => Point::new(padding, padding),
                AnchorName::TopMiddle => Point::new(middle_x, padding),
                AnchorName::TopRight => Point::new(right_x, padding),
                AnchorName::MiddleLeft => Point::new(padding, height / 2.0),
                AnchorName::MiddleRight => Point::new(right_x, height / 2.0),
                AnchorName::BottomLeft => Point::new(padding, bottom_y),
                AnchorName::BottomMiddle => Point::new(middle_x, bottom_y),
                AnchorName::BottomRight => Point::new(right_x, bottom_y),
            };
            Anchor { name, position }
        })
        .collect()
}

/// Computes anchor candidates for the live viewport and repositions the
/// control onto them.
///
/// Cloning produces another handle over the same position/viewport state.
#[derive(Clone)]
pub struct AnchorSnapper {
    position: PositionModel,
    viewport: ViewportEvents,
    render_size: f32,
    traits: PlatformTraits,
}

impl AnchorSnapper {
    pub fn new(
        position: PositionModel,
        viewport: ViewportEvents,
        render_size: f32,
        traits: PlatformTraits,
    ) -> Self {
        Self {
            position,
            viewport,
            render_size,
            traits,
        }
    }

    /// The current candidate table.
    pub fn anchors(&self) -> SmallVec<[Anchor; 8]> {
        compute_anchors(self.viewport.size(), self.render_size, &self.traits)
    }

    /// Anchor with the strictly smallest Euclidean distance to `point`.
    /// Ties break toward the first-listed candidate.
    pub fn nearest(&self, point: Point) -> Anchor {
        let anchors = self.anchors();
        let mut best = anchors[0];
        let mut best_distance = point.distance_to(best.position);
        for anchor in anchors.iter().skip(1) {
            let distance = point.distance_to(anchor.position);
            if distance < best_distance {
                best = *anchor;
                best_distance = distance;
            }
        }
        best
    }

    /// Coordinates of a named anchor in the current viewport.
    pub fn anchor_position(&self, name: AnchorName) -> Point {
        self.anchors()
            .iter()
            .find(|anchor| anchor.name == name)
            .map(|anchor| anchor.position)
            // ALL covers every name, so the find above cannot miss.
            .unwrap_or(Point::ZERO)
    }

    /// Non-animated reposition onto the named anchor (mount, rotation).
    /// Idempotent: snapping twice to the same name yields the same position.
    pub fn snap_to(&self, name: AnchorName) {
        self.position.set_position(self.anchor_position(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapper(traits: PlatformTraits) -> AnchorSnapper {
        AnchorSnapper::new(
            PositionModel::new(Point::ZERO),
            ViewportEvents::new(Size::new(400.0, 800.0)),
            36.0,
            traits,
        )
    }

    #[test]
    fn anchor_table_for_overlay_platform() {
        let anchors = compute_anchors(Size::new(400.0, 800.0), 36.0, &PlatformTraits::overlay());
        let find = |name: AnchorName| {
            anchors
                .iter()
                .find(|anchor| anchor.name == name)
                .unwrap()
                .position
        };
        assert_eq!(find(AnchorName::TopLeft), Point::new(20.0, 20.0));
        assert_eq!(find(AnchorName::TopMiddle), Point::new(164.0, 20.0));
        assert_eq!(find(AnchorName::TopRight), Point::new(324.0, 20.0));
        assert_eq!(find(AnchorName::MiddleLeft), Point::new(20.0, 400.0));
        assert_eq!(find(AnchorName::MiddleRight), Point::new(324.0, 400.0));
        assert_eq!(find(AnchorName::BottomLeft), Point::new(20.0, 724.0));
        assert_eq!(find(AnchorName::BottomMiddle), Point::new(164.0, 724.0));
        assert_eq!(find(AnchorName::BottomRight), Point::new(324.0, 724.0));
    }

    #[test]
    fn soft_nav_bar_inset_lifts_the_bottom_row() {
        let anchors =
            compute_anchors(Size::new(400.0, 800.0), 36.0, &PlatformTraits::soft_nav_bar());
        let bottom_right = anchors
            .iter()
            .find(|anchor| anchor.name == AnchorName::BottomRight)
            .unwrap();
        assert_eq!(bottom_right.position, Point::new(324.0, 654.0));
        // Top row is unaffected by the inset.
        assert_eq!(anchors[0].position, Point::new(20.0, 20.0));
    }

    #[test]
    fn nearest_minimizes_euclidean_distance() {
        let snapper = snapper(PlatformTraits::overlay());
        assert_eq!(
            snapper.nearest(Point::new(25.0, 30.0)).name,
            AnchorName::TopLeft
        );
        assert_eq!(
            snapper.nearest(Point::new(350.0, 500.0)).name,
            AnchorName::MiddleRight
        );
        assert_eq!(
            snapper.nearest(Point::new(160.0, 700.0)).name,
            AnchorName::BottomMiddle
        );
    }

    #[test]
    fn equidistant_point_resolves_to_first_listed_anchor() {
        let snapper = snapper(PlatformTraits::overlay());
        // x = 92 sits exactly between topLeft (20, 20) and topMiddle (164, 20).
        let tied = snapper.nearest(Point::new(92.0, 20.0));
        assert_eq!(tied.name, AnchorName::TopLeft);
    }

    #[test]
    fn snap_to_is_idempotent() {
        let position = PositionModel::new(Point::ZERO);
        let snapper = AnchorSnapper::new(
            position.clone(),
            ViewportEvents::new(Size::new(400.0, 800.0)),
            36.0,
            PlatformTraits::overlay(),
        );
        snapper.snap_to(AnchorName::BottomRight);
        let first = position.position();
        snapper.snap_to(AnchorName::BottomRight);
        assert_eq!(position.position(), first);
        assert_eq!(first, Point::new(324.0, 724.0));
    }

    #[test]
    fn parse_round_trips_and_rejects_unknown_names() {
        for name in AnchorName::ALL {
            assert_eq!(AnchorName::parse(name.as_str()), Some(name));
        }
        assert_eq!(AnchorName::parse("bottomCentre"), None);
        assert_eq!(AnchorName::parse(""), None);
    }
}
