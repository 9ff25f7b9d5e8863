//! Core types for the layout engine
//!
//! Room coordinates use a y-up frame with the origin at the bottom-left
//! corner: x grows toward the right wall, y grows toward the back wall.
//! All dimensions are in feet.

use serde::{Deserialize, Serialize};

use crate::catalog::FurnitureItem;
use crate::layout::diagnostics::Diagnostic;

/// One of the four room walls.
///
/// Back is y = room.length, front is y = 0, left is x = 0, right is
/// x = room.width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Back,
    Front,
    Left,
    Right,
}

impl Wall {
    /// Horizontal walls run along the x axis (back and front).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Wall::Back | Wall::Front)
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Wall::Back => write!(f, "back"),
            Wall::Front => write!(f, "front"),
            Wall::Left => write!(f, "left"),
            Wall::Right => write!(f, "right"),
        }
    }
}

/// Room archetype; selects the zone table used by the fallback planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomKind {
    Bedroom,
    LivingRoom,
}

/// Kind of wall-mounted fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    Window,
    Door,
}

/// A window or door on one of the walls, with the clearance it needs.
///
/// Fixtures are carried through for rendering and evaluation consumers;
/// the placement algorithms themselves do not route around them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub kind: FixtureKind,
    pub wall: Wall,
    #[serde(default)]
    pub clearance: f64,
}

/// The room being furnished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Extent along the x axis, feet. Must be positive.
    pub width: f64,
    /// Extent along the y axis, feet. Must be positive.
    pub length: f64,
    /// Ceiling height, feet.
    pub height: f64,
    #[serde(default = "default_room_kind")]
    pub kind: RoomKind,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub styles: Vec<String>,
}

fn default_room_kind() -> RoomKind {
    RoomKind::Bedroom
}

impl Room {
    /// Create a bedroom with no fixtures or style tags.
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
            kind: RoomKind::Bedroom,
            fixtures: vec![],
            styles: vec![],
        }
    }

    /// Floor area in square feet.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.length / 2.0
    }

    /// Whether the dimensions satisfy the width > 0 and length > 0 invariant.
    pub fn has_valid_dimensions(&self) -> bool {
        self.width > 0.0 && self.length > 0.0
    }
}

/// Quarter-turn rotation of a furniture item.
///
/// 90 and 270 degrees swap the footprint's length and width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// True for 90 and 270 degrees, where length and width swap.
    pub fn swaps_axes(&self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> u16 {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(deg: u16) -> Result<Self, Self::Error> {
        match deg {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            other => Err(format!(
                "rotation must be one of 0, 90, 180, 270 (got {other})"
            )),
        }
    }
}

/// A proposed position for one furniture item.
///
/// Mutable while the post-processor runs; the finalized form handed back
/// to callers is [`FinalizedPlacement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub furniture_id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub rotation: Rotation,
    /// Free-text rationale for the position, from the proposer or planner.
    #[serde(default)]
    pub rationale: String,
    /// Whether this placement belongs to an enforced symmetrical pair.
    #[serde(default)]
    pub symmetrical: bool,
    /// The id of the pair partner, when symmetrical.
    #[serde(default)]
    pub partner: Option<String>,
}

impl Placement {
    pub fn new(furniture_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            furniture_id: furniture_id.into(),
            x,
            y,
            z: 0.0,
            rotation: Rotation::R0,
            rationale: String::new(),
            symmetrical: false,
            partner: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }
}

/// Axis-aligned rectangle derived from a placement and its item's rotated
/// dimensions. Ephemeral: recomputed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Extent along x (side-to-side after rotation).
    pub width: f64,
    /// Extent along y (head-to-foot after rotation).
    pub length: f64,
}

impl Footprint {
    pub fn new(x: f64, y: f64, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// Derive the footprint of a placement from its catalog item,
    /// applying the rotation axis swap.
    pub fn of(item: &FurnitureItem, placement: &Placement) -> Self {
        let (width, length) = item.dimensions.oriented(placement.rotation);
        Self::new(placement.x, placement.y, width, length)
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Top edge: y grows toward the back wall.
    pub fn top(&self) -> f64 {
        self.y + self.length / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y - self.length / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Strict axis-aligned overlap test. Rectangles that merely touch
    /// (shared edge) do not overlap.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        !(self.right() <= other.left()
            || other.right() <= self.left()
            || self.top() <= other.bottom()
            || other.top() <= self.bottom())
    }

    /// Overlap test with a required gap on each axis: true when the edge
    /// gap is below `clearance` on both axes.
    pub fn overlaps_with_clearance(&self, other: &Footprint, clearance: f64) -> bool {
        !(self.right() + clearance <= other.left()
            || other.right() + clearance <= self.left()
            || self.top() + clearance <= other.bottom()
            || other.top() + clearance <= self.bottom())
    }

    /// Whether the footprint lies inside the room, flush edges allowed.
    /// `epsilon` absorbs floating-point residue from clamping arithmetic.
    pub fn within_room(&self, room: &Room, epsilon: f64) -> bool {
        self.left() >= -epsilon
            && self.bottom() >= -epsilon
            && self.right() <= room.width + epsilon
            && self.top() <= room.length + epsilon
    }
}

/// Clamp a center coordinate so [center - half, center + half] stays inside
/// [margin, extent - margin]. Flush placement (zero distance to the wall) is
/// valid. An item wider than the available span pins to the midpoint.
pub fn clamp_center(center: f64, half_extent: f64, extent: f64, margin: f64) -> f64 {
    let lo = margin + half_extent;
    let hi = extent - margin - half_extent;
    if lo > hi {
        // Oversized item: no satisfiable range on this axis.
        return extent / 2.0;
    }
    center.clamp(lo, hi)
}

/// A placement finalized by the post-processor: immutable, render-ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedPlacement {
    pub furniture_id: String,
    pub x: f64,
    pub y: f64,
    /// Always 0.0: no vertical stacking in this engine.
    pub z: f64,
    pub rotation: Rotation,
    /// Render-order hint among mutually overlapping footprints; 0 paints
    /// first (bottom). Not a physical coordinate.
    pub layer_order: usize,
    pub placement_text: String,
}

/// Aggregate floor-space usage for a placement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationReport {
    /// Sum of the footprint areas, square feet.
    pub furniture_area: f64,
    pub room_area: f64,
    /// furniture_area / room_area.
    pub ratio: f64,
    /// Whether the ratio falls inside the configured comfortable band.
    pub is_optimal: bool,
}

impl UtilizationReport {
    /// Compute the report for a total furniture area against a room,
    /// judged against an inclusive `[low, high]` optimal band.
    pub fn compute(furniture_area: f64, room: &Room, band: (f64, f64)) -> Self {
        let room_area = room.area();
        let ratio = if room_area > 0.0 {
            furniture_area / room_area
        } else {
            0.0
        };
        Self {
            furniture_area,
            room_area,
            ratio,
            is_optimal: ratio >= band.0 && ratio <= band.1,
        }
    }
}

/// The complete result of one post-processing pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOutcome {
    /// Finalized placements in render order: ascending layer order,
    /// original order between non-overlapping items.
    pub placements: Vec<FinalizedPlacement>,
    pub utilization: UtilizationReport,
    /// Structured trace of every decision and recovery taken during the
    /// pass. Replaces console narration; callers wanting visibility read
    /// these fields.
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(x: f64, y: f64, w: f64, l: f64) -> Footprint {
        Footprint::new(x, y, w, l)
    }

    #[test]
    fn test_footprint_edges() {
        let f = fp(6.0, 5.0, 4.0, 2.0);
        assert_eq!(f.left(), 4.0);
        assert_eq!(f.right(), 8.0);
        assert_eq!(f.top(), 6.0);
        assert_eq!(f.bottom(), 4.0);
        assert_eq!(f.area(), 8.0);
    }

    #[test]
    fn test_overlap_self() {
        let f = fp(3.0, 3.0, 2.0, 2.0);
        assert!(f.overlaps(&f));
    }

    #[test]
    fn test_disjoint_on_x_axis() {
        let a = fp(1.0, 1.0, 2.0, 2.0);
        let b = fp(5.0, 1.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_on_y_axis() {
        let a = fp(1.0, 1.0, 2.0, 2.0);
        let b = fp(1.0, 8.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = fp(1.0, 1.0, 2.0, 2.0);
        let b = fp(3.0, 1.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_overlaps() {
        let rug = fp(5.0, 5.0, 8.0, 10.0);
        let lamp = fp(5.0, 5.0, 1.0, 1.0);
        assert!(rug.overlaps(&lamp));
        assert!(lamp.overlaps(&rug));
    }

    #[test]
    fn test_clearance_gap_detected() {
        // 0.1 ft gap on x, well separated otherwise
        let a = fp(1.0, 1.0, 2.0, 2.0);
        let b = fp(3.1, 1.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps_with_clearance(&b, 0.25));
        assert!(!a.overlaps_with_clearance(&b, 0.05));
    }

    #[test]
    fn test_clamp_allows_flush() {
        // half extent 2 in a 10 ft room: valid centers are [2, 8]
        assert_eq!(clamp_center(0.0, 2.0, 10.0, 0.0), 2.0);
        assert_eq!(clamp_center(9.9, 2.0, 10.0, 0.0), 8.0);
        assert_eq!(clamp_center(5.0, 2.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_clamp_with_margin() {
        assert_eq!(clamp_center(0.0, 1.0, 10.0, 1.0), 2.0);
        assert_eq!(clamp_center(10.0, 1.0, 10.0, 1.0), 8.0);
    }

    #[test]
    fn test_clamp_oversized_pins_midpoint() {
        // 12 ft item in a 10 ft room: range is empty, pin to center
        assert_eq!(clamp_center(1.0, 6.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_rotation_swaps_axes() {
        assert!(!Rotation::R0.swaps_axes());
        assert!(Rotation::R90.swaps_axes());
        assert!(!Rotation::R180.swaps_axes());
        assert!(Rotation::R270.swaps_axes());
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::try_from(90u16), Ok(Rotation::R90));
        assert!(Rotation::try_from(45u16).is_err());
    }

    #[test]
    fn test_within_room() {
        let room = Room::new(10.0, 12.0, 8.0);
        assert!(fp(5.0, 6.0, 10.0, 12.0).within_room(&room, 1e-9));
        assert!(!fp(5.0, 6.0, 10.1, 12.0).within_room(&room, 1e-9));
        assert!(!fp(-0.1, 6.0, 1.0, 1.0).within_room(&room, 1e-9));
    }

    #[test]
    fn test_room_from_toml() {
        let toml_str = r#"
width = 14.0
length = 12.0
height = 8.0
kind = "living-room"
styles = ["mid-century"]

[[fixtures]]
kind = "door"
wall = "front"
clearance = 3.0
"#;
        let room: Room = toml::from_str(toml_str).expect("should parse");
        assert_eq!(room.kind, RoomKind::LivingRoom);
        assert_eq!(room.fixtures.len(), 1);
        assert_eq!(room.fixtures[0].kind, FixtureKind::Door);
        assert_eq!(room.fixtures[0].wall, Wall::Front);
    }

    #[test]
    fn test_placement_from_toml() {
        let toml_str = r#"
furniture_id = "queen-bed"
x = 6.0
y = 6.75
rotation = 90
"#;
        let placement: Placement = toml::from_str(toml_str).expect("should parse");
        assert_eq!(placement.rotation, Rotation::R90);
        assert_eq!(placement.z, 0.0);
        assert!(!placement.symmetrical);
    }

    #[test]
    fn test_utilization_band() {
        let room = Room::new(10.0, 10.0, 8.0);
        let report = UtilizationReport::compute(20.0, &room, (0.15, 0.40));
        assert!((report.ratio - 0.2).abs() < 1e-12);
        assert!(report.is_optimal);

        let sparse = UtilizationReport::compute(5.0, &room, (0.15, 0.40));
        assert!(!sparse.is_optimal);

        let crowded = UtilizationReport::compute(55.0, &room, (0.15, 0.40));
        assert!(!crowded.is_optimal);
    }
}
