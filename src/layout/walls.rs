//! Wall selection for flush furniture placement
//!
//! Ranks the four room walls for a furniture footprint and returns the
//! anchor that puts the item's far edge flush against the chosen wall,
//! centered along it. Selection never fails: when nothing fits, the back
//! wall is returned anyway and the bounds audit surfaces the problem.

use crate::layout::types::{Room, Wall};

/// A chosen wall plus the flush anchor center for the footprint that was
/// ranked against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallAnchor {
    pub wall: Wall,
    pub x: f64,
    pub y: f64,
}

/// Usable span of a wall: horizontal walls run the room's width,
/// vertical walls its length.
fn span(wall: Wall, room: &Room) -> f64 {
    if wall.is_horizontal() {
        room.width
    } else {
        room.length
    }
}

/// A wall qualifies when its span covers the furniture's cross
/// dimension: width against horizontal walls, length against vertical
/// ones (the item keeps its orientation, length along y).
fn fits(wall: Wall, room: &Room, length: f64, width: f64) -> bool {
    if wall.is_horizontal() {
        width <= room.width
    } else {
        length <= room.length
    }
}

/// Anchor center for a footprint flush against a wall, centered along
/// the wall's span. The perpendicular offset is half the dimension
/// facing the wall.
fn anchor(wall: Wall, room: &Room, length: f64, width: f64) -> (f64, f64) {
    match wall {
        Wall::Back => (room.center_x(), room.length - length / 2.0),
        Wall::Front => (room.center_x(), length / 2.0),
        Wall::Left => (width / 2.0, room.center_y()),
        Wall::Right => (room.width - width / 2.0, room.center_y()),
    }
}

/// Candidate order; also the tie-break when spans are equal.
const CANDIDATES: [Wall; 4] = [Wall::Back, Wall::Right, Wall::Left, Wall::Front];

/// Pick the best wall for a footprint of the given unrotated
/// (length, width): the back wall when it qualifies, otherwise the
/// qualifying wall with the greatest span, otherwise back regardless.
pub fn select_wall(room: &Room, length: f64, width: f64) -> WallAnchor {
    let wall = if fits(Wall::Back, room, length, width) {
        Wall::Back
    } else {
        let mut best: Option<Wall> = None;
        for candidate in CANDIDATES {
            if !fits(candidate, room, length, width) {
                continue;
            }
            match best {
                Some(current) if span(candidate, room) <= span(current, room) => {}
                _ => best = Some(candidate),
            }
        }
        best.unwrap_or(Wall::Back)
    };

    let (x, y) = anchor(wall, room, length, width);
    WallAnchor { wall, x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_wall_preferred() {
        let room = Room::new(12.0, 10.0, 8.0);
        let choice = select_wall(&room, 6.5, 5.0);
        assert_eq!(choice.wall, Wall::Back);
        assert_eq!(choice.x, 6.0);
        // far edge flush: top of the footprint sits at y = 10
        assert_eq!(choice.y, 10.0 - 6.5 / 2.0);
    }

    #[test]
    fn test_side_wall_when_too_wide_for_back() {
        // 7 ft wide furniture in a 6 ft wide, 12 ft long room: horizontal
        // walls cannot host it, vertical ones can
        let room = Room::new(6.0, 12.0, 8.0);
        let choice = select_wall(&room, 4.0, 7.0);
        assert_eq!(choice.wall, Wall::Right);
        assert_eq!(choice.x, 6.0 - 3.5);
        assert_eq!(choice.y, 6.0);
    }

    #[test]
    fn test_nothing_fits_falls_back_to_back_wall() {
        let room = Room::new(4.0, 4.0, 8.0);
        let choice = select_wall(&room, 6.0, 6.0);
        assert_eq!(choice.wall, Wall::Back);
        // anchor still computed; the bounds audit catches the overflow
        assert_eq!(choice.y, 4.0 - 3.0);
    }

    #[test]
    fn test_flush_anchor_left_wall() {
        let room = Room::new(10.0, 8.0, 8.0);
        let (x, y) = anchor(Wall::Left, &room, 4.0, 2.0);
        assert_eq!(x, 1.0);
        assert_eq!(y, 4.0);
    }

    #[test]
    fn test_flush_anchor_front_wall() {
        let room = Room::new(10.0, 8.0, 8.0);
        let (x, y) = anchor(Wall::Front, &room, 3.0, 2.0);
        assert_eq!(x, 5.0);
        assert_eq!(y, 1.5);
    }
}
