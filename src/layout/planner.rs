//! Deterministic fallback placement
//!
//! Produces a complete placement set without any generative step: a
//! rule table drives initial positions, a bounded perturbation loop
//! resolves collisions, and the result carries the same symmetry
//! metadata shape an external proposer would supply, so post-processing
//! is agnostic to the placement source.

use std::collections::BTreeMap;

use crate::catalog::FurnitureItem;
use crate::layout::classify::{classify, SizeClass};
use crate::layout::config::LayoutConfig;
use crate::layout::diagnostics::{Diagnostic, DiagnosticCategory};
use crate::layout::symmetry::normalize_family_id;
use crate::layout::types::{
    clamp_center, Footprint, Placement, Room, RoomKind, Rotation, UtilizationReport,
};
use crate::layout::walls::select_wall;

/// A planned placement set plus the planner's own observations.
#[derive(Debug, Clone)]
pub struct PlannedLayout {
    pub placements: Vec<Placement>,
    pub utilization: UtilizationReport,
    pub diagnostics: Vec<Diagnostic>,
}

/// Where the bottom-wall overflow row starts, feet from the left wall.
const ROW_START: f64 = 2.0;

/// Zone position for a category as fractions of room width and length.
/// `slot` distinguishes the two members of a detected pair; unpaired
/// items take slot 0.
fn zone_for(kind: RoomKind, category: &str, slot: usize) -> Option<(f64, f64)> {
    let pair = |a: (f64, f64), b: (f64, f64)| if slot == 0 { a } else { b };
    match (kind, category) {
        (RoomKind::Bedroom, "nightstand") => Some(pair((0.15, 0.3), (0.15, 0.7))),
        (RoomKind::Bedroom, "desk") => Some((0.85, 0.8)),
        (RoomKind::Bedroom, "desk-chair") => Some((0.75, 0.8)),
        (RoomKind::Bedroom, "accent-chair") => Some(pair((0.25, 0.25), (0.75, 0.25))),
        (RoomKind::Bedroom, "table-lamp") => Some(pair((0.1, 0.9), (0.9, 0.9))),
        (RoomKind::Bedroom, "floor-lamp") => Some((0.9, 0.15)),
        (RoomKind::Bedroom, "rug") => Some((0.5, 0.5)),
        (RoomKind::Bedroom, "plant") => Some((0.08, 0.92)),
        (RoomKind::Bedroom, "bookshelf") => Some((0.92, 0.5)),
        (RoomKind::LivingRoom, "sofa") => Some((0.5, 0.85)),
        (RoomKind::LivingRoom, "coffee-table") => Some((0.5, 0.55)),
        (RoomKind::LivingRoom, "tv-stand") => Some((0.5, 0.08)),
        (RoomKind::LivingRoom, "accent-chair") => Some(pair((0.25, 0.25), (0.75, 0.25))),
        (RoomKind::LivingRoom, "side-table" | "end-table") => {
            Some(pair((0.15, 0.85), (0.85, 0.85)))
        }
        (RoomKind::LivingRoom, "table-lamp") => Some(pair((0.12, 0.88), (0.88, 0.88))),
        (RoomKind::LivingRoom, "floor-lamp") => Some((0.08, 0.92)),
        (RoomKind::LivingRoom, "rug") => Some((0.5, 0.5)),
        (RoomKind::LivingRoom, "bookshelf") => Some((0.92, 0.5)),
        (RoomKind::LivingRoom, "plant") => Some((0.08, 0.08)),
        _ => None,
    }
}

/// The fixed perturbation sequence for collision retries, relative to
/// the initial position: +2 ft in x three times, then x resets while y
/// steps +2 ft three times, then −2 ft in x with +1 ft in y for the
/// remaining attempts.
fn perturbed(base: (f64, f64), attempt: usize) -> (f64, f64) {
    let (bx, by) = base;
    match attempt {
        1..=3 => (bx + 2.0 * attempt as f64, by),
        4..=6 => (bx, by + 2.0 * (attempt - 3) as f64),
        _ => {
            let k = (attempt - 6) as f64;
            (bx - 2.0 * k, by + 6.0 + k)
        }
    }
}

fn collides(fp: &Footprint, placed: &[Footprint], clearance: f64) -> bool {
    placed
        .iter()
        .any(|other| fp.overlaps_with_clearance(other, clearance))
}

/// Plan positions for every item, higher-priority (larger) furniture
/// first. Never fails: collision-retry exhaustion and oversized items
/// degrade to best-effort positions with a diagnostic.
pub fn plan(room: &Room, items: &[FurnitureItem], config: &LayoutConfig) -> PlannedLayout {
    let mut diagnostics = Vec::new();

    // Pair membership by normalized family id, exactly-two families only
    let mut families: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, item) in items.iter().enumerate() {
        families
            .entry(normalize_family_id(&item.id))
            .or_default()
            .push(i);
    }
    let mut pair_slot: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for members in families.values() {
        if let &[a, b] = members.as_slice() {
            pair_slot.insert(a, (0, b));
            pair_slot.insert(b, (1, a));
        }
    }

    // Large pieces claim their spots first
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| {
        let d = &items[i].dimensions;
        (classify(d.length, d.width).priority, i)
    });

    let mut placements = Vec::with_capacity(items.len());
    let mut placed: Vec<Footprint> = Vec::with_capacity(items.len());
    let mut row_x = ROW_START;

    for &idx in &order {
        let item = &items[idx];
        let cls = classify(item.dimensions.length, item.dimensions.width);
        let (ew, el) = item.dimensions.oriented(Rotation::R0);
        let slot = pair_slot.get(&idx).map(|&(s, _)| s).unwrap_or(0);

        let (x0, y0, why) = match item.kind.as_str() {
            "bed-frame" => (
                ew / 2.0,
                room.center_y(),
                "flush against the left wall, vertically centered".to_string(),
            ),
            "dresser" => (
                room.width - ew / 2.0 - 1.0,
                room.center_y(),
                "against the right wall with a 1 ft margin".to_string(),
            ),
            kind => match zone_for(room.kind, kind, slot) {
                Some((fx, fy)) => (
                    fx * room.width,
                    fy * room.length,
                    format!("zone position for {kind}"),
                ),
                // Large pieces without a zone go flush against the best
                // wall; anything smaller joins the overflow row
                None if cls.class == SizeClass::Large => {
                    let anchor =
                        select_wall(room, item.dimensions.length, item.dimensions.width);
                    (
                        anchor.x,
                        anchor.y,
                        format!("flush against the {} wall", anchor.wall),
                    )
                }
                None => {
                    let x = row_x;
                    row_x += config.row_spacing;
                    (
                        x,
                        el / 2.0,
                        "overflow row along the front wall".to_string(),
                    )
                }
            },
        };

        // Accent pieces keep their wall clearance; everything else may
        // sit flush
        let margin = cls.wall_clearance;
        if ew > room.width - 2.0 * margin || el > room.length - 2.0 * margin {
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::Bounds,
                format!(
                    "'{}' ({:.1} x {:.1}) exceeds the usable room span; pinning to the room center",
                    item.id, ew, el
                ),
            ));
        }

        let base = (
            clamp_center(x0, ew / 2.0, room.width, margin),
            clamp_center(y0, el / 2.0, room.length, margin),
        );
        let mut fp = Footprint::new(base.0, base.1, ew, el);

        let mut attempt = 0;
        while attempt < config.max_collision_retries
            && collides(&fp, &placed, config.min_clearance)
        {
            attempt += 1;
            let (cx, cy) = perturbed(base, attempt);
            fp.x = clamp_center(cx, ew / 2.0, room.width, margin);
            fp.y = clamp_center(cy, el / 2.0, room.length, margin);
        }
        if collides(&fp, &placed, config.min_clearance) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::Collision,
                format!(
                    "retry budget exhausted for '{}'; accepting best-effort position ({:.2}, {:.2})",
                    item.id, fp.x, fp.y
                ),
            ));
        }

        let mut placement = Placement::new(&item.id, fp.x, fp.y).with_rationale(why);
        if let Some(&(_, partner_idx)) = pair_slot.get(&idx) {
            let partner = &items[partner_idx];
            if item.symmetry_eligible()
                && partner.symmetry_eligible()
                && !item.pair_exempt()
                && !partner.pair_exempt()
            {
                placement.symmetrical = true;
                placement.partner = Some(partner.id.clone());
            }
        }
        placements.push(placement);
        placed.push(fp);
    }

    let total_area: f64 = items.iter().map(|i| i.dimensions.footprint_area()).sum();
    let utilization = UtilizationReport::compute(total_area, room, config.optimal_utilization);
    if !utilization.is_optimal {
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::Utilization,
            format!(
                "space utilization {:.0}% is outside the comfortable {:.0}-{:.0}% band",
                utilization.ratio * 100.0,
                config.optimal_utilization.0 * 100.0,
                config.optimal_utilization.1 * 100.0,
            ),
        ));
    }

    PlannedLayout {
        placements,
        utilization,
        diagnostics,
    }
}
