//! Symmetrical-pair detection and coordinate enforcement
//!
//! Furniture that ships in mirrored pairs (nightstands, side tables,
//! lamps) is detected by a naming convention on the item ids, then
//! rewritten to mirror-symmetric positions about the room's vertical
//! centerline, anchored to the bed where one exists.
//!
//! The id-suffix heuristic is fragile by nature and is isolated behind
//! [`normalize_family_id`] so it can be swapped without touching the
//! enforcement logic.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::layout::config::LayoutConfig;
use crate::layout::diagnostics::{Diagnostic, DiagnosticCategory};
use crate::layout::types::{Placement, Room, Rotation};

/// Trailing suffixes that mark pair membership, longest first so the
/// specific forms win over the bare ordinals.
const PAIR_SUFFIXES: [&str; 10] = [
    "-chair1", "-chair2", "-table1", "-table2", "-lamp1", "-lamp2", "-left", "-right", "-1", "-2",
];

/// Strip one trailing pair suffix (case-insensitive) from an item id,
/// yielding the shared base identity of a pair family. Ids without a
/// recognized suffix normalize to themselves.
pub fn normalize_family_id(id: &str) -> &str {
    for suffix in PAIR_SUFFIXES {
        if let Some(base) = strip_suffix_ignore_case(id, suffix) {
            return base;
        }
    }
    id
}

fn strip_suffix_ignore_case<'a>(id: &'a str, suffix: &str) -> Option<&'a str> {
    if id.len() < suffix.len() {
        return None;
    }
    let split = id.len() - suffix.len();
    if !id.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = id.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Run the bed-position rule and pair enforcement over the working
/// placements, recording every computed target in `diagnostics`.
/// Coordinates are written back only where the config enables it.
pub fn enforce(
    placements: &mut [Placement],
    room: &Room,
    catalog: &Catalog,
    config: &LayoutConfig,
    diagnostics: &mut Vec<Diagnostic>,
) {
    apply_bed_rule(placements, room, catalog, config, diagnostics);
    let bed_y = find_bed(placements, catalog).map(|i| placements[i].y);
    apply_pair_rule(placements, room, catalog, config, bed_y, diagnostics);
}

/// Index of the first placement classified as a bed, if any.
fn find_bed(placements: &[Placement], catalog: &Catalog) -> Option<usize> {
    placements
        .iter()
        .position(|p| catalog.get(&p.furniture_id).is_some_and(|item| item.is_bed()))
}

fn apply_bed_rule(
    placements: &mut [Placement],
    room: &Room,
    catalog: &Catalog,
    config: &LayoutConfig,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let beds: Vec<usize> = placements
        .iter()
        .enumerate()
        .filter(|(_, p)| catalog.get(&p.furniture_id).is_some_and(|item| item.is_bed()))
        .map(|(i, _)| i)
        .collect();

    let Some(&bed_idx) = beds.first() else {
        return;
    };
    if beds.len() > 1 {
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::BedPlacement,
            format!(
                "{} bed placements found; anchoring on '{}'",
                beds.len(),
                placements[bed_idx].furniture_id
            ),
        ));
    }

    let Some(item) = catalog.get(&placements[bed_idx].furniture_id) else {
        return;
    };

    // Headboard goes flush against the longer wall: the back wall when
    // the room is at least as wide as it is long, otherwise the left
    // wall with the bed turned a quarter.
    let (target_x, target_y, target_rot) = if room.width >= room.length {
        let (_, length) = item.dimensions.oriented(Rotation::R0);
        (room.center_x(), room.length - length / 2.0, Rotation::R0)
    } else {
        let (width, _) = item.dimensions.oriented(Rotation::R90);
        (width / 2.0, room.center_y(), Rotation::R90)
    };

    let applied = config.apply_bed_correction;
    diagnostics.push(Diagnostic::new(
        DiagnosticCategory::BedPlacement,
        format!(
            "preferred bed position for '{}' is ({:.2}, {:.2}) at {} degrees{}",
            placements[bed_idx].furniture_id,
            target_x,
            target_y,
            target_rot.degrees(),
            if applied {
                ""
            } else {
                " (observational; correction disabled)"
            },
        ),
    ));

    if applied {
        let bed = &mut placements[bed_idx];
        bed.x = target_x;
        bed.y = target_y;
        bed.rotation = target_rot;
        bed.rationale = format!(
            "bed anchored flush against the longer wall at ({:.2}, {:.2})",
            target_x, target_y
        );
    }
}

fn apply_pair_rule(
    placements: &mut [Placement],
    room: &Room,
    catalog: &Catalog,
    config: &LayoutConfig,
    bed_y: Option<f64>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // BTreeMap keeps diagnostic order independent of hash state
    let mut families: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, p) in placements.iter().enumerate() {
        families
            .entry(normalize_family_id(&p.furniture_id).to_string())
            .or_default()
            .push(i);
    }

    for (base, members) in &families {
        let [first, second] = members.as_slice() else {
            continue;
        };
        let (first, second) = (*first, *second);

        let (Some(item_a), Some(item_b)) = (
            catalog.get(&placements[first].furniture_id),
            catalog.get(&placements[second].furniture_id),
        ) else {
            continue;
        };

        if item_a.pair_exempt() || item_b.pair_exempt() {
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::Symmetry,
                format!("pair family '{base}' is a chair set; positions left as proposed"),
            ));
            continue;
        }
        if !(item_a.symmetry_eligible() && item_b.symmetry_eligible()) {
            continue;
        }

        // The member currently further left keeps the left slot
        let (left, right) = if placements[second].x < placements[first].x {
            (second, first)
        } else {
            (first, second)
        };
        let (left_w, _) = catalog
            .get(&placements[left].furniture_id)
            .map(|i| i.dimensions.oriented(placements[left].rotation))
            .unwrap_or((0.0, 0.0));
        let (right_w, _) = catalog
            .get(&placements[right].furniture_id)
            .map(|i| i.dimensions.oriented(placements[right].rotation))
            .unwrap_or((0.0, 0.0));

        let nightstands = item_a.is_nightstand() && item_b.is_nightstand();
        let (target_y, left_x, right_x) = if nightstands {
            // Flush against the side walls, level with the bed
            (
                bed_y.unwrap_or_else(|| room.center_y()),
                left_w / 2.0,
                room.width - right_w / 2.0,
            )
        } else {
            // Inset from the side walls, no lower than the room's middle
            let midpoint_y = (placements[left].y + placements[right].y) / 2.0;
            (
                room.center_y().max(midpoint_y),
                left_w / 2.0 + config.pair_margin,
                room.width - right_w / 2.0 - config.pair_margin,
            )
        };

        let applied = config.apply_pair_overrides;
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::Symmetry,
            format!(
                "pair family '{base}': mirrored targets x={left_x:.2}/{right_x:.2} at y={target_y:.2}{}",
                if applied {
                    ""
                } else {
                    " (computed only; overrides disabled)"
                },
            ),
        ));

        let left_id = placements[left].furniture_id.clone();
        let right_id = placements[right].furniture_id.clone();

        {
            let p = &mut placements[left];
            p.symmetrical = true;
            p.partner = Some(right_id.clone());
            if applied {
                p.x = left_x;
                p.y = target_y;
                p.rationale = format!(
                    "left half of mirrored pair '{base}', aligned at ({left_x:.2}, {target_y:.2})"
                );
            }
        }
        {
            let p = &mut placements[right];
            p.symmetrical = true;
            p.partner = Some(left_id);
            if applied {
                p.x = right_x;
                p.y = target_y;
                p.rationale = format!(
                    "right half of mirrored pair '{base}', aligned at ({right_x:.2}, {target_y:.2})"
                );
            }
        }
    }
}
