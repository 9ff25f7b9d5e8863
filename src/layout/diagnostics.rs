//! Structured diagnostics for the layout engine.
//!
//! Every decision and recovery the engine takes is recorded as data and
//! returned with the outcome; callers who want visibility read these
//! fields instead of scraping logs. The audit pass runs after layering
//! and checks the finalized set for mechanical defects: footprints
//! escaping the room and walkway gaps tighter than the configured
//! clearance.

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::layout::types::{FinalizedPlacement, Footprint, Room};

/// A single trace entry emitted during post-processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Category of diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCategory {
    /// Placement referencing an unknown furniture id (dropped).
    Reference,
    /// Symmetrical-pair detection and enforcement decisions.
    Symmetry,
    /// Bed-position analysis.
    BedPlacement,
    /// Footprint outside the room, or an item too large for an axis.
    Bounds,
    /// Collision-retry exhaustion or sub-clearance gaps.
    Collision,
    /// Space-utilization observations.
    Utilization,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Reference => write!(f, "reference"),
            DiagnosticCategory::Symmetry => write!(f, "symmetry"),
            DiagnosticCategory::BedPlacement => write!(f, "bed-placement"),
            DiagnosticCategory::Bounds => write!(f, "bounds"),
            DiagnosticCategory::Collision => write!(f, "collision"),
            DiagnosticCategory::Utilization => write!(f, "utilization"),
        }
    }
}

/// Tolerance for bounds checks: absorbs floating-point residue from
/// clamping arithmetic without masking real violations.
const BOUNDS_EPSILON: f64 = 1e-6;

/// Audit a finalized placement set.
///
/// Reports out-of-bounds footprints and pairs of non-overlapping items
/// whose edge gap is below `min_clearance` on both axes. Deliberate
/// overlap (a lamp standing on a rug) is legitimate layered rendering
/// and is not reported here.
pub fn audit(
    room: &Room,
    catalog: &Catalog,
    placements: &[FinalizedPlacement],
    min_clearance: f64,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let footprints: Vec<Option<(usize, Footprint)>> = placements
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let item = catalog.get(&p.furniture_id)?;
            let (width, length) = item.dimensions.oriented(p.rotation);
            Some((i, Footprint::new(p.x, p.y, width, length)))
        })
        .collect();
    let footprints: Vec<(usize, Footprint)> = footprints.into_iter().flatten().collect();

    for &(i, fp) in &footprints {
        if !fp.within_room(room, BOUNDS_EPSILON) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::Bounds,
                format!(
                    "'{}' extends outside the room: edges ({:.2}, {:.2})..({:.2}, {:.2}) in a {:.1} x {:.1} room",
                    placements[i].furniture_id,
                    fp.left(),
                    fp.bottom(),
                    fp.right(),
                    fp.top(),
                    room.width,
                    room.length,
                ),
            ));
        }
    }

    for (a_pos, &(i, a)) in footprints.iter().enumerate() {
        for &(j, b) in &footprints[a_pos + 1..] {
            if !a.overlaps(&b) && a.overlaps_with_clearance(&b, min_clearance) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCategory::Collision,
                    format!(
                        "'{}' and '{}' are closer than the {:.2} ft minimum clearance",
                        placements[i].furniture_id, placements[j].furniture_id, min_clearance,
                    ),
                ));
            }
        }
    }

    diagnostics
}
