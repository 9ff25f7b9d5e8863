//! Furniture size classification
//!
//! Maps a footprint to a size class, placement priority, and required
//! wall clearance. Downstream ordering and wall decisions depend on the
//! exact thresholds, so the cascade is kept verbatim:
//!
//! 1. length > 5 OR width > 3 OR area > 15  -> Large, priority 1, flush
//! 2. area > 6 OR (length > 2 AND width > 1.5) -> Medium, priority 2, flush
//! 3. area > 2 -> Small, priority 3, flush
//! 4. otherwise -> Accent, priority 4, kept 1 ft off walls
//!
//! Rules are evaluated in order and the first match wins; all
//! comparisons are strict. The ordering is a deliberate heuristic
//! tie-break.

use std::fmt;

use serde::Serialize;

/// Size class of a furniture footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Large,
    Medium,
    Small,
    Accent,
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeClass::Large => write!(f, "large"),
            SizeClass::Medium => write!(f, "medium"),
            SizeClass::Small => write!(f, "small"),
            SizeClass::Accent => write!(f, "accent"),
        }
    }
}

/// Classification result for one footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub class: SizeClass,
    /// Placement priority, 1 = highest (placed first).
    pub priority: u8,
    /// Required distance from walls, feet. Zero means flush is fine.
    pub wall_clearance: f64,
    pub area: f64,
}

/// Accent pieces (lamps, plants) stay this far off the walls.
const ACCENT_WALL_CLEARANCE: f64 = 1.0;

/// Classify a furniture footprint by its unrotated (length, width).
/// Height plays no part in classification. Pure and total.
pub fn classify(length: f64, width: f64) -> Classification {
    let area = length * width;

    if length > 5.0 || width > 3.0 || area > 15.0 {
        // Beds, sofas, large rugs
        Classification {
            class: SizeClass::Large,
            priority: 1,
            wall_clearance: 0.0,
            area,
        }
    } else if area > 6.0 || (length > 2.0 && width > 1.5) {
        // Dressers, desks
        Classification {
            class: SizeClass::Medium,
            priority: 2,
            wall_clearance: 0.0,
            area,
        }
    } else if area > 2.0 {
        // Nightstands, chairs
        Classification {
            class: SizeClass::Small,
            priority: 3,
            wall_clearance: 0.0,
            area,
        }
    } else {
        // Lamps, plants
        Classification {
            class: SizeClass::Accent,
            priority: 4,
            wall_clearance: ACCENT_WALL_CLEARANCE,
            area,
        }
    }
}
