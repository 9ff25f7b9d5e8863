//! Layout correction and layering engine
//!
//! This module takes a raw furniture placement list (from an external
//! proposer or the fallback planner) and enforces spatial validity:
//! symmetrical-pair positions, render layering for overlapping items,
//! bounds auditing, and space-utilization metrics.

pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod layering;
pub mod planner;
pub mod symmetry;
pub mod types;
pub mod walls;

pub use classify::{classify, Classification, SizeClass};
pub use config::LayoutConfig;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
pub use engine::process;
pub use error::LayoutError;
pub use planner::{plan, PlannedLayout};
pub use symmetry::normalize_family_id;
pub use types::*;
pub use walls::{select_wall, WallAnchor};

use crate::catalog::Catalog;

/// Filter a raw placement list down to entries whose furniture id
/// resolves in the catalog. Dropped entries are diagnosed — with nearby
/// catalog ids suggested where the id looks like a typo — and processing
/// continues; a dangling reference is never fatal.
pub fn validate_placements(
    placements: &[Placement],
    catalog: &Catalog,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Placement> {
    let mut kept = Vec::with_capacity(placements.len());
    for placement in placements {
        if catalog.get(&placement.furniture_id).is_some() {
            kept.push(placement.clone());
            continue;
        }
        let suggestions = find_similar(catalog, &placement.furniture_id, 2);
        let hint = if suggestions.is_empty() {
            String::new()
        } else {
            format!(" (closest catalog ids: {})", suggestions.join(", "))
        };
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::Reference,
            format!(
                "dropping placement for unknown furniture id '{}'{hint}",
                placement.furniture_id
            ),
        ));
    }
    kept
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Find catalog ids within a maximum edit distance of the target
fn find_similar(catalog: &Catalog, target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(usize, &str)> = catalog
        .ids()
        .filter_map(|id| {
            let dist = levenshtein_distance(id, target);
            (dist > 0 && dist <= max_distance).then_some((dist, id))
        })
        .collect();

    candidates.sort_by_key(|&(dist, _)| dist);
    candidates
        .into_iter()
        .map(|(_, id)| id.to_string())
        .take(3)
        .collect()
}
