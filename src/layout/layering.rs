//! Render-order layering for overlapping footprints
//!
//! Larger furniture (rugs, beds) should paint beneath the smaller pieces
//! that sit on or near them (lamps, decor). This module groups directly
//! overlapping footprints and ranks each group by area, largest first.
//!
//! Clustering is single-hop: a seed item groups with every later item
//! that overlaps the seed itself, not with items that only overlap other
//! group members. A chain of partially-overlapping items can therefore
//! land in separate clusters. This mirrors the established behavior;
//! transitive closure would merge such chains and is a known candidate
//! change.

use std::cmp::Ordering;

use crate::layout::types::Footprint;

/// Assign a layer order to every footprint.
///
/// Items are visited in input order. Each unassigned item seeds a
/// cluster of the later unassigned items that overlap it directly; the
/// cluster is sorted by area descending (stable, so equal areas keep
/// their input order) and the rank becomes the layer order, 0 at the
/// bottom. Non-overlapping items each form a singleton cluster with
/// layer 0.
pub fn assign_layers(footprints: &[Footprint]) -> Vec<usize> {
    let n = footprints.len();
    let mut layers = vec![0usize; n];
    let mut assigned = vec![false; n];

    for seed in 0..n {
        if assigned[seed] {
            continue;
        }
        let mut group = vec![seed];
        for later in seed + 1..n {
            if !assigned[later] && footprints[seed].overlaps(&footprints[later]) {
                group.push(later);
            }
        }

        // Largest area paints first; stable sort preserves input order on ties
        group.sort_by(|&a, &b| {
            footprints[b]
                .area()
                .partial_cmp(&footprints[a].area())
                .unwrap_or(Ordering::Equal)
        });

        for (rank, &idx) in group.iter().enumerate() {
            layers[idx] = rank;
            assigned[idx] = true;
        }
    }

    layers
}

/// Indices in render order: ascending layer order across the whole set,
/// original index as the stable secondary key. Layer 0 paints first.
pub fn render_order(layers: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..layers.len()).collect();
    order.sort_by_key(|&i| (layers[i], i));
    order
}
