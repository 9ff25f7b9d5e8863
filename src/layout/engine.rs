//! Layout post-processing engine
//!
//! The top-level pipeline over a raw placement list, whether it came
//! from an external proposer or from the fallback planner:
//!
//! 1. Validate the structural inputs (room dimensions, catalog)
//! 2. Drop placements that reference unknown furniture ids
//! 3. Enforce symmetrical-pair positions and run the bed rule
//! 4. Derive footprints and assign render layers
//! 5. Compute space utilization and audit the finalized set
//!
//! The engine owns a working copy of the placements for the duration of
//! one call; there is no shared state between calls, and running the
//! pipeline on its own output is a no-op.

use crate::catalog::Catalog;
use crate::layout::config::LayoutConfig;
use crate::layout::diagnostics;
use crate::layout::error::LayoutError;
use crate::layout::layering;
use crate::layout::symmetry;
use crate::layout::types::{
    FinalizedPlacement, Footprint, LayoutOutcome, Placement, Room, UtilizationReport,
};
use crate::layout::validate_placements;

/// Post-process a raw placement list into a finalized, render-ready set.
///
/// Never fails for geometrically ugly layouts: overcrowding, overlap,
/// and bounds trouble all surface as diagnostics on the outcome. The
/// only errors are structurally missing inputs. An empty placement list
/// is valid and produces an empty outcome.
pub fn process(
    room: &Room,
    catalog: &Catalog,
    raw_placements: &[Placement],
    config: &LayoutConfig,
) -> Result<LayoutOutcome, LayoutError> {
    if !room.has_valid_dimensions() {
        return Err(LayoutError::invalid_room(room));
    }
    if catalog.is_empty() {
        return Err(LayoutError::EmptyCatalog);
    }

    let mut diagnostics = Vec::new();
    let mut working = validate_placements(raw_placements, catalog, &mut diagnostics);

    symmetry::enforce(&mut working, room, catalog, config, &mut diagnostics);

    let footprints: Vec<Footprint> = working
        .iter()
        .filter_map(|p| catalog.get(&p.furniture_id).map(|item| Footprint::of(item, p)))
        .collect();

    let layers = layering::assign_layers(&footprints);
    let order = layering::render_order(&layers);

    let placements: Vec<FinalizedPlacement> = order
        .iter()
        .map(|&i| {
            let p = &working[i];
            FinalizedPlacement {
                furniture_id: p.furniture_id.clone(),
                x: p.x,
                y: p.y,
                z: 0.0,
                rotation: p.rotation,
                layer_order: layers[i],
                placement_text: p.rationale.clone(),
            }
        })
        .collect();

    let total_area: f64 = footprints.iter().map(Footprint::area).sum();
    let utilization = UtilizationReport::compute(total_area, room, config.optimal_utilization);

    diagnostics.extend(diagnostics::audit(
        room,
        catalog,
        &placements,
        config.min_clearance,
    ));

    Ok(LayoutOutcome {
        placements,
        utilization,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimensions, FurnitureItem};
    use crate::layout::diagnostics::DiagnosticCategory;

    fn item(id: &str, kind: &str, l: f64, w: f64) -> FurnitureItem {
        FurnitureItem {
            id: id.to_string(),
            name: String::new(),
            kind: kind.to_string(),
            dimensions: Dimensions::new(l, w, 2.0),
            price: 0.0,
            styles: vec![],
        }
    }

    #[test]
    fn test_invalid_room_fails_fast() {
        let room = Room::new(0.0, 10.0, 8.0);
        let result = process(&room, &Catalog::default(), &[], &LayoutConfig::default());
        assert!(matches!(result, Err(LayoutError::InvalidRoom { .. })));
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        let room = Room::new(12.0, 10.0, 8.0);
        let catalog = Catalog::from_items(vec![]).unwrap();
        let result = process(&room, &catalog, &[], &LayoutConfig::default());
        assert!(matches!(result, Err(LayoutError::EmptyCatalog)));
    }

    #[test]
    fn test_empty_placements_is_valid() {
        let room = Room::new(12.0, 10.0, 8.0);
        let outcome = process(&room, &Catalog::default(), &[], &LayoutConfig::default()).unwrap();
        assert!(outcome.placements.is_empty());
        assert_eq!(outcome.utilization.furniture_area, 0.0);
    }

    #[test]
    fn test_dangling_reference_dropped_not_fatal() {
        let room = Room::new(12.0, 10.0, 8.0);
        let placements = vec![
            Placement::new("queen-bed", 6.0, 6.0),
            Placement::new("nightstnd-1", 2.0, 2.0),
        ];
        let outcome =
            process(&room, &Catalog::default(), &placements, &LayoutConfig::default()).unwrap();

        assert_eq!(outcome.placements.len(), 1);
        assert_eq!(outcome.placements[0].furniture_id, "queen-bed");
        let reference = outcome
            .diagnostics
            .iter()
            .find(|d| d.category == DiagnosticCategory::Reference)
            .expect("dropped reference should be diagnosed");
        assert!(reference.message.contains("nightstnd-1"));
        assert!(reference.message.contains("nightstand-1"));
    }

    #[test]
    fn test_z_always_zero() {
        let room = Room::new(12.0, 10.0, 8.0);
        let mut placement = Placement::new("queen-bed", 6.0, 6.0);
        placement.z = 3.0;
        let outcome =
            process(&room, &Catalog::default(), &[placement], &LayoutConfig::default()).unwrap();
        assert_eq!(outcome.placements[0].z, 0.0);
    }

    #[test]
    fn test_rug_under_lamp_layering() {
        let catalog = Catalog::from_items(vec![
            item("rug-big", "rug", 10.0, 8.0),
            item("lamp-tiny", "floor-lamp", 1.0, 1.0),
        ])
        .unwrap();
        let room = Room::new(12.0, 14.0, 8.0);
        let placements = vec![
            Placement::new("lamp-tiny", 6.0, 7.0),
            Placement::new("rug-big", 6.0, 7.0),
        ];
        let outcome = process(&room, &catalog, &placements, &LayoutConfig::default()).unwrap();

        // render order: rug first at layer 0, lamp on top
        assert_eq!(outcome.placements[0].furniture_id, "rug-big");
        assert_eq!(outcome.placements[0].layer_order, 0);
        assert_eq!(outcome.placements[1].furniture_id, "lamp-tiny");
        assert_eq!(outcome.placements[1].layer_order, 1);
    }

    #[test]
    fn test_utilization_metric() {
        let room = Room::new(10.0, 10.0, 8.0);
        let catalog = Catalog::from_items(vec![item("rug-1", "rug", 5.0, 4.0)]).unwrap();
        let placements = vec![Placement::new("rug-1", 5.0, 5.0)];
        let outcome = process(&room, &catalog, &placements, &LayoutConfig::default()).unwrap();
        assert!((outcome.utilization.ratio - 0.2).abs() < 1e-12);
        assert!(outcome.utilization.is_optimal);
    }

    #[test]
    fn test_process_is_idempotent() {
        let room = Room::new(12.0, 10.0, 8.0);
        let catalog = Catalog::default();
        let config = LayoutConfig::default();
        let raw = vec![
            Placement::new("queen-bed", 6.0, 6.75),
            Placement::new("nightstand-1", 2.0, 3.0),
            Placement::new("nightstand-2", 9.0, 8.0),
        ];
        let first = process(&room, &catalog, &raw, &config).unwrap();

        // feed the finalized output back through as raw placements
        let again: Vec<Placement> = first
            .placements
            .iter()
            .map(|f| {
                Placement::new(&f.furniture_id, f.x, f.y)
                    .with_rotation(f.rotation)
                    .with_rationale(&f.placement_text)
            })
            .collect();
        let second = process(&room, &catalog, &again, &config).unwrap();

        assert_eq!(first.placements, second.placements);
    }
}
