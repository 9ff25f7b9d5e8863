//! Room Arranger - deterministic furniture layout correction
//!
//! This library post-processes furniture placements for a room: it
//! enforces symmetrical-pair positions, assigns render layering for
//! overlapping items, audits bounds, and reports space utilization.
//! When no placements are supplied (no generative proposer available),
//! a deterministic fallback planner produces the full set.
//!
//! # Example
//!
//! ```rust
//! use room_arranger::{arrange, Catalog, Placement, Room};
//!
//! let room = Room::new(12.0, 10.0, 8.0);
//! let catalog = Catalog::default();
//!
//! // post-process a proposer's raw placements
//! let raw = vec![
//!     Placement::new("queen-bed", 6.0, 6.75),
//!     Placement::new("nightstand-1", 2.0, 3.0),
//!     Placement::new("nightstand-2", 9.0, 8.0),
//! ];
//! let outcome = arrange(&room, &catalog, &raw).unwrap();
//!
//! // both nightstands end up level with the bed, flush to the walls
//! assert_eq!(outcome.placements.len(), 3);
//! ```

pub mod catalog;
pub mod layout;

pub use catalog::{Catalog, CatalogError, Dimensions, FurnitureItem};
pub use layout::{
    classify, normalize_family_id, plan, process, Classification, Diagnostic, DiagnosticCategory,
    FinalizedPlacement, Fixture, FixtureKind, Footprint, LayoutConfig, LayoutError, LayoutOutcome,
    Placement, PlannedLayout, Room, RoomKind, Rotation, SizeClass, UtilizationReport, Wall,
};

/// Post-process placements with the default configuration.
///
/// An empty placement list engages the fallback planner over the whole
/// catalog, so this single entry point covers both the proposer-driven
/// and the planner-driven paths.
///
/// # Example
///
/// ```rust
/// use room_arranger::{arrange, Catalog, Room};
///
/// // no proposer: the planner furnishes the room from the catalog
/// let outcome = arrange(&Room::new(12.0, 10.0, 8.0), &Catalog::default(), &[]).unwrap();
/// assert!(!outcome.placements.is_empty());
/// ```
pub fn arrange(
    room: &Room,
    catalog: &Catalog,
    placements: &[Placement],
) -> Result<LayoutOutcome, LayoutError> {
    arrange_with_config(room, catalog, placements, &LayoutConfig::default())
}

/// Post-process placements with a custom configuration.
///
/// # Example
///
/// ```rust
/// use room_arranger::{arrange_with_config, Catalog, LayoutConfig, Placement, Room};
///
/// // observe the symmetry targets without rewriting coordinates
/// let config = LayoutConfig::default().with_pair_overrides(false);
/// let raw = vec![
///     Placement::new("nightstand-1", 2.0, 3.0),
///     Placement::new("nightstand-2", 9.0, 8.0),
/// ];
/// let outcome =
///     arrange_with_config(&Room::new(12.0, 10.0, 8.0), &Catalog::default(), &raw, &config)
///         .unwrap();
/// assert_eq!(outcome.placements[0].x, 2.0);
/// ```
pub fn arrange_with_config(
    room: &Room,
    catalog: &Catalog,
    placements: &[Placement],
    config: &LayoutConfig,
) -> Result<LayoutOutcome, LayoutError> {
    if placements.is_empty() {
        let planned = plan(room, catalog.items(), config);
        let mut outcome = process(room, catalog, &planned.placements, config)?;
        // planner observations come first in the trace
        let mut diagnostics = planned.diagnostics;
        diagnostics.extend(outcome.diagnostics);
        outcome.diagnostics = diagnostics;
        Ok(outcome)
    } else {
        process(room, catalog, placements, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrange_post_processes_proposal() {
        let room = Room::new(12.0, 10.0, 8.0);
        let catalog = Catalog::default();
        let raw = vec![
            Placement::new("queen-bed", 6.0, 6.75),
            Placement::new("nightstand-1", 2.0, 3.0),
            Placement::new("nightstand-2", 9.0, 8.0),
        ];
        let outcome = arrange(&room, &catalog, &raw).unwrap();

        let left = outcome
            .placements
            .iter()
            .find(|p| p.furniture_id == "nightstand-1")
            .unwrap();
        assert!((left.x - 0.65).abs() < 0.01);
        assert_eq!(left.y, 6.75);
    }

    #[test]
    fn test_arrange_empty_runs_planner() {
        let room = Room::new(12.0, 10.0, 8.0);
        let catalog = Catalog::default();
        let outcome = arrange(&room, &catalog, &[]).unwrap();
        assert_eq!(outcome.placements.len(), catalog.len());
    }

    #[test]
    fn test_arrange_invalid_room_errors() {
        let room = Room::new(-1.0, 10.0, 8.0);
        let result = arrange(&room, &Catalog::default(), &[]);
        assert!(matches!(result, Err(LayoutError::InvalidRoom { .. })));
    }

    #[test]
    fn test_planner_diagnostics_precede_audit() {
        // an uncomfortably crowded room: the planner's utilization note
        // must survive into the final trace
        let room = Room::new(8.0, 7.0, 8.0);
        let catalog = Catalog::default();
        let outcome = arrange(&room, &catalog, &[]).unwrap();
        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Utilization));
    }
}
