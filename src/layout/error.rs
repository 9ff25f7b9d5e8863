//! Error types for the layout engine

use thiserror::Error;

use crate::layout::types::Room;

/// Errors that can occur during layout post-processing.
///
/// Only structurally missing input fails fast. Everything else — dangling
/// furniture references, out-of-bounds footprints, exhausted collision
/// retries — degrades to a diagnostic on the outcome instead.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Room dimensions violate the width > 0 and length > 0 invariant
    #[error("invalid room dimensions {width} x {length} ft (both must be positive)")]
    InvalidRoom { width: f64, length: f64 },

    /// No furniture catalog to resolve placements against
    #[error("furniture catalog is empty")]
    EmptyCatalog,
}

impl LayoutError {
    /// Create an invalid-room error from the offending room
    pub fn invalid_room(room: &Room) -> Self {
        Self::InvalidRoom {
            width: room.width,
            length: room.length,
        }
    }
}
