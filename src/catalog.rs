//! Furniture catalog: the read-only reference data the layout engine
//! resolves placements against.
//!
//! Catalogs load from TOML files and are keyed by item id. A built-in
//! starter catalog covers a typical bedroom so the crate works out of the
//! box without any external data.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::types::Rotation;

/// Errors that can occur when loading or parsing catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate furniture id '{0}'")]
    DuplicateId(String),
}

/// Ordered dimension triple of a furniture item, in feet.
///
/// Length is the head-to-foot axis, width the side-to-side axis.
/// Serialized as a `[length, width, height]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Floor area of the unrotated footprint.
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Effective `(width, length)` once a rotation is applied: quarter
    /// turns swap the two axes.
    pub fn oriented(&self, rotation: Rotation) -> (f64, f64) {
        if rotation.swaps_axes() {
            (self.length, self.width)
        } else {
            (self.width, self.length)
        }
    }
}

impl From<[f64; 3]> for Dimensions {
    fn from([length, width, height]: [f64; 3]) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl From<Dimensions> for [f64; 3] {
    fn from(d: Dimensions) -> [f64; 3] {
        [d.length, d.width, d.height]
    }
}

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// Unique id, referenced by placements.
    pub id: String,
    /// Display name, e.g. "Walnut Nightstand".
    #[serde(default)]
    pub name: String,
    /// Category slug, e.g. "bed-frame", "nightstand", "accent-chair".
    pub kind: String,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub styles: Vec<String>,
}

impl FurnitureItem {
    /// Beds are recognized by category or by display name, matching how
    /// upstream proposers label them.
    pub fn is_bed(&self) -> bool {
        self.kind == "bed-frame" || self.name.to_lowercase().contains("bed")
    }

    pub fn is_nightstand(&self) -> bool {
        self.kind == "nightstand" || self.name.to_lowercase().contains("nightstand")
    }

    /// Categories expected to appear in mirrored pairs. Checked against
    /// the explicit category slug OR a case-insensitive display-name
    /// substring; both signals are honored.
    pub fn symmetry_eligible(&self) -> bool {
        const KINDS: [&str; 5] = [
            "nightstand",
            "side-table",
            "end-table",
            "table-lamp",
            "floor-lamp",
        ];
        const NAMES: [&str; 5] = [
            "nightstand",
            "side table",
            "end table",
            "table lamp",
            "floor lamp",
        ];
        if KINDS.contains(&self.kind.as_str()) {
            return true;
        }
        let name = self.name.to_lowercase();
        NAMES.iter().any(|n| name.contains(n))
    }

    /// Chairs are never pair-mirrored, even when their ids pair up
    /// numerically; they keep whatever position they were given.
    pub fn pair_exempt(&self) -> bool {
        matches!(self.kind.as_str(), "accent-chair" | "dining-chair")
    }
}

/// A furniture catalog keyed by item id.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub name: Option<String>,
    pub description: Option<String>,
    items: Vec<FurnitureItem>,
    index: HashMap<String, usize>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    items: Vec<FurnitureItem>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in starter catalog: a typical queen bedroom set.
const DEFAULT_CATALOG: &str = r#"
[metadata]
name = "starter-bedroom"
description = "Built-in bedroom furniture set"

[[items]]
id = "queen-bed"
name = "Queen Bed"
kind = "bed-frame"
dimensions = [6.5, 5.0, 2.0]
price = 899.0
styles = ["modern"]

[[items]]
id = "nightstand-1"
name = "Walnut Nightstand"
kind = "nightstand"
dimensions = [1.5, 1.3, 2.0]
price = 129.0
styles = ["modern"]

[[items]]
id = "nightstand-2"
name = "Walnut Nightstand"
kind = "nightstand"
dimensions = [1.5, 1.3, 2.0]
price = 129.0
styles = ["modern"]

[[items]]
id = "dresser-1"
name = "Six-Drawer Dresser"
kind = "dresser"
dimensions = [4.5, 1.6, 2.6]
price = 549.0
styles = ["modern"]

[[items]]
id = "desk-1"
name = "Writing Desk"
kind = "desk"
dimensions = [4.0, 2.0, 2.5]
price = 379.0
styles = ["modern"]

[[items]]
id = "table-lamp-1"
name = "Ceramic Table Lamp"
kind = "table-lamp"
dimensions = [0.5, 0.5, 1.5]
price = 59.0
styles = ["modern"]

[[items]]
id = "table-lamp-2"
name = "Ceramic Table Lamp"
kind = "table-lamp"
dimensions = [0.5, 0.5, 1.5]
price = 59.0
styles = ["modern"]

[[items]]
id = "plant-1"
name = "Potted Fiddle-Leaf Fig"
kind = "plant"
dimensions = [1.0, 1.0, 3.0]
price = 35.0
styles = ["modern"]
"#;

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        let mut catalog = Self::from_items(parsed.items)?;
        catalog.name = parsed.metadata.as_ref().and_then(|m| m.name.clone());
        catalog.description = parsed.metadata.as_ref().and_then(|m| m.description.clone());
        Ok(catalog)
    }

    /// Build a catalog from already-constructed items, rejecting
    /// duplicate ids.
    pub fn from_items(items: Vec<FurnitureItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            name: None,
            description: None,
            items,
            index,
        })
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    /// All item ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("built-in catalog should be valid TOML")
    }
}
