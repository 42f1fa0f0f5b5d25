//! Owned item snapshots reported by the inventory scanner.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::ItemQuality;
use crate::ItemId;

/// Where an owned stack was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemLocation {
    Inventory,
    Farmhouse,
    /// A named farm building (barn, shed, ...)
    Building(String),
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inventory => write!(f, "Inventory"),
            Self::Farmhouse => write!(f, "Farmhouse"),
            Self::Building(name) => write!(f, "{}", name),
        }
    }
}

/// A stack the player owns. Read-only snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedItemInfo {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub quality: ItemQuality,
    pub location: ItemLocation,
}

impl OwnedItemInfo {
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: u32,
        quality: ItemQuality,
        location: ItemLocation,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            quantity,
            quality,
            location,
        }
    }

    /// Whether this stack counts toward a requirement for `item_id` at `min_quality`.
    pub fn meets(&self, item_id: &ItemId, min_quality: ItemQuality) -> bool {
        &self.item_id == item_id && self.quality.satisfies(min_quality)
    }
}
