//! Consumer-facing bundle result types.
//!
//! Pure data handed to the presentation layer. Derived properties only.

use serde::Serialize;

use crate::entities::{BundleInfo, BundleItem, BundleSlot, OwnedItemInfo};
use crate::value_objects::{rounded_percent, ItemAvailability};
use crate::ItemId;

/// Completed vs total count with a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionCount {
    pub completed: u32,
    pub total: u32,
    pub percent: u32,
}

impl CompletionCount {
    pub fn new(completed: u32, total: u32) -> Self {
        Self {
            completed,
            total,
            percent: rounded_percent(completed, total),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Bundle completion within one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomProgress {
    pub room: String,
    pub bundles: CompletionCount,
    /// The game's own record that the room reward was granted
    pub reward_granted: bool,
}

/// How many unfilled slots the player could fill right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadyCount {
    pub ready: u32,
    /// Unfilled slots
    pub total: u32,
}

impl ReadyCount {
    /// True when every unfilled slot has something owned to put in it.
    pub fn all_ready(&self) -> bool {
        self.ready >= self.total
    }
}

/// Per-bundle item counts for a room view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleItemCount {
    pub bundle_name: String,
    pub total_items: u32,
    pub completed_items: u32,
    pub is_complete: bool,
}

/// One slot together with what the player could put in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotMatchInfo {
    pub slot: BundleSlot,
    pub is_filled: bool,
    pub has_owned_item: bool,
    pub owned_item: Option<OwnedItemInfo>,
}

/// "What do I still need" view of a single bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleDetails {
    pub name: String,
    pub room: String,
    pub is_complete: bool,
    pub total_slots: u32,
    pub filled_slots: u32,
    pub slots_required: u32,
    /// Unfilled slots in bundle order, each with all of its alternatives
    pub missing_slots: Vec<BundleSlot>,
}

impl BundleDetails {
    pub fn from_bundle(bundle: &BundleInfo) -> Self {
        Self {
            name: bundle.name().to_string(),
            room: bundle.room().to_string(),
            is_complete: bundle.is_complete(),
            total_slots: bundle.slot_count(),
            filled_slots: bundle.filled_slot_count(),
            slots_required: bundle.slots_required(),
            missing_slots: bundle.unfilled_slots().cloned().collect(),
        }
    }

    /// Slots still to fill before the bundle completes.
    pub fn slots_remaining(&self) -> u32 {
        self.slots_required.saturating_sub(self.filled_slots)
    }
}

/// Incomplete bundles split by whether anything they need is obtainable today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleAvailabilitySummary {
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
}

impl BundleAvailabilitySummary {
    pub fn total(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }
}

/// Alert raised when the player picks up something a bundle still needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleNotification {
    pub item_id: ItemId,
    pub item_name: String,
    /// Bundles needing the item, in provider order
    pub bundle_names: Vec<String>,
    pub message: String,
}

/// Availability of a slot's primary candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub slot_index: u32,
    pub item: BundleItem,
    pub availability: ItemAvailability,
}
