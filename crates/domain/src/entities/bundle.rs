//! Bundle catalog - donation requirements grouped into rooms
//!
//! A bundle is a list of slots. Each slot accepts any one of its candidate
//! items (an OR-set) at or above that candidate's minimum quality.
//!
//! # Invariants
//!
//! - A slot is either filled or not, never partially.
//! - `is_complete() == (filled_slot_count() >= slots_required())`.
//! - The slot list is fixed at construction. Updated fill state arrives as a
//!   freshly built `BundleInfo` from the provider, never as an in-place edit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::names_match;
use crate::value_objects::ItemQuality;
use crate::ItemId;

/// One candidate item for a slot.
///
/// # Simple Data Struct
///
/// Any combination of values is valid, so fields are public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleItem {
    pub item_id: ItemId,
    pub name: String,
    /// How many must be donated at once
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub min_quality: ItemQuality,
}

fn default_quantity() -> u32 {
    1
}

impl BundleItem {
    pub fn new(item_id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            quantity: 1,
            min_quality: ItemQuality::Normal,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_min_quality(mut self, min_quality: ItemQuality) -> Self {
        self.min_quality = min_quality;
        self
    }

    /// Short label such as `"5 Parsnip (Gold+)"`.
    pub fn label(&self) -> String {
        let mut label = if self.quantity > 1 {
            format!("{} {}", self.quantity, self.name)
        } else {
            self.name.clone()
        };
        if self.min_quality > ItemQuality::Normal {
            label.push_str(&format!(" ({}+)", self.min_quality));
        }
        label
    }
}

/// One fillable position in a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSlot {
    index: u32,
    /// Alternatives in declared order; order decides which match wins
    items: Vec<BundleItem>,
    #[serde(default)]
    filled: bool,
    #[serde(default)]
    filled_by: Option<ItemId>,
}

impl BundleSlot {
    pub fn new(index: u32, items: Vec<BundleItem>) -> Self {
        Self {
            index,
            items,
            filled: false,
            filled_by: None,
        }
    }

    /// Single-candidate slot.
    pub fn single(index: u32, item: BundleItem) -> Self {
        Self::new(index, vec![item])
    }

    /// Marks the slot filled without recording which item filled it.
    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    /// Marks the slot filled by `item_id`.
    pub fn filled_with(mut self, item_id: impl Into<ItemId>) -> Self {
        self.filled = true;
        self.filled_by = Some(item_id.into());
        self
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn items(&self) -> &[BundleItem] {
        &self.items
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    #[inline]
    pub fn filled_by(&self) -> Option<&ItemId> {
        self.filled_by.as_ref()
    }

    /// True when more than one item can satisfy this slot.
    pub fn is_or_requirement(&self) -> bool {
        self.items.len() > 1
    }

    /// First declared candidate.
    pub fn primary_item(&self) -> Option<&BundleItem> {
        self.items.first()
    }

    /// Whether `item_id` is one of this slot's candidates.
    pub fn accepts(&self, item_id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.item_id == item_id)
    }
}

/// A named bundle in a room.
///
/// # Example
///
/// ```
/// use perfection_domain::{BundleInfo, BundleItem, BundleSlot};
///
/// let bundle = BundleInfo::new("Spring Crops", "Pantry").with_slots(vec![
///     BundleSlot::single(0, BundleItem::new("(O)24", "Parsnip")).filled_with("(O)24"),
///     BundleSlot::single(1, BundleItem::new("(O)188", "Green Bean")),
/// ]);
///
/// assert_eq!(bundle.slots_required(), 2);
/// assert_eq!(bundle.filled_slot_count(), 1);
/// assert!(!bundle.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleInfo {
    name: String,
    room: String,
    #[serde(default)]
    slots: Vec<BundleSlot>,
    /// Legacy view: item ids already donated
    #[serde(default)]
    contributed: BTreeSet<ItemId>,
    /// Slots needed to complete; 0 means every slot
    #[serde(default)]
    required_slots: u32,
    /// Legacy display quota, not used for completion
    #[serde(default)]
    item_count_to_complete: u32,
}

impl BundleInfo {
    pub fn new(name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
            slots: Vec::new(),
            contributed: BTreeSet::new(),
            required_slots: 0,
            item_count_to_complete: 0,
        }
    }

    // =========================================================================
    // Construction (builder)
    // =========================================================================

    pub fn with_slots(mut self, slots: Vec<BundleSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Remix bundles need fewer slots than they list. 0 restores "every slot".
    pub fn with_required_slots(mut self, required_slots: u32) -> Self {
        self.required_slots = required_slots;
        self
    }

    pub fn with_item_count_to_complete(mut self, count: u32) -> Self {
        self.item_count_to_complete = count;
        self
    }

    pub fn with_contributed<I>(mut self, item_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        self.contributed = item_ids.into_iter().map(Into::into).collect();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn room(&self) -> &str {
        &self.room
    }

    #[inline]
    pub fn slots(&self) -> &[BundleSlot] {
        &self.slots
    }

    #[inline]
    pub fn contributed(&self) -> &BTreeSet<ItemId> {
        &self.contributed
    }

    #[inline]
    pub fn item_count_to_complete(&self) -> u32 {
        self.item_count_to_complete
    }

    /// Case-insensitive name check.
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn is_in_room(&self, room: &str) -> bool {
        names_match(&self.room, room)
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn slot_count(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn has_slot_data(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Number of slots that must be filled for completion.
    pub fn slots_required(&self) -> u32 {
        if self.required_slots == 0 {
            self.slot_count()
        } else {
            self.required_slots
        }
    }

    pub fn filled_slot_count(&self) -> u32 {
        self.slots.iter().filter(|slot| slot.is_filled()).count() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.filled_slot_count() >= self.slots_required()
    }

    pub fn unfilled_slots(&self) -> impl Iterator<Item = &BundleSlot> {
        self.slots.iter().filter(|slot| !slot.is_filled())
    }

    /// Whether any unfilled slot would accept `item_id`.
    pub fn needs_item(&self, item_id: &ItemId) -> bool {
        !self.is_complete() && self.unfilled_slots().any(|slot| slot.accepts(item_id))
    }
}
