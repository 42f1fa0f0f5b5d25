//! Bundle matcher.
//!
//! Decides whether the player can fill a slot from what they own. Candidates
//! are tried in declared order and the first owned one wins.

use std::sync::Arc;

use perfection_domain::{BundleInfo, BundleSlot, OwnedItemInfo, ReadyCount, SlotMatchInfo};

use crate::infrastructure::ports::OwnershipQuery;

/// Slot matching against the owned-item snapshot.
pub struct BundleMatcher {
    ownership: Arc<dyn OwnershipQuery>,
}

impl BundleMatcher {
    pub fn new(ownership: Arc<dyn OwnershipQuery>) -> Self {
        Self { ownership }
    }

    /// First owned stack that satisfies one of the slot's candidates.
    ///
    /// Candidates are checked in slot order; the first candidate with any
    /// qualifying stack wins even if a later candidate is also owned.
    pub fn find_match(&self, slot: &BundleSlot) -> Option<OwnedItemInfo> {
        slot.items().iter().find_map(|candidate| {
            self.ownership
                .owned_items(&candidate.item_id, candidate.min_quality)
                .into_iter()
                .find(|owned| owned.meets(&candidate.item_id, candidate.min_quality))
        })
    }

    pub fn has_match(&self, slot: &BundleSlot) -> bool {
        self.find_match(slot).is_some()
    }

    /// Unfilled slots, and how many of them the player could fill now.
    pub fn ready_count(&self, bundle: &BundleInfo) -> ReadyCount {
        bundle
            .unfilled_slots()
            .fold(ReadyCount::default(), |mut count, slot| {
                count.total += 1;
                if self.has_match(slot) {
                    count.ready += 1;
                }
                count
            })
    }

    /// One record per slot in bundle order.
    ///
    /// Filled slots are reported without an owned item and without querying
    /// ownership.
    pub fn slot_match_info(&self, bundle: &BundleInfo) -> Vec<SlotMatchInfo> {
        bundle
            .slots()
            .iter()
            .map(|slot| {
                let owned_item = if slot.is_filled() {
                    None
                } else {
                    self.find_match(slot)
                };
                SlotMatchInfo {
                    slot: slot.clone(),
                    is_filled: slot.is_filled(),
                    has_owned_item: owned_item.is_some(),
                    owned_item,
                }
            })
            .collect()
    }
}
