//! Bundle progress roll-ups.
//!
//! Everything is recomputed from the provider on each call.

use std::collections::HashSet;
use std::sync::Arc;

use perfection_domain::{BundleDetails, BundleInfo, BundleItemCount, CompletionCount, RoomProgress};

use crate::infrastructure::ports::BundleSource;

pub struct BundleProgress {
    bundles: Arc<dyn BundleSource>,
}

impl BundleProgress {
    pub fn new(bundles: Arc<dyn BundleSource>) -> Self {
        Self { bundles }
    }

    /// Completed vs total bundles across every room.
    pub fn overall_progress(&self) -> CompletionCount {
        let progress = completion_of(&self.bundles.all_bundles());
        tracing::debug!(
            completed = progress.completed,
            total = progress.total,
            percent = progress.percent,
            "Computed overall bundle progress"
        );
        progress
    }

    /// One entry per distinct room, in the provider's display order.
    pub fn room_progress_list(&self) -> Vec<RoomProgress> {
        let all = self.bundles.all_bundles();
        let mut seen = HashSet::new();

        self.bundles
            .room_names()
            .into_iter()
            .filter(|room| seen.insert(room.to_lowercase()))
            .map(|room| {
                let in_room: Vec<BundleInfo> = all
                    .iter()
                    .filter(|bundle| bundle.is_in_room(&room))
                    .cloned()
                    .collect();
                let reward_granted = self.bundles.is_room_complete(&room);
                RoomProgress {
                    bundles: completion_of(&in_room),
                    reward_granted,
                    room,
                }
            })
            .collect()
    }

    /// Per-bundle counts for a room view.
    ///
    /// Slot data wins over the legacy contributed-item view when present.
    pub fn bundle_counts_for_room(&self, room: &str) -> Vec<BundleItemCount> {
        self.bundles
            .bundles_in_room(room)
            .iter()
            .map(item_count_of)
            .collect()
    }

    /// `None` when no bundle has that name (case-insensitive).
    pub fn bundle_details(&self, name: &str) -> Option<BundleDetails> {
        self.bundles
            .all_bundles()
            .iter()
            .find(|bundle| bundle.has_name(name))
            .map(BundleDetails::from_bundle)
    }

    /// Requires the bundle feature, at least one bundle, and every bundle complete.
    pub fn is_community_complete(&self) -> bool {
        if !self.bundles.is_feature_active() {
            return false;
        }
        let all = self.bundles.all_bundles();
        !all.is_empty() && all.iter().all(BundleInfo::is_complete)
    }
}

fn completion_of(bundles: &[BundleInfo]) -> CompletionCount {
    let completed = bundles.iter().filter(|bundle| bundle.is_complete()).count() as u32;
    CompletionCount::new(completed, bundles.len() as u32)
}

fn item_count_of(bundle: &BundleInfo) -> BundleItemCount {
    let (total_items, completed_items) = if bundle.has_slot_data() {
        (bundle.slots_required(), bundle.filled_slot_count())
    } else {
        (
            bundle.item_count_to_complete(),
            bundle.contributed().len() as u32,
        )
    };

    BundleItemCount {
        bundle_name: bundle.name().to_string(),
        total_items,
        completed_items,
        is_complete: bundle.is_complete(),
    }
}
