//! Friendship category: villagers at maximum hearts.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionCategory};

use crate::infrastructure::ports::{FriendshipRecord, FriendshipSource};

pub struct FriendshipProgress {
    source: Arc<dyn FriendshipSource>,
}

impl FriendshipProgress {
    pub fn new(source: Arc<dyn FriendshipSource>) -> Self {
        Self { source }
    }

    pub fn progress(&self) -> PerfectionCategory {
        let friendships = self.source.friendships();
        let maxed = friendships.iter().filter(|f| f.is_maxed()).count() as u32;
        PerfectionCategory::new(CategoryId::Friendship, maxed, friendships.len() as u32)
    }

    /// Friendships below max, closest first.
    pub fn incomplete_friendships(&self) -> Vec<FriendshipRecord> {
        let mut pending: Vec<FriendshipRecord> = self
            .source
            .friendships()
            .into_iter()
            .filter(|f| !f.is_maxed())
            .collect();
        pending.sort_by(|a, b| b.hearts.cmp(&a.hearts).then_with(|| a.npc.cmp(&b.npc)));
        pending
    }

    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_friendships()
            .iter()
            .take(max)
            .map(|f| format!("{}: {}/{} hearts", f.npc, f.hearts, f.max_hearts))
            .collect()
    }
}
