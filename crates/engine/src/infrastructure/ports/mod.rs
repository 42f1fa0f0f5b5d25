//! Port traits for provider boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Bundle state (catalog, fill state, rooms)
//! - Inventory scans (owned items by quality)
//! - World conditions (what can be obtained today)
//! - Raw per-category counts for perfection

mod bundles;
mod categories;
pub mod types;

// =============================================================================
// Bundle Ports
// =============================================================================
pub use bundles::{BundleSource, ItemAvailabilityQuery, OwnershipQuery};

// =============================================================================
// Category Ports
// =============================================================================
pub use categories::{
    BuildingSource, CollectionSource, FriendshipSource, MonsterSource, SkillSource,
    StardropSource, UnlockFlagSource, WalnutSource,
};

pub use types::{
    BuildingRecord, CollectionEntry, CollectionStatus, FriendshipRecord, MonsterGoalRecord,
    SkillRecord, StardropRecord, WalnutAreaRecord,
};

// =============================================================================
// Test-Only Mock Ports (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use bundles::{MockBundleSource, MockItemAvailabilityQuery, MockOwnershipQuery};

#[cfg(test)]
pub use categories::{
    MockBuildingSource, MockCollectionSource, MockFriendshipSource, MockMonsterSource,
    MockSkillSource, MockStardropSource, MockUnlockFlagSource, MockWalnutSource,
};
