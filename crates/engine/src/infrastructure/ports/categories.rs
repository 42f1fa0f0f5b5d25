//! Category data ports, one per perfection category shape.

use super::types::{
    BuildingRecord, CollectionEntry, FriendshipRecord, MonsterGoalRecord, SkillRecord,
    StardropRecord, WalnutAreaRecord,
};

/// Shipping, fish, cooking and crafting each get their own instance.
#[cfg_attr(test, mockall::automock)]
pub trait CollectionSource: Send + Sync {
    fn entries(&self) -> Vec<CollectionEntry>;
}

#[cfg_attr(test, mockall::automock)]
pub trait FriendshipSource: Send + Sync {
    fn friendships(&self) -> Vec<FriendshipRecord>;
}

#[cfg_attr(test, mockall::automock)]
pub trait BuildingSource: Send + Sync {
    fn buildings(&self) -> Vec<BuildingRecord>;
}

#[cfg_attr(test, mockall::automock)]
pub trait MonsterSource: Send + Sync {
    fn eradication_goals(&self) -> Vec<MonsterGoalRecord>;
}

#[cfg_attr(test, mockall::automock)]
pub trait StardropSource: Send + Sync {
    fn stardrops(&self) -> Vec<StardropRecord>;
}

#[cfg_attr(test, mockall::automock)]
pub trait WalnutSource: Send + Sync {
    fn walnut_areas(&self) -> Vec<WalnutAreaRecord>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SkillSource: Send + Sync {
    fn skills(&self) -> Vec<SkillRecord>;
}

/// World flags reported next to perfection.
#[cfg_attr(test, mockall::automock)]
pub trait UnlockFlagSource: Send + Sync {
    fn island_unlocked(&self) -> bool;
}
