//! Weighted perfection roll-up and by-name category dispatch.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionCategory, PerfectionProgress};

use super::collections::CollectionProgress;
use super::combat::MonsterProgress;
use super::milestones::{BuildingProgress, StardropProgress, WalnutProgress};
use super::skills::SkillProgress;
use super::social::FriendshipProgress;
use super::PerfectionError;
use crate::infrastructure::ports::{
    BuildingSource, CollectionSource, FriendshipSource, MonsterSource, SkillSource,
    StardropSource, UnlockFlagSource, WalnutSource,
};

/// One data port per category, plus the world unlock flags.
#[derive(Clone)]
pub struct PerfectionSources {
    pub shipping: Arc<dyn CollectionSource>,
    pub fish: Arc<dyn CollectionSource>,
    pub cooking: Arc<dyn CollectionSource>,
    pub crafting: Arc<dyn CollectionSource>,
    pub friendship: Arc<dyn FriendshipSource>,
    pub buildings: Arc<dyn BuildingSource>,
    pub monsters: Arc<dyn MonsterSource>,
    pub stardrops: Arc<dyn StardropSource>,
    pub walnuts: Arc<dyn WalnutSource>,
    pub skills: Arc<dyn SkillSource>,
    pub flags: Arc<dyn UnlockFlagSource>,
}

/// Perfection operations.
pub struct PerfectionOps {
    shipping: CollectionProgress,
    fish: CollectionProgress,
    cooking: CollectionProgress,
    crafting: CollectionProgress,
    friendship: FriendshipProgress,
    buildings: BuildingProgress,
    monsters: MonsterProgress,
    stardrops: StardropProgress,
    walnuts: WalnutProgress,
    skills: SkillProgress,
    flags: Arc<dyn UnlockFlagSource>,
}

impl PerfectionOps {
    pub fn new(sources: PerfectionSources) -> Self {
        Self {
            shipping: CollectionProgress::shipping(sources.shipping),
            fish: CollectionProgress::fish(sources.fish),
            cooking: CollectionProgress::cooking(sources.cooking),
            crafting: CollectionProgress::crafting(sources.crafting),
            friendship: FriendshipProgress::new(sources.friendship),
            buildings: BuildingProgress::new(sources.buildings),
            monsters: MonsterProgress::new(sources.monsters),
            stardrops: StardropProgress::new(sources.stardrops),
            walnuts: WalnutProgress::new(sources.walnuts),
            skills: SkillProgress::new(sources.skills),
            flags: sources.flags,
        }
    }

    /// Every category once, in report order, plus the island flag.
    pub fn progress(&self) -> PerfectionProgress {
        let categories = CategoryId::ALL
            .iter()
            .map(|id| self.category_progress(*id))
            .collect();
        let progress = PerfectionProgress::new(categories, self.flags.island_unlocked());

        tracing::debug!(
            total_percentage = progress.total_percentage(),
            is_complete = progress.is_complete(),
            "Computed perfection progress"
        );

        progress
    }

    pub fn category_progress(&self, id: CategoryId) -> PerfectionCategory {
        match id {
            CategoryId::Shipping => self.shipping.progress(),
            CategoryId::Fish => self.fish.progress(),
            CategoryId::Cooking => self.cooking.progress(),
            CategoryId::Crafting => self.crafting.progress(),
            CategoryId::Friendship => self.friendship.progress(),
            CategoryId::Buildings => self.buildings.progress(),
            CategoryId::Monsters => self.monsters.progress(),
            CategoryId::Stardrops => self.stardrops.progress(),
            CategoryId::Walnuts => self.walnuts.progress(),
            CategoryId::Skills => self.skills.progress(),
        }
    }

    /// Up to `max` "what's left" lines, closest to done first.
    pub fn incomplete_items(&self, id: CategoryId, max: usize) -> Vec<String> {
        match id {
            CategoryId::Shipping => self.shipping.incomplete_items(max),
            CategoryId::Fish => self.fish.incomplete_items(max),
            CategoryId::Cooking => self.cooking.incomplete_items(max),
            CategoryId::Crafting => self.crafting.incomplete_items(max),
            CategoryId::Friendship => self.friendship.incomplete_items(max),
            CategoryId::Buildings => self.buildings.incomplete_items(max),
            CategoryId::Monsters => self.monsters.incomplete_items(max),
            CategoryId::Stardrops => self.stardrops.incomplete_items(max),
            CategoryId::Walnuts => self.walnuts.incomplete_items(max),
            CategoryId::Skills => self.skills.incomplete_items(max),
        }
    }

    pub fn category_progress_by_name(&self, name: &str) -> Result<PerfectionCategory, PerfectionError> {
        Ok(self.category_progress(parse_category(name)?))
    }

    pub fn incomplete_items_by_name(
        &self,
        name: &str,
        max: usize,
    ) -> Result<Vec<String>, PerfectionError> {
        Ok(self.incomplete_items(parse_category(name)?, max))
    }
}

fn parse_category(name: &str) -> Result<CategoryId, PerfectionError> {
    name.parse::<CategoryId>().map_err(|e| {
        tracing::warn!(name = %name, "Unknown perfection category requested");
        PerfectionError::from(e)
    })
}
