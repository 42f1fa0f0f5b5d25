//! In-memory world snapshot.
//!
//! A serde document holding everything the providers would report for one
//! moment of a save. Implements every port, so it can back the engine in the
//! development runner and in end-to-end tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use perfection_domain::common::{names_match, none_if_blank};
use perfection_domain::{
    BundleInfo, DomainError, ItemAvailability, ItemId, ItemQuality, OwnedItemInfo,
    UnavailableReason,
};

use crate::app::Providers;
use crate::infrastructure::ports::{
    BuildingRecord, BuildingSource, BundleSource, CollectionEntry, CollectionSource,
    FriendshipRecord, FriendshipSource, ItemAvailabilityQuery, MonsterGoalRecord, MonsterSource,
    OwnershipQuery, SkillRecord, SkillSource, StardropRecord, StardropSource, UnlockFlagSource,
    WalnutAreaRecord, WalnutSource,
};
use crate::use_cases::perfection::PerfectionSources;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] DomainError),
}

/// A room and whether the game has granted its reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    #[serde(default)]
    pub reward_granted: bool,
}

/// Entries of one collection category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionSnapshot(pub Vec<CollectionEntry>);

impl CollectionSource for CollectionSnapshot {
    fn entries(&self) -> Vec<CollectionEntry> {
        self.0.clone()
    }
}

fn default_bundles_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// False once the player has taken the route that retires bundles
    #[serde(default = "default_bundles_active")]
    pub bundles_active: bool,
    /// Rooms in display order; rooms only named by bundles follow these
    #[serde(default)]
    pub rooms: Vec<RoomSnapshot>,
    #[serde(default)]
    pub bundles: Vec<BundleInfo>,
    #[serde(default)]
    pub owned_items: Vec<OwnedItemInfo>,
    /// Items not obtainable today; anything absent is available
    #[serde(default)]
    pub unavailable_items: BTreeMap<ItemId, UnavailableReason>,

    #[serde(default)]
    pub shipping: CollectionSnapshot,
    #[serde(default)]
    pub fish: CollectionSnapshot,
    #[serde(default)]
    pub cooking: CollectionSnapshot,
    #[serde(default)]
    pub crafting: CollectionSnapshot,
    #[serde(default)]
    pub friendships: Vec<FriendshipRecord>,
    #[serde(default)]
    pub buildings: Vec<BuildingRecord>,
    #[serde(default)]
    pub monster_goals: Vec<MonsterGoalRecord>,
    #[serde(default)]
    pub stardrops: Vec<StardropRecord>,
    #[serde(default)]
    pub walnut_areas: Vec<WalnutAreaRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub island_unlocked: bool,
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            bundles_active: default_bundles_active(),
            rooms: Vec::new(),
            bundles: Vec::new(),
            owned_items: Vec::new(),
            unavailable_items: BTreeMap::new(),
            shipping: CollectionSnapshot::default(),
            fish: CollectionSnapshot::default(),
            cooking: CollectionSnapshot::default(),
            crafting: CollectionSnapshot::default(),
            friendships: Vec::new(),
            buildings: Vec::new(),
            monster_goals: Vec::new(),
            stardrops: Vec::new(),
            walnut_areas: Vec::new(),
            skills: Vec::new(),
            island_unlocked: false,
        }
    }
}

impl WorldSnapshot {
    /// Parses and validates a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let mut snapshot: WorldSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        snapshot.normalize_hints();
        Ok(snapshot)
    }

    /// Structural checks the engine relies on.
    pub fn validate(&self) -> Result<(), DomainError> {
        for bundle in &self.bundles {
            if none_if_blank(bundle.name()).is_none() {
                return Err(DomainError::validation("Bundle name cannot be empty"));
            }
            if none_if_blank(bundle.room()).is_none() {
                return Err(DomainError::validation(format!(
                    "Bundle '{}' has no room",
                    bundle.name()
                )));
            }
            if bundle.slots().iter().any(|slot| slot.items().is_empty()) {
                return Err(DomainError::validation(format!(
                    "Bundle '{}' has a slot with no candidate items",
                    bundle.name()
                )));
            }
            if bundle.has_slot_data() && bundle.slots_required() > bundle.slot_count() {
                return Err(DomainError::validation(format!(
                    "Bundle '{}' requires {} slots but has {}",
                    bundle.name(),
                    bundle.slots_required(),
                    bundle.slot_count()
                )));
            }
        }
        Ok(())
    }

    /// Blank hints become missing hints.
    fn normalize_hints(&mut self) {
        for collection in [
            &mut self.shipping,
            &mut self.fish,
            &mut self.cooking,
            &mut self.crafting,
        ] {
            for entry in &mut collection.0 {
                clear_if_blank(&mut entry.hint);
            }
        }
        for building in &mut self.buildings {
            clear_if_blank(&mut building.hint);
        }
        for stardrop in &mut self.stardrops {
            clear_if_blank(&mut stardrop.hint);
        }
    }

    /// Shares this snapshot behind every port.
    pub fn into_providers(mut self) -> Providers {
        let shipping = Arc::new(std::mem::take(&mut self.shipping));
        let fish = Arc::new(std::mem::take(&mut self.fish));
        let cooking = Arc::new(std::mem::take(&mut self.cooking));
        let crafting = Arc::new(std::mem::take(&mut self.crafting));
        let world = Arc::new(self);

        Providers {
            bundles: world.clone(),
            ownership: world.clone(),
            availability: world.clone(),
            perfection: PerfectionSources {
                shipping,
                fish,
                cooking,
                crafting,
                friendship: world.clone(),
                buildings: world.clone(),
                monsters: world.clone(),
                stardrops: world.clone(),
                walnuts: world.clone(),
                skills: world.clone(),
                flags: world,
            },
        }
    }
}

fn clear_if_blank(hint: &mut Option<String>) {
    if hint.as_deref().is_some_and(|h| none_if_blank(h).is_none()) {
        *hint = None;
    }
}

// =============================================================================
// Bundle ports
// =============================================================================

impl BundleSource for WorldSnapshot {
    fn all_bundles(&self) -> Vec<BundleInfo> {
        self.bundles.clone()
    }

    fn incomplete_bundles(&self) -> Vec<BundleInfo> {
        self.bundles
            .iter()
            .filter(|bundle| !bundle.is_complete())
            .cloned()
            .collect()
    }

    fn bundles_needing_item(&self, item_id: &ItemId) -> Vec<String> {
        self.bundles
            .iter()
            .filter(|bundle| bundle.needs_item(item_id))
            .map(|bundle| bundle.name().to_string())
            .collect()
    }

    fn is_feature_active(&self) -> bool {
        self.bundles_active
    }

    fn room_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rooms.iter().map(|room| room.name.clone()).collect();
        for bundle in &self.bundles {
            if !names.iter().any(|name| names_match(name, bundle.room())) {
                names.push(bundle.room().to_string());
            }
        }
        names
    }

    fn is_room_complete(&self, room: &str) -> bool {
        self.rooms
            .iter()
            .find(|snapshot| names_match(&snapshot.name, room))
            .is_some_and(|snapshot| snapshot.reward_granted)
    }

    fn bundles_in_room(&self, room: &str) -> Vec<BundleInfo> {
        self.bundles
            .iter()
            .filter(|bundle| bundle.is_in_room(room))
            .cloned()
            .collect()
    }
}

impl OwnershipQuery for WorldSnapshot {
    fn owned_items(&self, item_id: &ItemId, min_quality: ItemQuality) -> Vec<OwnedItemInfo> {
        self.owned_items
            .iter()
            .filter(|owned| owned.meets(item_id, min_quality))
            .cloned()
            .collect()
    }
}

impl ItemAvailabilityQuery for WorldSnapshot {
    fn availability(&self, item_id: &ItemId) -> ItemAvailability {
        match self.unavailable_items.get(item_id) {
            Some(reason) => ItemAvailability::Unavailable(*reason),
            None => ItemAvailability::Available,
        }
    }
}

// =============================================================================
// Category ports
// =============================================================================

impl FriendshipSource for WorldSnapshot {
    fn friendships(&self) -> Vec<FriendshipRecord> {
        self.friendships.clone()
    }
}

impl BuildingSource for WorldSnapshot {
    fn buildings(&self) -> Vec<BuildingRecord> {
        self.buildings.clone()
    }
}

impl MonsterSource for WorldSnapshot {
    fn eradication_goals(&self) -> Vec<MonsterGoalRecord> {
        self.monster_goals.clone()
    }
}

impl StardropSource for WorldSnapshot {
    fn stardrops(&self) -> Vec<StardropRecord> {
        self.stardrops.clone()
    }
}

impl WalnutSource for WorldSnapshot {
    fn walnut_areas(&self) -> Vec<WalnutAreaRecord> {
        self.walnut_areas.clone()
    }
}

impl SkillSource for WorldSnapshot {
    fn skills(&self) -> Vec<SkillRecord> {
        self.skills.clone()
    }
}

impl UnlockFlagSource for WorldSnapshot {
    fn island_unlocked(&self) -> bool {
        self.island_unlocked
    }
}
