//! Bundle-side ports: the bundle catalog, owned items, and world availability.

use perfection_domain::{BundleInfo, ItemAvailability, ItemId, ItemQuality, OwnedItemInfo};

/// Current bundle state as the game reports it.
///
/// Each call returns freshly built values; callers never edit them in place.
#[cfg_attr(test, mockall::automock)]
pub trait BundleSource: Send + Sync {
    fn all_bundles(&self) -> Vec<BundleInfo>;
    fn incomplete_bundles(&self) -> Vec<BundleInfo>;
    /// Names of incomplete bundles with an unfilled slot accepting `item_id`
    fn bundles_needing_item(&self, item_id: &ItemId) -> Vec<String>;
    /// False when the player took the alternate route that retires bundles
    fn is_feature_active(&self) -> bool;
    /// Distinct room names in display order
    fn room_names(&self) -> Vec<String>;
    /// Whether the game has granted the room's completion reward
    fn is_room_complete(&self, room: &str) -> bool;
    fn bundles_in_room(&self, room: &str) -> Vec<BundleInfo>;
}

/// Inventory and storage scan.
#[cfg_attr(test, mockall::automock)]
pub trait OwnershipQuery: Send + Sync {
    /// Every owned stack of `item_id` at `min_quality` or better.
    fn owned_items(&self, item_id: &ItemId, min_quality: ItemQuality) -> Vec<OwnedItemInfo>;
}

/// Whether an item can be obtained under today's season, weather and time.
#[cfg_attr(test, mockall::automock)]
pub trait ItemAvailabilityQuery: Send + Sync {
    fn availability(&self, item_id: &ItemId) -> ItemAvailability;
}
