//! Domain entities - bundles, owned items, and perfection categories.

mod bundle;
mod owned_item;
mod perfection;

pub use bundle::{BundleInfo, BundleItem, BundleSlot};
pub use owned_item::{ItemLocation, OwnedItemInfo};
pub use perfection::{CategoryId, PerfectionCategory, PerfectionProgress, PERFECTION_WEIGHT_TOTAL};
