//! Perfection domain.
//!
//! Bundle catalog, owned-item snapshots, perfection categories, and the value
//! objects they share. Pure data with invariants; no I/O.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{
    BundleInfo, BundleItem, BundleSlot, CategoryId, ItemLocation, OwnedItemInfo,
    PerfectionCategory, PerfectionProgress, PERFECTION_WEIGHT_TOTAL,
};

pub use error::DomainError;

pub use ids::{ContentId, ItemId};

pub use types::{
    BundleAvailabilitySummary, BundleDetails, BundleItemCount, BundleNotification, CompletionCount,
    ReadyCount, RoomProgress, SlotAvailability, SlotMatchInfo,
};

pub use value_objects::{
    ratio_percent, rounded_percent, ItemAvailability, ItemQuality, UnavailableReason,
};
