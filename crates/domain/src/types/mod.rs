//! Consumer-facing result types.
//!
//! These are the shapes the presentation layer renders:
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Serializable** - All types derive Serialize

mod bundle_reports;
pub use bundle_reports::{
    BundleAvailabilitySummary, BundleDetails, BundleItemCount, BundleNotification, CompletionCount,
    ReadyCount, RoomProgress, SlotAvailability, SlotMatchInfo,
};
