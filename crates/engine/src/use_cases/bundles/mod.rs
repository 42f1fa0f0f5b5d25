//! Bundle use cases.
//!
//! - Matching unfilled slots against owned items
//! - Which bundles can be worked on today
//! - Completion roll-ups per bundle, room and community center
//! - Session-scoped "a bundle needs this" alerts

mod availability;
mod matcher;
mod notifications;
mod progress;

use std::sync::Arc;

pub use availability::BundleAvailability;
pub use matcher::BundleMatcher;
pub use notifications::BundleNotificationTracker;
pub use progress::BundleProgress;

/// Container for bundle use cases.
pub struct BundleUseCases {
    pub matcher: Arc<BundleMatcher>,
    pub availability: Arc<BundleAvailability>,
    pub progress: Arc<BundleProgress>,
    pub notifications: Arc<BundleNotificationTracker>,
}

impl BundleUseCases {
    pub fn new(
        matcher: Arc<BundleMatcher>,
        availability: Arc<BundleAvailability>,
        progress: Arc<BundleProgress>,
        notifications: Arc<BundleNotificationTracker>,
    ) -> Self {
        Self {
            matcher,
            availability,
            progress,
            notifications,
        }
    }
}
