//! "You picked up something a bundle needs" alerts.
//!
//! The tracker keeps one piece of session state: the set of alert keys it
//! has already emitted. A key is the item id plus the sorted names of the
//! bundles needing it, so the same item alerts again if that set of bundles
//! changes within a session.

use std::sync::Arc;

use dashmap::DashSet;
use perfection_domain::{BundleNotification, ItemId};

use crate::infrastructure::ports::BundleSource;

pub struct BundleNotificationTracker {
    bundles: Arc<dyn BundleSource>,
    notified: DashSet<String>,
    enabled: bool,
}

impl BundleNotificationTracker {
    pub fn new(bundles: Arc<dyn BundleSource>, enabled: bool) -> Self {
        Self {
            bundles,
            notified: DashSet::new(),
            enabled,
        }
    }

    /// Alert for `item_id` unless it was already raised for the same bundles.
    ///
    /// Returns `None` when notifications are off, the bundle feature is
    /// retired, or no incomplete bundle needs the item.
    pub fn check_for_bundle_item(
        &self,
        item_id: &ItemId,
        item_name: &str,
    ) -> Option<BundleNotification> {
        if !self.enabled || !self.bundles.is_feature_active() {
            return None;
        }

        let bundle_names = self.bundles.bundles_needing_item(item_id);
        let first = bundle_names.first()?;

        // insert() is the check and the record in one step
        if !self.notified.insert(dedup_key(item_id, &bundle_names)) {
            return None;
        }

        let message = match bundle_names.len() - 1 {
            0 => format!("{} is needed for {}", item_name, first),
            more => format!("{} is needed for {} (+{} more)", item_name, first, more),
        };

        tracing::info!(
            item_id = %item_id,
            bundles = bundle_names.len(),
            "Bundle item notification raised"
        );

        Some(BundleNotification {
            item_id: item_id.clone(),
            item_name: item_name.to_string(),
            bundle_names,
            message,
        })
    }

    /// Forget every alert raised this session.
    pub fn reset_session(&self) {
        let cleared = self.notified.len();
        self.notified.clear();
        tracing::info!(cleared, "Bundle notification session reset");
    }

    /// Whether any alert was raised for `item_id` this session.
    pub fn has_been_notified(&self, item_id: &ItemId) -> bool {
        let prefix = format!("{}:", item_id);
        self.notified.iter().any(|key| key.starts_with(&prefix))
    }

    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }
}

fn dedup_key(item_id: &ItemId, bundle_names: &[String]) -> String {
    let mut sorted: Vec<&str> = bundle_names.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    format!("{}:{}", item_id, sorted.join(","))
}
