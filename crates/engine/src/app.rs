//! Application state and composition.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionProgress};

use crate::infrastructure::app_settings::AppSettings;
use crate::infrastructure::ports::{BundleSource, ItemAvailabilityQuery, OwnershipQuery};
use crate::use_cases;
use crate::use_cases::bundles::{
    BundleAvailability, BundleMatcher, BundleNotificationTracker, BundleProgress,
};
use crate::use_cases::perfection::{PerfectionOps, PerfectionSources};
use crate::use_cases::PerfectionError;

/// Main application state.
///
/// Holds the use cases wired over one set of providers. The host calls the
/// session hooks at its lifecycle points.
pub struct App {
    pub use_cases: UseCases,
    pub settings: AppSettings,
}

/// Every port the engine reads from.
#[derive(Clone)]
pub struct Providers {
    pub bundles: Arc<dyn BundleSource>,
    pub ownership: Arc<dyn OwnershipQuery>,
    pub availability: Arc<dyn ItemAvailabilityQuery>,
    pub perfection: PerfectionSources,
}

/// Container for all use cases.
pub struct UseCases {
    pub bundles: use_cases::BundleUseCases,
    pub perfection: use_cases::PerfectionUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(providers: Providers, settings: AppSettings) -> Self {
        let bundles = use_cases::BundleUseCases::new(
            Arc::new(BundleMatcher::new(providers.ownership.clone())),
            Arc::new(BundleAvailability::new(
                providers.bundles.clone(),
                providers.availability.clone(),
            )),
            Arc::new(BundleProgress::new(providers.bundles.clone())),
            Arc::new(BundleNotificationTracker::new(
                providers.bundles.clone(),
                settings.bundle_notifications_enabled,
            )),
        );

        let perfection =
            use_cases::PerfectionUseCases::new(Arc::new(PerfectionOps::new(providers.perfection)));

        Self {
            use_cases: UseCases {
                bundles,
                perfection,
            },
            settings,
        }
    }

    /// A save was loaded; alerts from the previous session no longer apply.
    pub fn on_save_loaded(&self) {
        self.use_cases.bundles.notifications.reset_session();
    }

    /// The player left to the title screen.
    pub fn on_returned_to_title(&self) {
        self.use_cases.bundles.notifications.reset_session();
    }

    pub fn perfection(&self) -> PerfectionProgress {
        self.use_cases.perfection.ops.progress()
    }

    /// "What's left" for a category using the configured default limit.
    pub fn incomplete_items(&self, id: CategoryId) -> Vec<String> {
        self.use_cases
            .perfection
            .ops
            .incomplete_items(id, self.settings.incomplete_items_limit)
    }

    pub fn incomplete_items_by_name(&self, name: &str) -> Result<Vec<String>, PerfectionError> {
        self.use_cases
            .perfection
            .ops
            .incomplete_items_by_name(name, self.settings.incomplete_items_limit)
    }
}
