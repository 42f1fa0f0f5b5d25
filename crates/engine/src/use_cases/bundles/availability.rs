//! Bundle availability.
//!
//! A bundle is worth showing today when some unfilled slot has a candidate
//! the player could obtain under current conditions. Ownership does not
//! matter here, only obtainability.

use std::sync::Arc;

use perfection_domain::{BundleAvailabilitySummary, BundleInfo, SlotAvailability};

use crate::infrastructure::ports::{BundleSource, ItemAvailabilityQuery};

pub struct BundleAvailability {
    bundles: Arc<dyn BundleSource>,
    items: Arc<dyn ItemAvailabilityQuery>,
}

impl BundleAvailability {
    pub fn new(bundles: Arc<dyn BundleSource>, items: Arc<dyn ItemAvailabilityQuery>) -> Self {
        Self { bundles, items }
    }

    /// Stops at the first obtainable candidate across all unfilled slots.
    pub fn has_any_available_item(&self, bundle: &BundleInfo) -> bool {
        bundle.unfilled_slots().any(|slot| {
            slot.items()
                .iter()
                .any(|candidate| self.items.availability(&candidate.item_id).is_available())
        })
    }

    /// Incomplete bundles with something obtainable today.
    pub fn available_bundles(&self) -> Vec<BundleInfo> {
        self.bundles
            .incomplete_bundles()
            .into_iter()
            .filter(|bundle| self.has_any_available_item(bundle))
            .collect()
    }

    /// Splits incomplete bundles by availability in one pass.
    pub fn availability_summary(&self) -> BundleAvailabilitySummary {
        let summary = self.bundles.incomplete_bundles().into_iter().fold(
            BundleAvailabilitySummary::default(),
            |mut summary, bundle| {
                if self.has_any_available_item(&bundle) {
                    summary.available.push(bundle.name().to_string());
                } else {
                    summary.unavailable.push(bundle.name().to_string());
                }
                summary
            },
        );

        tracing::debug!(
            available = summary.available.len(),
            unavailable = summary.unavailable.len(),
            "Computed bundle availability summary"
        );

        summary
    }

    /// Case-insensitive lookup; unknown or complete bundles are not available.
    pub fn is_bundle_available_today(&self, name: &str) -> bool {
        self.bundles
            .incomplete_bundles()
            .iter()
            .find(|bundle| bundle.has_name(name))
            .is_some_and(|bundle| self.has_any_available_item(bundle))
    }

    /// Availability of each unfilled slot's primary candidate.
    ///
    /// Only the first alternative of an OR-slot is reported. `None` when no
    /// bundle has that name.
    pub fn item_availability_for_bundle(&self, name: &str) -> Option<Vec<SlotAvailability>> {
        let bundle = self
            .bundles
            .all_bundles()
            .into_iter()
            .find(|bundle| bundle.has_name(name))?;

        let report = bundle
            .unfilled_slots()
            .filter_map(|slot| {
                let primary = slot.primary_item()?;
                Some(SlotAvailability {
                    slot_index: slot.index(),
                    item: primary.clone(),
                    availability: self.items.availability(&primary.item_id),
                })
            })
            .collect();

        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockBundleSource, MockItemAvailabilityQuery};
    use perfection_domain::{
        BundleItem, BundleSlot, ItemAvailability, ItemId, UnavailableReason,
    };

    fn bundle(name: &str, slots: Vec<BundleSlot>) -> BundleInfo {
        BundleInfo::new(name, "Fish Tank").with_slots(slots)
    }

    fn river_fish() -> BundleInfo {
        bundle(
            "River Fish",
            vec![
                BundleSlot::single(0, BundleItem::new("(O)145", "Sunfish")).filled(),
                BundleSlot::single(1, BundleItem::new("(O)143", "Catfish")),
                BundleSlot::new(
                    2,
                    vec![
                        BundleItem::new("(O)706", "Shad"),
                        BundleItem::new("(O)699", "Tiger Trout"),
                    ],
                ),
            ],
        )
    }

    fn night_fish() -> BundleInfo {
        bundle(
            "Night Fishing",
            vec![BundleSlot::single(0, BundleItem::new("(O)269", "Midnight Carp"))],
        )
    }

    /// Only the listed item ids are obtainable; everything else is out of season.
    fn available_only(ids: &'static [&'static str]) -> MockItemAvailabilityQuery {
        let mut items = MockItemAvailabilityQuery::new();
        items.expect_availability().returning(move |id| {
            if ids.contains(&id.as_str()) {
                ItemAvailability::Available
            } else {
                ItemAvailability::Unavailable(UnavailableReason::OutOfSeason)
            }
        });
        items
    }

    fn source_with(bundles: Vec<BundleInfo>) -> MockBundleSource {
        let mut source = MockBundleSource::new();
        let incomplete: Vec<BundleInfo> =
            bundles.iter().filter(|b| !b.is_complete()).cloned().collect();
        source
            .expect_incomplete_bundles()
            .returning(move || incomplete.clone());
        source
            .expect_all_bundles()
            .returning(move || bundles.clone());
        source
    }

    #[test]
    fn alternative_candidate_makes_bundle_available() {
        let engine = BundleAvailability::new(
            Arc::new(source_with(vec![river_fish()])),
            Arc::new(available_only(&["(O)699"])),
        );
        assert!(engine.has_any_available_item(&river_fish()));
    }

    #[test]
    fn filled_slots_do_not_count() {
        let engine = BundleAvailability::new(
            Arc::new(source_with(vec![river_fish()])),
            Arc::new(available_only(&["(O)145"])),
        );
        assert!(!engine.has_any_available_item(&river_fish()));
    }

    #[test]
    fn short_circuits_on_first_available_candidate() {
        let mut items = MockItemAvailabilityQuery::new();
        items
            .expect_availability()
            .times(1)
            .returning(|_| ItemAvailability::Available);
        let engine = BundleAvailability::new(Arc::new(MockBundleSource::new()), Arc::new(items));

        assert!(engine.has_any_available_item(&river_fish()));
    }

    #[test]
    fn summary_partitions_incomplete_bundles() {
        let engine = BundleAvailability::new(
            Arc::new(source_with(vec![river_fish(), night_fish()])),
            Arc::new(available_only(&["(O)143"])),
        );

        let summary = engine.availability_summary();

        assert_eq!(summary.available, vec!["River Fish".to_string()]);
        assert_eq!(summary.unavailable, vec!["Night Fishing".to_string()]);
        assert_eq!(summary.total(), 2);

        let available: Vec<String> = engine
            .available_bundles()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(available, summary.available);
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        let engine = BundleAvailability::new(
            Arc::new(source_with(vec![river_fish(), night_fish()])),
            Arc::new(available_only(&["(O)269"])),
        );

        assert!(engine.is_bundle_available_today("night fishing"));
        assert!(!engine.is_bundle_available_today("RIVER FISH"));
        assert!(!engine.is_bundle_available_today("Dinosaur Bundle"));
    }

    #[test]
    fn item_availability_reports_only_primary_candidate() {
        let engine = BundleAvailability::new(
            Arc::new(source_with(vec![river_fish()])),
            Arc::new(available_only(&["(O)699"])),
        );

        let report = engine.item_availability_for_bundle("River Fish").unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].slot_index, 1);
        assert_eq!(report[1].slot_index, 2);
        // Tiger Trout is obtainable, but only Shad is reported for the OR-slot
        assert_eq!(report[1].item.item_id, ItemId::new("(O)706"));
        assert_eq!(
            report[1].availability,
            ItemAvailability::Unavailable(UnavailableReason::OutOfSeason)
        );
    }

    #[test]
    fn item_availability_for_unknown_bundle_is_none() {
        let engine = BundleAvailability::new(
            Arc::new(source_with(vec![river_fish()])),
            Arc::new(available_only(&[])),
        );
        assert!(engine.item_availability_for_bundle("Missing").is_none());
    }
}
