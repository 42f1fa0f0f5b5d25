//! One-off milestones: obelisks and the golden clock, stardrops, golden walnuts.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionCategory};

use crate::infrastructure::ports::{
    BuildingRecord, BuildingSource, StardropRecord, StardropSource, WalnutAreaRecord, WalnutSource,
};

fn with_hint(name: &str, hint: Option<&str>) -> String {
    match hint {
        Some(hint) => format!("{} ({})", name, hint),
        None => name.to_string(),
    }
}

// =============================================================================
// Buildings
// =============================================================================

pub struct BuildingProgress {
    source: Arc<dyn BuildingSource>,
}

impl BuildingProgress {
    pub fn new(source: Arc<dyn BuildingSource>) -> Self {
        Self { source }
    }

    pub fn progress(&self) -> PerfectionCategory {
        let buildings = self.source.buildings();
        let built = buildings.iter().filter(|b| b.built).count() as u32;
        PerfectionCategory::new(CategoryId::Buildings, built, buildings.len() as u32)
    }

    /// Unbuilt, in provider order.
    pub fn incomplete_buildings(&self) -> Vec<BuildingRecord> {
        self.source
            .buildings()
            .into_iter()
            .filter(|b| !b.built)
            .collect()
    }

    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_buildings()
            .iter()
            .take(max)
            .map(|b| with_hint(&b.name, b.hint.as_deref()))
            .collect()
    }
}

// =============================================================================
// Stardrops
// =============================================================================

pub struct StardropProgress {
    source: Arc<dyn StardropSource>,
}

impl StardropProgress {
    pub fn new(source: Arc<dyn StardropSource>) -> Self {
        Self { source }
    }

    pub fn progress(&self) -> PerfectionCategory {
        let stardrops = self.source.stardrops();
        let obtained = stardrops.iter().filter(|s| s.obtained).count() as u32;
        PerfectionCategory::new(CategoryId::Stardrops, obtained, stardrops.len() as u32)
    }

    /// Missing, in provider order.
    pub fn incomplete_stardrops(&self) -> Vec<StardropRecord> {
        self.source
            .stardrops()
            .into_iter()
            .filter(|s| !s.obtained)
            .collect()
    }

    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_stardrops()
            .iter()
            .take(max)
            .map(|s| with_hint(&s.name, s.hint.as_deref()))
            .collect()
    }
}

// =============================================================================
// Golden Walnuts
// =============================================================================

pub struct WalnutProgress {
    source: Arc<dyn WalnutSource>,
}

impl WalnutProgress {
    pub fn new(source: Arc<dyn WalnutSource>) -> Self {
        Self { source }
    }

    /// Walnuts found over walnuts placed, summed across areas.
    pub fn progress(&self) -> PerfectionCategory {
        let (found, total) = self
            .source
            .walnut_areas()
            .iter()
            .fold((0, 0), |(found, total), area| {
                (found + area.found.min(area.total), total + area.total)
            });
        PerfectionCategory::new(CategoryId::Walnuts, found, total)
    }

    /// Areas with walnuts left, fewest remaining first.
    pub fn incomplete_areas(&self) -> Vec<WalnutAreaRecord> {
        let mut pending: Vec<WalnutAreaRecord> = self
            .source
            .walnut_areas()
            .into_iter()
            .filter(|a| a.remaining() > 0)
            .collect();
        pending.sort_by(|a, b| {
            a.remaining()
                .cmp(&b.remaining())
                .then_with(|| a.area.cmp(&b.area))
        });
        pending
    }

    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_areas()
            .iter()
            .take(max)
            .map(|a| format!("{}: {}/{} walnuts", a.area, a.found, a.total))
            .collect()
    }
}
