//! Collection categories: shipping, fish, cooking and crafting.
//!
//! All four count completed entries against a fixed content total.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionCategory};

use crate::infrastructure::ports::{CollectionEntry, CollectionSource, CollectionStatus};

pub struct CollectionProgress {
    category: CategoryId,
    source: Arc<dyn CollectionSource>,
}

impl CollectionProgress {
    pub fn shipping(source: Arc<dyn CollectionSource>) -> Self {
        Self::new(CategoryId::Shipping, source)
    }

    pub fn fish(source: Arc<dyn CollectionSource>) -> Self {
        Self::new(CategoryId::Fish, source)
    }

    pub fn cooking(source: Arc<dyn CollectionSource>) -> Self {
        Self::new(CategoryId::Cooking, source)
    }

    pub fn crafting(source: Arc<dyn CollectionSource>) -> Self {
        Self::new(CategoryId::Crafting, source)
    }

    fn new(category: CategoryId, source: Arc<dyn CollectionSource>) -> Self {
        Self { category, source }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn progress(&self) -> PerfectionCategory {
        let completed = self
            .source
            .entries()
            .iter()
            .filter(|entry| entry.is_completed())
            .count() as u32;
        let total = self.category.fixed_total().unwrap_or_default();
        PerfectionCategory::new(self.category, completed, total)
    }

    /// Entries not yet completed, learned recipes first, then by name.
    pub fn incomplete_entries(&self) -> Vec<CollectionEntry> {
        let mut entries: Vec<CollectionEntry> = self
            .source
            .entries()
            .into_iter()
            .filter(|entry| !entry.is_completed())
            .collect();
        entries.sort_by(|a, b| {
            let a_known = a.status == CollectionStatus::Known;
            let b_known = b.status == CollectionStatus::Known;
            b_known.cmp(&a_known).then_with(|| a.name.cmp(&b.name))
        });
        entries
    }

    /// Up to `max` lines such as `"Pufferfish (Ocean, summer, sunny)"`.
    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_entries()
            .iter()
            .take(max)
            .map(|entry| format!("{} ({})", entry.name, self.hint_for(entry)))
            .collect()
    }

    fn hint_for(&self, entry: &CollectionEntry) -> String {
        match self.category {
            CategoryId::Cooking => recipe_hint(entry, "cooked"),
            CategoryId::Crafting => recipe_hint(entry, "crafted"),
            CategoryId::Fish => entry
                .hint
                .clone()
                .unwrap_or_else(|| "not yet caught".to_string()),
            _ => entry
                .hint
                .clone()
                .unwrap_or_else(|| "not yet shipped".to_string()),
        }
    }
}

fn recipe_hint(entry: &CollectionEntry, verb: &str) -> String {
    let state = if entry.status == CollectionStatus::Known {
        format!("known but not yet {}", verb)
    } else {
        "recipe not learned".to_string()
    };
    match entry.hint.as_deref() {
        Some(hint) => format!("{}, {}", state, hint),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCollectionSource;

    fn source(entries: Vec<CollectionEntry>) -> Arc<MockCollectionSource> {
        let mut source = MockCollectionSource::new();
        source.expect_entries().returning(move || entries.clone());
        Arc::new(source)
    }

    fn recipes() -> Vec<CollectionEntry> {
        vec![
            CollectionEntry::new("Omelet", "Omelet", CollectionStatus::Completed),
            CollectionEntry::new("Salad", "Salad", CollectionStatus::Unknown)
                .with_hint("Emily, 3 hearts"),
            CollectionEntry::new("Pancakes", "Pancakes", CollectionStatus::Known),
            CollectionEntry::new("Bread", "Bread", CollectionStatus::Unknown),
        ]
    }

    #[test]
    fn progress_uses_fixed_total() {
        let cooking = CollectionProgress::cooking(source(recipes()));
        let category = cooking.progress();

        assert_eq!(category.id(), CategoryId::Cooking);
        assert_eq!(category.current(), 1);
        assert_eq!(category.total(), 80);
        assert!((category.contribution() - 10.0 / 80.0).abs() < 1e-9);
    }

    #[test]
    fn known_recipes_sort_first() {
        let cooking = CollectionProgress::cooking(source(recipes()));

        let items = cooking.incomplete_items(10);

        assert_eq!(
            items,
            vec![
                "Pancakes (known but not yet cooked)".to_string(),
                "Bread (recipe not learned)".to_string(),
                "Salad (recipe not learned, Emily, 3 hearts)".to_string(),
            ]
        );
    }

    #[test]
    fn crafting_hint_uses_crafted() {
        let crafting = CollectionProgress::crafting(source(vec![CollectionEntry::new(
            "Chest",
            "Chest",
            CollectionStatus::Known,
        )]));
        assert_eq!(crafting.incomplete_items(1), vec!["Chest (known but not yet crafted)"]);
    }

    #[test]
    fn shipping_and_fish_fall_back_to_default_hint() {
        let entries = vec![
            CollectionEntry::new("(O)128", "Pufferfish", CollectionStatus::Unknown)
                .with_hint("Ocean, summer, sunny"),
            CollectionEntry::new("(O)130", "Tuna", CollectionStatus::Unknown),
        ];

        let fish = CollectionProgress::fish(source(entries.clone()));
        assert_eq!(
            fish.incomplete_items(5),
            vec!["Pufferfish (Ocean, summer, sunny)", "Tuna (not yet caught)"]
        );

        let shipping = CollectionProgress::shipping(source(entries));
        assert_eq!(shipping.incomplete_items(5)[1], "Tuna (not yet shipped)");
    }

    #[test]
    fn incomplete_items_respects_max() {
        let cooking = CollectionProgress::cooking(source(recipes()));
        assert_eq!(cooking.incomplete_items(2).len(), 2);
        assert!(cooking.incomplete_items(0).is_empty());
    }

    #[test]
    fn current_is_clamped_to_fixed_total() {
        let entries = (0..70)
            .map(|i| CollectionEntry::new(format!("(O){i}"), "Fish", CollectionStatus::Completed))
            .collect();
        let fish = CollectionProgress::fish(source(entries));
        assert_eq!(fish.progress().current(), 67);
        assert!(fish.progress().is_complete());
    }
}
