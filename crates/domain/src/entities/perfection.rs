//! Perfection categories - weighted sub-goals of overall completion
//!
//! Each category contributes up to its weight in percentage points. The weights
//! of the standard set add up to exactly 100.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::ratio_percent;
use crate::DomainError;

/// Sum of every standard category weight.
pub const PERFECTION_WEIGHT_TOTAL: f64 = 100.0;

/// Slack for float sums that should land exactly on 100.
const COMPLETION_EPSILON: f64 = 1e-6;

/// The ten tracked categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Shipping,
    Fish,
    Cooking,
    Crafting,
    Friendship,
    Buildings,
    Monsters,
    Stardrops,
    Walnuts,
    Skills,
}

impl CategoryId {
    pub const ALL: [CategoryId; 10] = [
        Self::Shipping,
        Self::Fish,
        Self::Cooking,
        Self::Crafting,
        Self::Friendship,
        Self::Buildings,
        Self::Monsters,
        Self::Stardrops,
        Self::Walnuts,
        Self::Skills,
    ];

    /// Percentage points this category is worth at 100% completion.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Shipping => 15.0,
            Self::Fish => 10.0,
            Self::Cooking => 10.0,
            Self::Crafting => 10.0,
            Self::Friendship => 11.0,
            // Obelisks and the golden clock
            Self::Buildings => 14.0,
            Self::Monsters => 10.0,
            Self::Stardrops => 10.0,
            Self::Walnuts => 5.0,
            Self::Skills => 5.0,
        }
    }

    /// Known size of the content set, for categories whose total is fixed.
    ///
    /// `None` means the total comes from the live data source.
    pub fn fixed_total(&self) -> Option<u32> {
        match self {
            Self::Shipping => Some(145),
            Self::Fish => Some(67),
            Self::Cooking => Some(80),
            Self::Crafting => Some(129),
            Self::Friendship
            | Self::Buildings
            | Self::Monsters
            | Self::Stardrops
            | Self::Walnuts
            | Self::Skills => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shipping => "shipping",
            Self::Fish => "fish",
            Self::Cooking => "cooking",
            Self::Crafting => "crafting",
            Self::Friendship => "friendship",
            Self::Buildings => "buildings",
            Self::Monsters => "monsters",
            Self::Stardrops => "stardrops",
            Self::Walnuts => "walnuts",
            Self::Skills => "skills",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Shipping => "Produce & Forage Shipped",
            Self::Fish => "Fish Caught",
            Self::Cooking => "Cooking Recipes Made",
            Self::Crafting => "Crafting Recipes Made",
            Self::Friendship => "Great Friends",
            Self::Buildings => "Obelisks & Golden Clock",
            Self::Monsters => "Monster Slayer Hero",
            Self::Stardrops => "Found All Stardrops",
            Self::Walnuts => "Golden Walnuts Found",
            Self::Skills => "Farmer Level",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = DomainError;

    /// Case-insensitive; `-`, `_` and spaces are ignored so "Monster Slayer",
    /// "monster-slayer" and "MONSTER_SLAYER" are the same name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "shipping" => Ok(Self::Shipping),
            "fish" => Ok(Self::Fish),
            "cooking" => Ok(Self::Cooking),
            "crafting" => Ok(Self::Crafting),
            "friendship" => Ok(Self::Friendship),
            "buildings" => Ok(Self::Buildings),
            "monsterslayer" | "monsters" => Ok(Self::Monsters),
            "stardrops" => Ok(Self::Stardrops),
            "goldenwalnuts" | "walnuts" => Ok(Self::Walnuts),
            "skills" => Ok(Self::Skills),
            _ => Err(DomainError::invalid_argument(format!(
                "Unknown perfection category: {}",
                s
            ))),
        }
    }
}

/// One weighted tracking bucket.
///
/// `contribution` is always `weight * current / total`, and `current` never
/// exceeds `total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfectionCategory {
    id: CategoryId,
    name: &'static str,
    current: u32,
    total: u32,
    weight: f64,
    contribution: f64,
}

impl PerfectionCategory {
    /// Builds a category record; `current` is clamped to `total`.
    pub fn new(id: CategoryId, current: u32, total: u32) -> Self {
        let current = current.min(total);
        let weight = id.weight();
        let contribution = weight * ratio_percent(current, total) / 100.0;
        Self {
            id,
            name: id.display_name(),
            current,
            total,
            weight,
            contribution,
        }
    }

    #[inline]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Share of the overall total, in percentage points.
    #[inline]
    pub fn contribution(&self) -> f64 {
        self.contribution
    }

    /// Completion of this category alone, 0..=100.
    pub fn percent_complete(&self) -> f64 {
        ratio_percent(self.current, self.total)
    }

    /// Points still available from this category.
    pub fn remaining_weight(&self) -> f64 {
        self.weight - self.contribution
    }

    /// A category with an empty total is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}

/// Aggregate perfection result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfectionProgress {
    total_percentage: f64,
    categories: Vec<PerfectionCategory>,
    is_complete: bool,
    island_unlocked: bool,
}

impl PerfectionProgress {
    /// Sums `weight * percent_complete / 100` across `categories`.
    pub fn new(categories: Vec<PerfectionCategory>, island_unlocked: bool) -> Self {
        let total_percentage: f64 = categories
            .iter()
            .map(|category| category.weight() * category.percent_complete() / 100.0)
            .sum();
        let is_complete = total_percentage >= PERFECTION_WEIGHT_TOTAL - COMPLETION_EPSILON;
        Self {
            total_percentage,
            categories,
            is_complete,
            island_unlocked,
        }
    }

    #[inline]
    pub fn total_percentage(&self) -> f64 {
        self.total_percentage
    }

    #[inline]
    pub fn categories(&self) -> &[PerfectionCategory] {
        &self.categories
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Late-game area unlock, reported alongside perfection.
    #[inline]
    pub fn island_unlocked(&self) -> bool {
        self.island_unlocked
    }

    pub fn category(&self, id: CategoryId) -> Option<&PerfectionCategory> {
        self.categories.iter().find(|category| category.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_weights_sum_to_one_hundred() {
        let sum: f64 = CategoryId::ALL.iter().map(CategoryId::weight).sum();
        assert!((sum - PERFECTION_WEIGHT_TOTAL).abs() < 0.01);
    }

    #[test]
    fn test_contribution_is_weight_times_ratio() {
        let shipping = PerfectionCategory::new(CategoryId::Shipping, 29, 145);
        assert!((shipping.contribution() - 3.0).abs() < 1e-9);
        assert!((shipping.percent_complete() - 20.0).abs() < 1e-9);
        assert!((shipping.remaining_weight() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_contributes_nothing() {
        let walnuts = PerfectionCategory::new(CategoryId::Walnuts, 0, 0);
        assert_eq!(walnuts.contribution(), 0.0);
        assert_eq!(walnuts.percent_complete(), 0.0);
        assert!(!walnuts.is_complete());
    }

    #[test]
    fn test_current_is_clamped_to_total() {
        let fish = PerfectionCategory::new(CategoryId::Fish, 80, 67);
        assert_eq!(fish.current(), 67);
        assert_eq!(fish.contribution(), fish.weight());
    }

    #[test]
    fn test_all_zero_categories_total_zero() {
        let categories = CategoryId::ALL
            .iter()
            .map(|id| PerfectionCategory::new(*id, 0, id.fixed_total().unwrap_or(10)))
            .collect();
        let progress = PerfectionProgress::new(categories, false);
        assert_eq!(progress.total_percentage(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_all_complete_categories_total_one_hundred() {
        let categories = CategoryId::ALL
            .iter()
            .map(|id| {
                let total = id.fixed_total().unwrap_or(7);
                PerfectionCategory::new(*id, total, total)
            })
            .collect();
        let progress = PerfectionProgress::new(categories, true);
        assert!((progress.total_percentage() - 100.0).abs() < 1e-9);
        assert!(progress.is_complete());
        assert!(progress.island_unlocked());
    }

    #[test]
    fn test_category_lookup() {
        let progress = PerfectionProgress::new(
            vec![PerfectionCategory::new(CategoryId::Skills, 25, 50)],
            false,
        );
        assert_eq!(
            progress.category(CategoryId::Skills).map(|c| c.current()),
            Some(25)
        );
        assert!(progress.category(CategoryId::Fish).is_none());
    }

    #[test]
    fn test_parse_accepts_aliases_and_case() {
        assert_eq!("Shipping".parse::<CategoryId>().unwrap(), CategoryId::Shipping);
        assert_eq!("monster-slayer".parse::<CategoryId>().unwrap(), CategoryId::Monsters);
        assert_eq!("MONSTERS".parse::<CategoryId>().unwrap(), CategoryId::Monsters);
        assert_eq!("Golden Walnuts".parse::<CategoryId>().unwrap(), CategoryId::Walnuts);
        assert_eq!("walnuts".parse::<CategoryId>().unwrap(), CategoryId::Walnuts);
    }

    #[test]
    fn test_parse_every_canonical_name() {
        for id in CategoryId::ALL {
            assert_eq!(id.as_str().parse::<CategoryId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_category_is_invalid_argument() {
        let err = "dinosaurs".parse::<CategoryId>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("dinosaurs"));
    }
}
