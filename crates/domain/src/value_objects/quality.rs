//! Item quality tiers.
//!
//! Quality is an ordinal grade. A bundle requirement at some tier is satisfied by
//! any stock at that tier or above, so comparisons go through [`ItemQuality::satisfies`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Ordinal item grade, lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemQuality {
    #[default]
    Normal,
    Silver,
    Gold,
    Iridium,
}

impl ItemQuality {
    /// Builds a quality from its tier number (0 = normal .. 3 = iridium).
    ///
    /// Tiers above 3 clamp to [`ItemQuality::Iridium`].
    pub fn from_tier(tier: u8) -> Self {
        match tier {
            0 => Self::Normal,
            1 => Self::Silver,
            2 => Self::Gold,
            _ => Self::Iridium,
        }
    }

    pub fn tier(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Silver => 1,
            Self::Gold => 2,
            Self::Iridium => 3,
        }
    }

    /// True when stock of this quality fills a requirement of `required` quality.
    pub fn satisfies(&self, required: ItemQuality) -> bool {
        *self >= required
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Iridium => "Iridium",
        }
    }

    pub fn all() -> [ItemQuality; 4] {
        [Self::Normal, Self::Silver, Self::Gold, Self::Iridium]
    }
}

impl fmt::Display for ItemQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ItemQuality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "basic" | "0" => Ok(Self::Normal),
            "silver" | "1" => Ok(Self::Silver),
            "gold" | "2" => Ok(Self::Gold),
            "iridium" | "3" | "4" => Ok(Self::Iridium),
            _ => Err(DomainError::parse(format!("Unknown item quality: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_quality_satisfies_every_lower_requirement() {
        for required in ItemQuality::all() {
            assert!(ItemQuality::Iridium.satisfies(required));
        }
    }

    #[test]
    fn test_silver_never_satisfies_gold() {
        assert!(!ItemQuality::Silver.satisfies(ItemQuality::Gold));
        assert!(!ItemQuality::Silver.satisfies(ItemQuality::Iridium));
        assert!(ItemQuality::Silver.satisfies(ItemQuality::Silver));
        assert!(ItemQuality::Silver.satisfies(ItemQuality::Normal));
    }

    #[test]
    fn test_satisfies_matches_tier_ordering() {
        for owned in ItemQuality::all() {
            for required in ItemQuality::all() {
                assert_eq!(owned.satisfies(required), owned.tier() >= required.tier());
            }
        }
    }

    #[test]
    fn test_from_tier_round_trips_and_clamps() {
        for quality in ItemQuality::all() {
            assert_eq!(ItemQuality::from_tier(quality.tier()), quality);
        }
        assert_eq!(ItemQuality::from_tier(4), ItemQuality::Iridium);
        assert_eq!(ItemQuality::from_tier(200), ItemQuality::Iridium);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Gold".parse::<ItemQuality>().unwrap(), ItemQuality::Gold);
        assert_eq!(" silver ".parse::<ItemQuality>().unwrap(), ItemQuality::Silver);
        assert!(matches!(
            "platinum".parse::<ItemQuality>(),
            Err(DomainError::Parse(_))
        ));
    }
}
