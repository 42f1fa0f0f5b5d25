//! Raw records supplied by the category data ports.
//!
//! Providers normalize game state into these shapes; calculators only count
//! and sort them.

use serde::{Deserialize, Serialize};

use perfection_domain::ContentId;

/// Progress state of one collection entry (a shippable item, fish, or recipe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    /// Shipped, caught, cooked or crafted at least once
    Completed,
    /// Recipe learned but never made
    Known,
    /// Not started
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: ContentId,
    pub name: String,
    pub status: CollectionStatus,
    /// Where or when to get it (season, location, recipe source)
    #[serde(default)]
    pub hint: Option<String>,
}

impl CollectionEntry {
    pub fn new(id: impl Into<ContentId>, name: impl Into<String>, status: CollectionStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == CollectionStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipRecord {
    pub npc: String,
    pub hearts: u32,
    /// 8 for unwed dateables, 10 otherwise
    pub max_hearts: u32,
}

impl FriendshipRecord {
    pub fn is_maxed(&self) -> bool {
        self.hearts >= self.max_hearts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub name: String,
    pub built: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterGoalRecord {
    pub name: String,
    pub kills: u32,
    pub target: u32,
}

impl MonsterGoalRecord {
    pub fn is_complete(&self) -> bool {
        self.kills >= self.target
    }

    /// Kills as a fraction of the target; a zero target counts as done.
    pub fn kill_ratio(&self) -> f64 {
        if self.target == 0 {
            1.0
        } else {
            f64::from(self.kills) / f64::from(self.target)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StardropRecord {
    pub name: String,
    pub obtained: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalnutAreaRecord {
    pub area: String,
    pub found: u32,
    pub total: u32,
}

impl WalnutAreaRecord {
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.found)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
}

impl SkillRecord {
    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_ratio_treats_zero_target_as_done() {
        let goal = MonsterGoalRecord {
            name: "Slimes".into(),
            kills: 0,
            target: 0,
        };
        assert!(goal.is_complete());
        assert_eq!(goal.kill_ratio(), 1.0);
    }

    #[test]
    fn test_walnut_remaining_never_underflows() {
        let area = WalnutAreaRecord {
            area: "Volcano".into(),
            found: 12,
            total: 10,
        };
        assert_eq!(area.remaining(), 0);
    }
}
