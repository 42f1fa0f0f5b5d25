//! Monster eradication goals.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionCategory};

use crate::infrastructure::ports::{MonsterGoalRecord, MonsterSource};

pub struct MonsterProgress {
    source: Arc<dyn MonsterSource>,
}

impl MonsterProgress {
    pub fn new(source: Arc<dyn MonsterSource>) -> Self {
        Self { source }
    }

    pub fn progress(&self) -> PerfectionCategory {
        let goals = self.source.eradication_goals();
        let done = goals.iter().filter(|g| g.is_complete()).count() as u32;
        PerfectionCategory::new(CategoryId::Monsters, done, goals.len() as u32)
    }

    /// Unfinished goals, highest kill ratio first.
    pub fn incomplete_goals(&self) -> Vec<MonsterGoalRecord> {
        let mut pending: Vec<MonsterGoalRecord> = self
            .source
            .eradication_goals()
            .into_iter()
            .filter(|g| !g.is_complete())
            .collect();
        pending.sort_by(|a, b| {
            b.kill_ratio()
                .total_cmp(&a.kill_ratio())
                .then_with(|| a.name.cmp(&b.name))
        });
        pending
    }

    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_goals()
            .iter()
            .take(max)
            .map(|g| format!("{}: {}/{} kills", g.name, g.kills, g.target))
            .collect()
    }
}
