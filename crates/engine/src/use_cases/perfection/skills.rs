//! Skill levels, counted level by level.

use std::sync::Arc;

use perfection_domain::{CategoryId, PerfectionCategory};

use crate::infrastructure::ports::{SkillRecord, SkillSource};

pub struct SkillProgress {
    source: Arc<dyn SkillSource>,
}

impl SkillProgress {
    pub fn new(source: Arc<dyn SkillSource>) -> Self {
        Self { source }
    }

    /// Sum of levels over sum of max levels.
    pub fn progress(&self) -> PerfectionCategory {
        let (current, total) = self
            .source
            .skills()
            .iter()
            .fold((0, 0), |(current, total), skill| {
                (
                    current + skill.level.min(skill.max_level),
                    total + skill.max_level,
                )
            });
        PerfectionCategory::new(CategoryId::Skills, current, total)
    }

    /// Skills below max, highest level first.
    pub fn incomplete_skills(&self) -> Vec<SkillRecord> {
        let mut pending: Vec<SkillRecord> = self
            .source
            .skills()
            .into_iter()
            .filter(|s| !s.is_maxed())
            .collect();
        pending.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.name.cmp(&b.name)));
        pending
    }

    pub fn incomplete_items(&self, max: usize) -> Vec<String> {
        self.incomplete_skills()
            .iter()
            .take(max)
            .map(|s| format!("{}: level {}/{}", s.name, s.level, s.max_level))
            .collect()
    }
}
