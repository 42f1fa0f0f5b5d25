//! Perfection use cases.
//!
//! Ten weighted category calculators and the aggregator that sums them.
//! Each calculator reads its own data port and reports `(current, total)`
//! plus a sorted "what's left" list.

mod aggregator;
mod collections;
mod combat;
mod milestones;
mod skills;
mod social;

use std::sync::Arc;

use perfection_domain::DomainError;

pub use aggregator::{PerfectionOps, PerfectionSources};
pub use collections::CollectionProgress;
pub use combat::MonsterProgress;
pub use milestones::{BuildingProgress, StardropProgress, WalnutProgress};
pub use skills::SkillProgress;
pub use social::FriendshipProgress;

/// Container for perfection use cases.
pub struct PerfectionUseCases {
    pub ops: Arc<PerfectionOps>,
}

impl PerfectionUseCases {
    pub fn new(ops: Arc<PerfectionOps>) -> Self {
        Self { ops }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PerfectionError {
    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] DomainError),
}
