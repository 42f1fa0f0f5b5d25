//! Use cases - query orchestration over the provider ports.
//!
//! Each module contains use cases for one tracker area.

pub mod bundles;
pub mod perfection;

#[cfg(test)]
mod tests;

pub use bundles::BundleUseCases;
pub use perfection::{PerfectionError, PerfectionUseCases};
