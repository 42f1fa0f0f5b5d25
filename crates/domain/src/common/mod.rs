//! Common utility functions shared across the domain and engine crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O

pub mod string;

// Re-export commonly used functions for convenience
pub use string::{none_if_blank, names_match};
