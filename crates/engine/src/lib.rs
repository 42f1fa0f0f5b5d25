//! Perfection engine library.
//!
//! Bundle fulfillment and weighted perfection tracking over read-only
//! provider ports.
//!
//! ## Structure
//!
//! - `use_cases/` - Matcher, availability, progress, notifications, category calculators
//! - `infrastructure/` - Port traits, settings, in-memory snapshot adapter
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{App, Providers};
