//! Infrastructure implementations.
//!
//! Port traits, settings, and the in-memory snapshot adapter.

pub mod app_settings;
pub mod memory;
pub mod ports;
