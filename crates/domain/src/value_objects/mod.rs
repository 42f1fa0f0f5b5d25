//! Value objects - Immutable objects defined by their attributes

mod availability;
mod progress;
mod quality;

pub use availability::{ItemAvailability, UnavailableReason};
pub use progress::{ratio_percent, rounded_percent};
pub use quality::ItemQuality;
