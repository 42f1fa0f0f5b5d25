//! Whether an item can be obtained under current world conditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an item cannot be obtained right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    OutOfSeason,
    WrongWeather,
    WrongTime,
    /// Source area or vendor not unlocked yet
    Locked,
    /// Unknown reason for forward compatibility
    #[serde(other)]
    Unknown,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfSeason => write!(f, "out of season"),
            Self::WrongWeather => write!(f, "wrong weather"),
            Self::WrongTime => write!(f, "wrong time of day"),
            Self::Locked => write!(f, "not unlocked yet"),
            Self::Unknown => write!(f, "unavailable"),
        }
    }
}

/// Result of an "is this obtainable today" query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ItemAvailability {
    Available,
    Unavailable(UnavailableReason),
}

impl ItemAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            Self::Available => None,
            Self::Unavailable(reason) => Some(*reason),
        }
    }
}
