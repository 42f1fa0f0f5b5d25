//! Application settings for the tracker.
//!
//! Settings come from the host (file or defaults) and can be overridden by
//! environment variables via [`AppSettings::load_from_env`].
//!
//! # Environment overrides
//!
//! - `PERFECTION_INCOMPLETE_LIMIT`: default number of "what's left" entries per
//!   category (range: 1-200)
//! - `PERFECTION_BUNDLE_NOTIFICATIONS`: `true`/`false` (also `1`/`0`, `on`/`off`)

use serde::{Deserialize, Serialize};

pub const INCOMPLETE_LIMIT_ENV: &str = "PERFECTION_INCOMPLETE_LIMIT";
pub const BUNDLE_NOTIFICATIONS_ENV: &str = "PERFECTION_BUNDLE_NOTIFICATIONS";

const INCOMPLETE_LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=200;

fn default_incomplete_items_limit() -> usize {
    10
}

fn default_bundle_notifications_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Entries returned by "what's left" queries when the caller gives no limit
    #[serde(default = "default_incomplete_items_limit")]
    pub incomplete_items_limit: usize,

    /// When false the notification tracker never raises an alert
    #[serde(default = "default_bundle_notifications_enabled")]
    pub bundle_notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            incomplete_items_limit: default_incomplete_items_limit(),
            bundle_notifications_enabled: default_bundle_notifications_enabled(),
        }
    }
}

impl AppSettings {
    pub fn with_incomplete_items_limit(mut self, limit: usize) -> Self {
        self.incomplete_items_limit = limit;
        self
    }

    pub fn with_bundle_notifications(mut self, enabled: bool) -> Self {
        self.bundle_notifications_enabled = enabled;
        self
    }

    /// Load settings with environment variable overrides applied.
    pub fn load_from_env(base: AppSettings) -> AppSettings {
        base.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; invalid values are logged and ignored.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> AppSettings {
        if let Some(val) = lookup(INCOMPLETE_LIMIT_ENV) {
            match val.trim().parse::<usize>() {
                Ok(limit) if INCOMPLETE_LIMIT_RANGE.contains(&limit) => {
                    self.incomplete_items_limit = limit;
                    tracing::info!(limit, "Applied {} environment variable", INCOMPLETE_LIMIT_ENV);
                }
                Ok(limit) => {
                    tracing::warn!(
                        limit,
                        "{} out of range [1, 200], ignoring",
                        INCOMPLETE_LIMIT_ENV
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        val = %val,
                        "{} is not a valid number, ignoring",
                        INCOMPLETE_LIMIT_ENV
                    );
                }
            }
        }

        if let Some(val) = lookup(BUNDLE_NOTIFICATIONS_ENV) {
            match parse_flag(&val) {
                Some(enabled) => {
                    self.bundle_notifications_enabled = enabled;
                    tracing::info!(enabled, "Applied {} environment variable", BUNDLE_NOTIFICATIONS_ENV);
                }
                None => {
                    tracing::warn!(
                        val = %val,
                        "{} is not a valid flag, ignoring",
                        BUNDLE_NOTIFICATIONS_ENV
                    );
                }
            }
        }

        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.incomplete_items_limit, 10);
        assert!(settings.bundle_notifications_enabled);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_valid_overrides_apply() {
        let settings = AppSettings::default().apply_overrides(env(&[
            (INCOMPLETE_LIMIT_ENV, "25"),
            (BUNDLE_NOTIFICATIONS_ENV, "off"),
        ]));
        assert_eq!(settings.incomplete_items_limit, 25);
        assert!(!settings.bundle_notifications_enabled);
    }

    #[test]
    fn test_out_of_range_limit_is_ignored() {
        let settings =
            AppSettings::default().apply_overrides(env(&[(INCOMPLETE_LIMIT_ENV, "0")]));
        assert_eq!(settings.incomplete_items_limit, 10);

        let settings =
            AppSettings::default().apply_overrides(env(&[(INCOMPLETE_LIMIT_ENV, "500")]));
        assert_eq!(settings.incomplete_items_limit, 10);
    }

    #[test]
    fn test_garbage_values_are_ignored() {
        let settings = AppSettings::default().apply_overrides(env(&[
            (INCOMPLETE_LIMIT_ENV, "lots"),
            (BUNDLE_NOTIFICATIONS_ENV, "maybe"),
        ]));
        assert_eq!(settings, AppSettings::default());
    }
}
