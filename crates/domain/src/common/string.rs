//! String comparison and conversion utilities.

/// Case-insensitive name comparison used by every by-name lookup.
///
/// Compares full Unicode lowercase forms, so display names with accents still
/// match regardless of case.
///
/// # Examples
///
/// ```
/// use perfection_domain::common::names_match;
///
/// assert!(names_match("Spring Crops", "spring crops"));
/// assert!(!names_match("Spring Crops", "Summer Crops"));
/// ```
pub fn names_match(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// Converts an empty or whitespace-only string to `None`, otherwise returns `Some(value)`.
///
/// Providers report "no hint" as an empty string as often as a missing field.
///
/// # Examples
///
/// ```
/// use perfection_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("Spring"), Some("Spring"));
/// assert_eq!(none_if_blank(""), None);
/// assert_eq!(none_if_blank("  "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
