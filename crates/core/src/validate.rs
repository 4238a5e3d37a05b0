//! Field-level validation for the search text.
//!
//! Advisory only: a failing value is displayed under the field, it never
//! blocks the search.

/// Label of the search text field.
pub const SEARCH_FOR_LABEL: &str = "Search for";

/// Message shown when the search text contains a space.
pub const SEARCH_FOR_VALIDATION_MESSAGE: &str = "Invalid value for \"Search for\" field";

/// Returns an empty string when `value` is absent, empty, or has no space;
/// otherwise the fixed validation message.
pub fn validate(value: Option<&str>) -> String {
    match value {
        Some(v) if v.contains(' ') => SEARCH_FOR_VALIDATION_MESSAGE.to_string(),
        _ => String::new(),
    }
}
