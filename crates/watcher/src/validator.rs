//! Response shape checks.
//!
//! Only the envelope is validated here. Individual work items are checked by
//! the translator, and only the one that is actually consumed.

use serde_json::Value;

use relay_common::error::ValidationError;
use relay_common::types::{CURRENT_DATE_KEY, HOMEWORKS_KEY};

/// Extract the ordered list of work items from a polled response.
///
/// An empty list is valid and means no status changed in the window.
pub fn validate(response: &Value) -> Result<&[Value], ValidationError> {
    let object = response
        .as_object()
        .ok_or_else(|| ValidationError::Shape("API response is not an object".to_string()))?;

    let items = object
        .get(HOMEWORKS_KEY)
        .ok_or(ValidationError::MissingKey(HOMEWORKS_KEY))?;

    items.as_array().map(Vec::as_slice).ok_or_else(|| {
        ValidationError::Shape(format!("value under '{HOMEWORKS_KEY}' is not a list"))
    })
}

/// Server-reported cursor for the next poll, if the response carries one.
///
/// Non-integer and negative values are ignored so a malformed timestamp never
/// replaces a good cursor.
pub fn next_cursor(response: &Value) -> Option<i64> {
    let raw = response.get(CURRENT_DATE_KEY)?;
    if raw.is_null() {
        return None;
    }
    let cursor = raw.as_i64().filter(|c| *c >= 0);
    if cursor.is_none() {
        tracing::warn!(value = %raw, "Ignoring invalid current_date in API response");
    }
    cursor
}
