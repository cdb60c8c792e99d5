//! Status-to-message translation.

use serde_json::Value;

use relay_common::error::TranslateError;
use relay_common::types::{HOMEWORK_NAME_KEY, HomeworkStatus, STATUS_KEY, WorkItem};

/// Validate the fields of a raw work item.
pub fn parse_item(item: &Value) -> Result<WorkItem, TranslateError> {
    let name = item
        .get(HOMEWORK_NAME_KEY)
        .ok_or(TranslateError::MissingField(HOMEWORK_NAME_KEY))?;
    let status = item
        .get(STATUS_KEY)
        .ok_or(TranslateError::MissingField(STATUS_KEY))?;

    let code = text_of(status);
    let status =
        HomeworkStatus::from_code(&code).ok_or(TranslateError::UndocumentedStatus(code))?;

    Ok(WorkItem {
        name: text_of(name),
        status,
    })
}

/// Render the chat message for a work item.
pub fn render(item: &Value) -> Result<String, TranslateError> {
    let item = parse_item(item)?;
    Ok(format!(
        "Status changed for \"{}\". {}",
        item.name,
        item.status.verdict()
    ))
}

/// Strings are used verbatim; anything else by its JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
