//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use todos_core::storage::RepositoryError;
use todos_core::todo::TodoItem;

// ============================================================================
// Attribute names
// ============================================================================

pub const USER_ID: &str = "userId";
pub const TODO_ID: &str = "todoId";
pub const NAME: &str = "name";
pub const DUE_DATE: &str = "dueDate";
pub const CREATED_AT: &str = "createdAt";
pub const DONE: &str = "done";
pub const ATTACHMENT_URL: &str = "attachmentUrl";

/// Build the primary key of an item.
pub fn todo_key(user_id: &str, todo_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(user_id.to_string())),
        (TODO_ID.to_string(), AttributeValue::S(todo_id.to_string())),
    ])
}

/// Convert a TodoItem to DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = todo_key(&todo.user_id, &todo.todo_id);

    item.insert(NAME.to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(
        DUE_DATE.to_string(),
        AttributeValue::S(todo.due_date.clone()),
    );
    item.insert(
        CREATED_AT.to_string(),
        AttributeValue::S(todo.created_at.to_rfc3339()),
    );
    item.insert(DONE.to_string(), AttributeValue::Bool(todo.done));
    if let Some(url) = &todo.attachment_url {
        item.insert(ATTACHMENT_URL.to_string(), AttributeValue::S(url.clone()));
    }

    item
}

/// Convert a DynamoDB item to TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        todo_id: get_string(item, TODO_ID)?,
        user_id: get_string(item, USER_ID)?,
        name: get_string(item, NAME)?,
        due_date: get_string(item, DUE_DATE)?,
        created_at: get_datetime(item, CREATED_AT)?,
        done: get_bool(item, DONE)?,
        attachment_url: get_optional_string(item, ATTACHMENT_URL),
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute. A stored NULL counts as absent.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem {
            todo_id: "550e8400-e29b-41d4-a716-446655440003".to_string(),
            user_id: "user1".to_string(),
            name: "Buy milk".to_string(),
            due_date: "2024-01-01".to_string(),
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            done: false,
            attachment_url: None,
        }
    }

    #[test]
    fn test_todo_round_trip() {
        let mut todo = sample_todo();
        todo.done = true;
        todo.attachment_url = Some("https://bucket.example.com/att1".to_string());

        let parsed = item_to_todo(&todo_to_item(&todo)).unwrap();

        assert_eq!(parsed, todo);
    }

    #[test]
    fn test_todo_item_has_correct_keys() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "user1");
        assert_eq!(
            item.get("todoId").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(item.get("done").unwrap().as_bool().unwrap(), &false);
    }

    #[test]
    fn test_missing_attachment_is_not_written() {
        let item = todo_to_item(&sample_todo());

        assert!(!item.contains_key("attachmentUrl"));
        assert!(item_to_todo(&item).unwrap().attachment_url.is_none());
    }

    #[test]
    fn test_null_attachment_reads_as_none() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("attachmentUrl".to_string(), AttributeValue::Null(true));

        assert!(item_to_todo(&item).unwrap().attachment_url.is_none());
    }

    #[test]
    fn test_missing_field_is_invalid_data() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("name");

        assert_eq!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: name".to_string()
            ))
        );
    }

    #[test]
    fn test_non_boolean_done_is_invalid_data() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("done".to_string(), AttributeValue::S("true".to_string()));

        assert!(item_to_todo(&item).is_err());
    }

    #[test]
    fn test_invalid_created_at_is_invalid_data() {
        let mut item = todo_to_item(&sample_todo());
        item.insert(
            "createdAt".to_string(),
            AttributeValue::S("yesterday".to_string()),
        );

        assert!(matches!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(msg)) if msg.starts_with("Invalid datetime createdAt")
        ));
    }
}
