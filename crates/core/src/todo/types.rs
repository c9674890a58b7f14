use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub todo_id: String,
    pub user_id: String,
    pub name: String,
    pub due_date: String,
    pub created_at: DateTime<Utc>,
    pub done: bool,
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Creates a pending item with a fresh ID and the current time as `created_at`.
    pub fn new(user_id: impl Into<String>, todo: NewTodo) -> Self {
        Self {
            todo_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: todo.name,
            due_date: todo.due_date,
            created_at: Utc::now(),
            done: false,
            attachment_url: None,
        }
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, todo_id: impl Into<String>) -> Self {
        self.todo_id = todo_id.into();
        self
    }

    /// Replaces the mutable fields with the values of an update.
    ///
    /// Identity, ownership, creation time and attachment are left untouched.
    pub fn apply(&mut self, update: &TodoUpdate) {
        self.name = update.name.clone();
        self.due_date = update.due_date.clone();
        self.done = update.done;
    }
}

/// Validated fields of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub due_date: String,
}

/// Validated full replacement of the mutable fields of a [`TodoItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo() -> NewTodo {
        NewTodo {
            name: "Buy milk".to_string(),
            due_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_new_item_defaults() {
        let before = Utc::now();
        let item = TodoItem::new("user1", new_todo());

        assert_eq!(item.user_id, "user1");
        assert_eq!(item.name, "Buy milk");
        assert_eq!(item.due_date, "2024-01-01");
        assert!(!item.done);
        assert!(item.attachment_url.is_none());
        assert!(item.created_at >= before);
        assert!(Uuid::parse_str(&item.todo_id).is_ok());
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = TodoItem::new("user1", new_todo());
        let b = TodoItem::new("user1", new_todo());

        assert_ne!(a.todo_id, b.todo_id);
    }

    #[test]
    fn test_apply_keeps_identity_and_attachment() {
        let mut item = TodoItem::new("user1", new_todo()).with_id("t1");
        item.attachment_url = Some("https://x/att1".to_string());
        let created_at = item.created_at;

        item.apply(&TodoUpdate {
            name: "X".to_string(),
            due_date: "2024-02-01".to_string(),
            done: true,
        });

        assert_eq!(item.todo_id, "t1");
        assert_eq!(item.user_id, "user1");
        assert_eq!(item.created_at, created_at);
        assert_eq!(item.attachment_url.as_deref(), Some("https://x/att1"));
        assert_eq!(item.name, "X");
        assert_eq!(item.due_date, "2024-02-01");
        assert!(item.done);
    }

    #[test]
    fn test_item_serializes_camel_case_with_null_attachment() {
        let item = TodoItem::new("user1", new_todo()).with_id("t1");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["todoId"], "t1");
        assert_eq!(json["userId"], "user1");
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["done"], false);
        assert!(json["attachmentUrl"].is_null());
        assert!(DateTime::parse_from_rfc3339(json["createdAt"].as_str().unwrap()).is_ok());
    }
}
