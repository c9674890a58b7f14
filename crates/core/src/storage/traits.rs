use async_trait::async_trait;

use crate::todo::{TodoItem, TodoUpdate};

use super::Result;

/// Storage access for todo items, keyed by `(user_id, todo_id)`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets every todo item owned by a user.
    async fn get_all_todos(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Persists a new todo item.
    async fn create_todo(&self, item: &TodoItem) -> Result<()>;

    /// Replaces the mutable fields of an existing item and returns the stored result.
    async fn update_todo(
        &self,
        update: &TodoUpdate,
        todo_id: &str,
        user_id: &str,
    ) -> Result<TodoItem>;

    /// Deletes an item and returns what was removed.
    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<TodoItem>;

    /// Associates an attachment URL with an existing item.
    async fn update_todo_item_attachment(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()>;
}
