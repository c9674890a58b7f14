//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

const ENTITY_TYPE: &str = "TodoItem";

/// Items keyed by `(user_id, todo_id)`.
type TodoKey = (String, String);

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<TodoKey, TodoItem>>>,
}

impl InMemoryTodoRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(user_id: &str, todo_id: &str) -> TodoKey {
    (user_id.to_string(), todo_id.to_string())
}

fn not_found(user_id: &str, todo_id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY_TYPE,
        id: format!("{user_id}/{todo_id}"),
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        let mut items: Vec<TodoItem> = todos
            .values()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.todo_id.cmp(&b.todo_id))
        });
        Ok(items)
    }

    async fn create_todo(&self, item: &TodoItem) -> Result<()> {
        let mut todos = self.todos.write().await;
        let key = key(&item.user_id, &item.todo_id);
        if todos.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: ENTITY_TYPE,
                id: format!("{}/{}", item.user_id, item.todo_id),
            });
        }
        todos.insert(key, item.clone());
        Ok(())
    }

    async fn update_todo(
        &self,
        update: &TodoUpdate,
        todo_id: &str,
        user_id: &str,
    ) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        let item = todos
            .get_mut(&key(user_id, todo_id))
            .ok_or_else(|| not_found(user_id, todo_id))?;
        item.apply(update);
        Ok(item.clone())
    }

    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        todos
            .remove(&key(user_id, todo_id))
            .ok_or_else(|| not_found(user_id, todo_id))
    }

    async fn update_todo_item_attachment(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()> {
        let mut todos = self.todos.write().await;
        let item = todos
            .get_mut(&key(user_id, todo_id))
            .ok_or_else(|| not_found(user_id, todo_id))?;
        item.attachment_url = Some(attachment_url.to_string());
        Ok(())
    }
}
