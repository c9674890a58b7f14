//! DynamoDB repository implementation.
//!
//! Implements `todos_core::storage::TodoRepository` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

use super::conversions::{item_to_todo, todo_key, todo_to_item};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
    todo_error_id,
};

/// DynamoDB-based repository implementation.
pub struct DynamoDbTodoRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbTodoRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn returned_attributes(
    attributes: Option<HashMap<String, AttributeValue>>,
    operation: &str,
) -> Result<TodoItem> {
    let attributes = attributes
        .ok_or_else(|| RepositoryError::InvalidData(format!("{operation} returned no item")))?;
    item_to_todo(&attributes)
}

#[async_trait]
impl TodoRepository for DynamoDbTodoRepository {
    async fn get_all_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let mut todos = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("userId = :userId")
                .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in output.items.unwrap_or_default() {
                todos.push(item_to_todo(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        todos.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.todo_id.cmp(&b.todo_id))
        });
        Ok(todos)
    }

    async fn create_todo(&self, item: &TodoItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(item)))
            .condition_expression("attribute_not_exists(todoId)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, todo_error_id(&item.user_id, &item.todo_id)))?;

        Ok(())
    }

    async fn update_todo(
        &self,
        update: &TodoUpdate,
        todo_id: &str,
        user_id: &str,
    ) -> Result<TodoItem> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(user_id, todo_id)))
            .update_expression("SET #name = :name, #dueDate = :dueDate, #done = :done")
            .expression_attribute_names("#name", "name")
            .expression_attribute_names("#dueDate", "dueDate")
            .expression_attribute_names("#done", "done")
            .expression_attribute_values(":name", AttributeValue::S(update.name.clone()))
            .expression_attribute_values(":dueDate", AttributeValue::S(update.due_date.clone()))
            .expression_attribute_values(":done", AttributeValue::Bool(update.done))
            .condition_expression("attribute_exists(todoId)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, todo_error_id(user_id, todo_id)))?;

        returned_attributes(output.attributes, "UpdateItem")
    }

    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<TodoItem> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(user_id, todo_id)))
            .condition_expression("attribute_exists(todoId)")
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, todo_error_id(user_id, todo_id)))?;

        returned_attributes(output.attributes, "DeleteItem")
    }

    async fn update_todo_item_attachment(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_url: &str,
    ) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(user_id, todo_id)))
            .update_expression("SET attachmentUrl = :attachmentUrl")
            .expression_attribute_values(
                ":attachmentUrl",
                AttributeValue::S(attachment_url.to_string()),
            )
            .condition_expression("attribute_exists(todoId)")
            .send()
            .await
            .map_err(|e| map_update_item_error(e, todo_error_id(user_id, todo_id)))?;

        Ok(())
    }
}
