//! Todo business logic.
//!
//! Every operation validates first (when it carries a body), then makes its
//! collaborator calls. Failures are logged once where they are caught and
//! returned as a [`ServiceError`].

use std::fmt::Display;
use std::sync::Arc;

use crate::attachment::AttachmentUrlSigner;
use crate::storage::TodoRepository;
use crate::todo::{
    validate_create_request, validate_update_request, CreateTodoRequest, FieldError, TodoItem,
    UpdateTodoRequest, ValidationErrors,
};

use super::ServiceError;

/// Orchestrates todo CRUD on top of injected storage and signing collaborators.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    signer: Arc<dyn AttachmentUrlSigner>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>, signer: Arc<dyn AttachmentUrlSigner>) -> Self {
        Self { repository, signer }
    }

    /// Lists every item owned by `user_id`.
    pub async fn get_todos_for_user(&self, user_id: &str) -> Result<Vec<TodoItem>, ServiceError> {
        let items = self
            .repository
            .get_all_todos(user_id)
            .await
            .map_err(collaborator_failure("get todos"))?;

        tracing::info!(user_id = %user_id, count = items.len(), "Fetched todo items for user");
        tracing::debug!(user_id = %user_id, items = ?items, "Todo items");

        Ok(items)
    }

    /// Validates `request` and persists a new pending item for `user_id`.
    pub async fn create_todo(
        &self,
        request: &CreateTodoRequest,
        user_id: &str,
    ) -> Result<TodoItem, ServiceError> {
        let todo = validate_create_request(request).map_err(validation_failure)?;
        let item = TodoItem::new(user_id, todo);

        self.repository
            .create_todo(&item)
            .await
            .map_err(collaborator_failure("create todo"))?;

        tracing::info!(user_id = %user_id, todo_id = %item.todo_id, item = ?item, "Created todo item");

        Ok(item)
    }

    /// Validates `request` and replaces the mutable fields of `(user_id, todo_id)`.
    pub async fn update_todo(
        &self,
        request: &UpdateTodoRequest,
        todo_id: &str,
        user_id: &str,
    ) -> Result<TodoItem, ServiceError> {
        let update = validate_update_request(request).map_err(validation_failure)?;

        let item = self
            .repository
            .update_todo(&update, todo_id, user_id)
            .await
            .map_err(collaborator_failure("update todo"))?;

        tracing::info!(user_id = %user_id, todo_id = %todo_id, update = ?update, "Updated todo item");

        Ok(item)
    }

    /// Deletes `(user_id, todo_id)` and returns the removed item.
    pub async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<TodoItem, ServiceError> {
        let item = self
            .repository
            .delete_todo(todo_id, user_id)
            .await
            .map_err(collaborator_failure("delete todo"))?;

        tracing::info!(user_id = %user_id, todo_id = %todo_id, "Deleted todo item");

        Ok(item)
    }

    /// Produces a time-limited upload URL for `attachment_id`.
    pub async fn generate_signed_url(&self, attachment_id: &str) -> Result<String, ServiceError> {
        tracing::info!(attachment_id = %attachment_id, "Generating signed URL");

        let url = self
            .signer
            .attachment_url(attachment_id)
            .await
            .map_err(collaborator_failure("generate signed url"))?;

        tracing::info!(attachment_id = %attachment_id, "Signed URL generated");

        Ok(url)
    }

    /// Stores the URL of `attachment_id` on `(user_id, todo_id)`.
    ///
    /// The two steps are not transactional: if persisting fails after signing,
    /// the signed URL is simply dropped.
    pub async fn update_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
        attachment_id: &str,
    ) -> Result<(), ServiceError> {
        let attachment_url = self
            .signer
            .attachment_url(attachment_id)
            .await
            .map_err(collaborator_failure("update attachment url"))?;

        self.repository
            .update_todo_item_attachment(user_id, todo_id, &attachment_url)
            .await
            .map_err(collaborator_failure("update attachment url"))?;

        tracing::info!(user_id = %user_id, todo_id = %todo_id, "Attachment URL updated");

        Ok(())
    }
}

fn validation_failure(errors: ValidationErrors) -> ServiceError {
    let fields: Vec<&str> = errors.errors().iter().map(FieldError::field).collect();
    tracing::error!(error = %errors, fields = ?fields, "Validation error");
    errors.into()
}

fn collaborator_failure<E>(operation: &'static str) -> impl FnOnce(E) -> ServiceError
where
    E: Display + Into<ServiceError>,
{
    move |err| {
        tracing::error!(operation, error = %err, "Todo operation failed");
        err.into()
    }
}
