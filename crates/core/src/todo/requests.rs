//! API request types for todo operations.
//!
//! Fields are optional so that a missing field reaches the validator and is
//! reported as a field error instead of a deserialization failure. Unknown
//! fields are rejected at deserialization time.

use serde::{Deserialize, Serialize};

/// Request payload for creating a new todo item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl CreateTodoRequest {
    /// Create a request with both required fields set.
    pub fn new(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            due_date: Some(due_date.into()),
        }
    }
}

/// Request payload for replacing the mutable fields of a todo item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl UpdateTodoRequest {
    /// Create a request with all required fields set.
    pub fn new(name: impl Into<String>, due_date: impl Into<String>, done: bool) -> Self {
        Self {
            name: Some(name.into()),
            due_date: Some(due_date.into()),
            done: Some(done),
        }
    }
}
