//! Request validation.
//!
//! Pure and synchronous. Each function returns the validated value or every
//! field error found, so callers can reject a request before any I/O happens.

use super::error::{FieldError, ValidationErrors};
use super::requests::{CreateTodoRequest, UpdateTodoRequest};
use super::types::{NewTodo, TodoUpdate};

/// Validates a create request: `name` and `dueDate` are required, non-empty strings.
pub fn validate_create_request(request: &CreateTodoRequest) -> Result<NewTodo, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required_string(request.name.as_deref(), "name", &mut errors);
    let due_date = required_string(request.due_date.as_deref(), "dueDate", &mut errors);

    match (name, due_date) {
        (Some(name), Some(due_date)) if errors.is_empty() => Ok(NewTodo { name, due_date }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validates an update request: `name`, `dueDate` and `done` are all required.
pub fn validate_update_request(
    request: &UpdateTodoRequest,
) -> Result<TodoUpdate, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required_string(request.name.as_deref(), "name", &mut errors);
    let due_date = required_string(request.due_date.as_deref(), "dueDate", &mut errors);
    if request.done.is_none() {
        errors.push(FieldError::Missing("done"));
    }

    match (name, due_date, request.done) {
        (Some(name), Some(due_date), Some(done)) if errors.is_empty() => Ok(TodoUpdate {
            name,
            due_date,
            done,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

fn required_string(
    value: Option<&str>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        None => {
            errors.push(FieldError::Missing(field));
            None
        }
        Some(s) if s.is_empty() => {
            errors.push(FieldError::Empty(field));
            None
        }
        Some(s) => Some(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create_request() {
        let request = CreateTodoRequest::new("Buy milk", "2024-01-01");

        let todo = validate_create_request(&request).unwrap();

        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.due_date, "2024-01-01");
    }

    #[test]
    fn test_create_missing_name() {
        let request = CreateTodoRequest {
            name: None,
            due_date: Some("2024-01-01".to_string()),
        };

        let errors = validate_create_request(&request).unwrap_err();

        assert_eq!(errors.errors(), &[FieldError::Missing("name")]);
        assert_eq!(errors.to_string(), "\"name\" is required");
    }

    #[test]
    fn test_create_empty_fields_are_rejected() {
        let request = CreateTodoRequest::new("", "");

        let errors = validate_create_request(&request).unwrap_err();

        assert_eq!(
            errors.errors(),
            &[FieldError::Empty("name"), FieldError::Empty("dueDate")]
        );
    }

    #[test]
    fn test_create_whitespace_name_is_accepted() {
        let request = CreateTodoRequest::new(" ", "2024-01-01");

        assert!(validate_create_request(&request).is_ok());
    }

    #[test]
    fn test_valid_update_request() {
        let request = UpdateTodoRequest::new("X", "2024-02-01", true);

        let update = validate_update_request(&request).unwrap();

        assert_eq!(
            update,
            TodoUpdate {
                name: "X".to_string(),
                due_date: "2024-02-01".to_string(),
                done: true,
            }
        );
    }

    #[test]
    fn test_update_missing_each_field() {
        let base = UpdateTodoRequest::new("X", "2024-02-01", false);

        let missing_name = UpdateTodoRequest {
            name: None,
            ..base.clone()
        };
        let missing_due_date = UpdateTodoRequest {
            due_date: None,
            ..base.clone()
        };
        let missing_done = UpdateTodoRequest {
            done: None,
            ..base
        };

        assert_eq!(
            validate_update_request(&missing_name).unwrap_err().errors(),
            &[FieldError::Missing("name")]
        );
        assert_eq!(
            validate_update_request(&missing_due_date)
                .unwrap_err()
                .errors(),
            &[FieldError::Missing("dueDate")]
        );
        assert_eq!(
            validate_update_request(&missing_done).unwrap_err().errors(),
            &[FieldError::Missing("done")]
        );
    }

    #[test]
    fn test_update_empty_request_reports_all_fields() {
        let errors = validate_update_request(&UpdateTodoRequest::default()).unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                FieldError::Missing("name"),
                FieldError::Missing("dueDate"),
                FieldError::Missing("done"),
            ]
        );
    }
}
