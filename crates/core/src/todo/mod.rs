mod error;
mod requests;
mod types;
mod validation;

pub use error::{FieldError, ValidationErrors};
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use types::{NewTodo, TodoItem, TodoUpdate};
pub use validation::{validate_create_request, validate_update_request};
