mod error;
mod todos;

pub use error::{ErrorKind, ServiceError};
pub use todos::TodoService;
