use thiserror::Error;

/// A single field that failed request validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("\"{0}\" is required")]
    Missing(&'static str),
    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),
}

impl FieldError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing(field) | FieldError::Empty(field) => field,
        }
    }
}

/// Every field error found in one request, in schema order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
