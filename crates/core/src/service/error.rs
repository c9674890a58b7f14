use serde::Serialize;
use thiserror::Error;

use crate::attachment::SigningError;
use crate::storage::RepositoryError;
use crate::todo::ValidationErrors;

/// Which side of the service boundary a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request body did not match its schema.
    Validation,
    /// Storage, signing, or anything else the service delegated to.
    Collaborator,
}

impl ErrorKind {
    /// HTTP status code reported for this kind of failure.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Collaborator => 500,
        }
    }
}

/// The only error shape that crosses the service boundary.
///
/// Serializes as `{ "message": ..., "statusCode": ... }`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ServiceError {
    #[serde(skip)]
    kind: ErrorKind,
    message: String,
    status_code: u16,
}

impl ServiceError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: kind.status_code(),
        }
    }

    /// A request validation failure (400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// A failure reported by a collaborator (500).
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Collaborator, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(errors.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(error: RepositoryError) -> Self {
        Self::collaborator(error.to_string())
    }
}

impl From<SigningError> for ServiceError {
    fn from(error: SigningError) -> Self {
        Self::collaborator(error.to_string())
    }
}
