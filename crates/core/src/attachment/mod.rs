//! Attachment URL signing contract.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while producing an attachment URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Invalid attachment id: {0:?}")]
    InvalidAttachmentId(String),
    #[error("Invalid attachments base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Signing failed: {0}")]
    Failed(String),
}

/// Produces time-limited URLs for attachment objects.
#[async_trait]
pub trait AttachmentUrlSigner: Send + Sync {
    /// Returns the URL under which the attachment object can be uploaded and read.
    async fn attachment_url(&self, attachment_id: &str) -> Result<String, SigningError>;
}
