use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the attachments bucket (default: "http://localhost:4566/todos-attachments")
    pub attachments_base_url: String,
    /// Lifetime of generated attachment URLs in seconds (default: 300)
    pub signed_url_expiration_seconds: u64,
    /// DynamoDB table holding todo items (default: "todos")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ATTACHMENTS_BASE_URL` - Attachments bucket base URL
    /// - `SIGNED_URL_EXPIRATION_SECONDS` - Attachment URL lifetime (default: 300)
    /// - `TODOS_TABLE_NAME` - DynamoDB table name (default: "todos")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            attachments_base_url: env::var("ATTACHMENTS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4566/todos-attachments".to_string()),
            signed_url_expiration_seconds: env::var("SIGNED_URL_EXPIRATION_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            table_name: env::var("TODOS_TABLE_NAME").unwrap_or_else(|_| "todos".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the attachment URL lifetime as a Duration.
    pub fn signed_url_expiration(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
