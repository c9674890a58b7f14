//! Shared application state.
//!
//! Wires the configured storage backend and attachment signer into a
//! `TodoService` that every handler shares.

use std::{sync::Arc, time::Duration};

use todos_core::service::TodoService;
use todos_core::storage::TodoRepository;

use crate::attachments::BucketUrlSigner;
use crate::config::Config;

#[cfg(feature = "dynamodb")]
use crate::storage::DynamoDbTodoRepository;
#[cfg(any(feature = "inmemory", test))]
use crate::storage::InMemoryTodoRepository;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(service: TodoService, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    /// Builds the state for the storage backend selected at compile time.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let signer = BucketUrlSigner::new(
            &config.attachments_base_url,
            config.signed_url_expiration(),
        )?;
        let repository = init_repository(config).await;

        tracing::info!(
            attachments_base_url = %config.attachments_base_url,
            signed_url_expiration_seconds = config.signed_url_expiration_seconds,
            "Initialized attachment signer"
        );

        Ok(Self::new(
            TodoService::new(repository, Arc::new(signer)),
            config.request_timeout(),
        ))
    }
}

#[cfg(feature = "inmemory")]
async fn init_repository(_config: &Config) -> Arc<dyn TodoRepository> {
    tracing::info!("Using in-memory storage");
    Arc::new(InMemoryTodoRepository::new())
}

#[cfg(feature = "dynamodb")]
async fn init_repository(config: &Config) -> Arc<dyn TodoRepository> {
    let repository = DynamoDbTodoRepository::from_env(&config.table_name).await;
    tracing::info!(table = repository.table_name(), "Using DynamoDB storage");
    Arc::new(repository)
}

#[cfg(test)]
impl AppState {
    /// State backed by an empty in-memory repository.
    pub fn in_memory() -> Self {
        let signer = BucketUrlSigner::new(
            "https://bucket.example.com/attachments",
            Duration::from_secs(300),
        )
        .unwrap();
        let service = TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(signer),
        );
        Self::new(service, Duration::from_secs(10))
    }
}
