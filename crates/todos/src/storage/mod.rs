//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! `todos_core::storage::TodoRepository` trait. The backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local HashMap storage
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p todos --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p todos --features dynamodb"
);

// Tests always run against the in-memory backend.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryTodoRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTodoRepository;
