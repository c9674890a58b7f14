//! In-memory storage backend.
//!
//! Stores todo items in a HashMap wrapped in `Arc<RwLock<_>>`. Used as the
//! default backend for local development and in tests; data is lost when the
//! repository is dropped.

mod repository;

pub use repository::InMemoryTodoRepository;
