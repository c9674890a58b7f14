//! Functional core for the todos service.
//!
//! Holds the domain types, request validation, collaborator traits and the
//! [`service::TodoService`] that orchestrates them. Concrete storage backends
//! and the HTTP shell live in the `todos` crate.

pub mod attachment;
pub mod service;
pub mod storage;
pub mod todo;
