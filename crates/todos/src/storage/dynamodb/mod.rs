//! DynamoDB storage backend implementation.
//!
//! Items live in a single table with partition key `userId` and sort key
//! `todoId`, accessed through `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbTodoRepository;
