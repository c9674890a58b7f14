//! DynamoDB error mapping.
//!
//! All todo operations share the same transport, throttling and table
//! failures. Only a failed condition expression is operation specific: on
//! `PutItem` the key is already taken, on `UpdateItem` and `DeleteItem` the
//! item is missing.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use todos_core::storage::RepositoryError;

const ENTITY_TYPE: &str = "TodoItem";

/// Identifier used in error messages for the item at `(user_id, todo_id)`.
pub fn todo_error_id(user_id: &str, todo_id: &str) -> String {
    format!("{user_id}/{todo_id}")
}

pub fn map_query_error<R: Debug>(err: SdkError<QueryError, R>) -> RepositoryError {
    map_sdk_error(err, "Query", |_| None)
}

pub fn map_put_item_error<R: Debug>(
    err: SdkError<PutItemError, R>,
    id: String,
) -> RepositoryError {
    map_sdk_error(err, "PutItem", |err| {
        err.is_conditional_check_failed_exception()
            .then(|| RepositoryError::AlreadyExists {
                entity_type: ENTITY_TYPE,
                id,
            })
    })
}

pub fn map_update_item_error<R: Debug>(
    err: SdkError<UpdateItemError, R>,
    id: String,
) -> RepositoryError {
    map_sdk_error(err, "UpdateItem", |err| {
        err.is_conditional_check_failed_exception().then(|| not_found(id))
    })
}

pub fn map_delete_item_error<R: Debug>(
    err: SdkError<DeleteItemError, R>,
    id: String,
) -> RepositoryError {
    map_sdk_error(err, "DeleteItem", |err| {
        err.is_conditional_check_failed_exception().then(|| not_found(id))
    })
}

fn not_found(id: String) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY_TYPE,
        id,
    }
}

/// Shared mapping for one SDK call.
///
/// `on_condition_failed` gets the first look at service errors so each
/// operation can claim its own condition failures.
fn map_sdk_error<E, R>(
    err: SdkError<E, R>,
    operation: &'static str,
    on_condition_failed: impl FnOnce(&E) -> Option<RepositoryError>,
) -> RepositoryError
where
    E: ProvideErrorMetadata + Debug,
    R: Debug,
{
    let service_err = match err {
        SdkError::ServiceError(context) => context.into_err(),
        err @ (SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) => {
            return RepositoryError::ConnectionFailed(format!(
                "{operation} did not reach DynamoDB: {err:?}"
            ));
        }
        err => return RepositoryError::QueryFailed(format!("{operation} failed: {err:?}")),
    };

    if let Some(mapped) = on_condition_failed(&service_err) {
        return mapped;
    }

    let reason = match service_err.code() {
        Some("ResourceNotFoundException") => "table does not exist",
        Some("ProvisionedThroughputExceededException") => "throughput exceeded, retry later",
        Some("RequestLimitExceeded") => "account request limit exceeded, retry later",
        Some("TransactionConflictException") => "conflicting transaction, retry later",
        Some("InternalServerError") => "DynamoDB internal server error",
        _ => {
            return RepositoryError::QueryFailed(format!("{operation} failed: {service_err:?}"))
        }
    };
    RepositoryError::QueryFailed(format!("{operation}: {reason}"))
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::types::error::ConditionalCheckFailedException;

    use super::*;

    fn condition_failed() -> ConditionalCheckFailedException {
        ConditionalCheckFailedException::builder()
            .message("The conditional request failed")
            .build()
    }

    fn with_code(code: &str) -> ErrorMetadata {
        ErrorMetadata::builder().code(code).build()
    }

    #[test]
    fn test_todo_error_id() {
        assert_eq!(todo_error_id("user1", "t1"), "user1/t1");
    }

    #[test]
    fn test_duplicate_put_is_already_exists() {
        let err = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(condition_failed()),
            (),
        );

        assert_eq!(
            map_put_item_error(err, todo_error_id("user1", "t1")),
            RepositoryError::AlreadyExists {
                entity_type: "TodoItem",
                id: "user1/t1".to_string(),
            }
        );
    }

    #[test]
    fn test_failed_update_condition_is_not_found() {
        let err = SdkError::service_error(
            UpdateItemError::ConditionalCheckFailedException(condition_failed()),
            (),
        );

        assert_eq!(
            map_update_item_error(err, todo_error_id("user1", "t1")),
            RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: "user1/t1".to_string(),
            }
        );
    }

    #[test]
    fn test_failed_delete_condition_is_not_found() {
        let err = SdkError::service_error(
            DeleteItemError::ConditionalCheckFailedException(condition_failed()),
            (),
        );

        assert_eq!(
            map_delete_item_error(err, todo_error_id("user2", "t9")),
            RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: "user2/t9".to_string(),
            }
        );
    }

    #[test]
    fn test_throttling_is_query_failed() {
        let err = SdkError::service_error(
            UpdateItemError::generic(with_code("ProvisionedThroughputExceededException")),
            (),
        );

        assert_eq!(
            map_update_item_error(err, todo_error_id("user1", "t1")),
            RepositoryError::QueryFailed(
                "UpdateItem: throughput exceeded, retry later".to_string()
            )
        );
    }

    #[test]
    fn test_missing_table_is_query_failed() {
        let err = SdkError::service_error(
            QueryError::generic(with_code("ResourceNotFoundException")),
            (),
        );

        assert_eq!(
            map_query_error(err),
            RepositoryError::QueryFailed("Query: table does not exist".to_string())
        );
    }

    #[test]
    fn test_unknown_service_error_keeps_operation_name() {
        let err = SdkError::service_error(PutItemError::generic(with_code("Mystery")), ());

        assert!(matches!(
            map_put_item_error(err, todo_error_id("user1", "t1")),
            RepositoryError::QueryFailed(msg) if msg.starts_with("PutItem failed:")
        ));
    }

    #[test]
    fn test_timeout_is_connection_failed() {
        let err: SdkError<DeleteItemError, ()> = SdkError::timeout_error("operation timed out");

        assert!(matches!(
            map_delete_item_error(err, todo_error_id("user1", "t1")),
            RepositoryError::ConnectionFailed(msg)
                if msg.starts_with("DeleteItem did not reach DynamoDB")
        ));
    }
}
