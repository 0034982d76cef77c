//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `picus_core::storage`,
//! keeping the message DynamoDB reported so it ends up in the server log.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use picus_core::storage::RepositoryError;

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(e) => table_not_found(e.message()),
        GetItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        GetItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        GetItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("GetItem failed: {}", reported(&err))),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(e) => table_not_found(e.message()),
        PutItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        PutItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict".to_string())
        }
        PutItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("PutItem failed: {}", reported(&err))),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(e) => table_not_found(e.message()),
        DeleteItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        DeleteItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict".to_string())
        }
        DeleteItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {}", reported(&err))),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(e) => table_not_found(e.message()),
        ScanError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        ScanError::RequestLimitExceeded(_) => request_limit_exceeded(),
        ScanError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("Scan failed: {}", reported(&err))),
    }
}

/// Requests that never got a response from DynamoDB.
fn connection_failure<E: Debug, R: Debug>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            Some(RepositoryError::ConnectionFailed(format!("{err:?}")))
        }
        _ => None,
    }
}

fn reported(err: &impl ProvideErrorMetadata) -> String {
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (None, Some(message)) => message.to_string(),
        (Some(code), None) => code.to_string(),
        (None, None) => "unknown error".to_string(),
    }
}

fn table_not_found(message: Option<&str>) -> RepositoryError {
    RepositoryError::QueryFailed(format!(
        "Table not found: {}",
        message.unwrap_or("Requested resource not found")
    ))
}

fn throughput_exceeded() -> RepositoryError {
    RepositoryError::QueryFailed("Throughput exceeded".to_string())
}

fn request_limit_exceeded() -> RepositoryError {
    RepositoryError::QueryFailed("Request limit exceeded".to_string())
}

fn internal_server_error() -> RepositoryError {
    RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
}
