use std::fmt;

use thiserror::Error;

use crate::storage::RepositoryError;

/// The store-backed operation that was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Read,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list items",
            Operation::Create => "create item",
            Operation::Read => "read item",
            Operation::Delete => "delete item",
        };
        f.write_str(name)
    }
}

/// Failures surfaced by the picus operations.
///
/// `NotFound` and `InvalidInput` are client errors; `Store` and
/// `Unexpected` are system errors whose detail stays in the server log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PicusError {
    #[error("Item with id '{id}' not found")]
    NotFound { id: String },
    #[error("{0}")]
    InvalidInput(String),
    #[error("Failed to {operation}: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: RepositoryError,
    },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PicusError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn store(operation: Operation) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Store { operation, source }
    }

    /// Writes the failure to the server log with its full detail.
    pub fn log(&self) {
        match self {
            PicusError::NotFound { id } => {
                tracing::warn!(id = %id, "Item not found");
            }
            PicusError::InvalidInput(message) => {
                tracing::warn!(message = %message, "Rejected request");
            }
            PicusError::Store { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Store error");
            }
            PicusError::Unexpected(detail) => {
                tracing::error!(error = %detail, "Unexpected error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_key() {
        assert_eq!(
            PicusError::not_found("abc-123").to_string(),
            "Item with id 'abc-123' not found"
        );
    }

    #[test]
    fn test_store_display_includes_operation_and_source() {
        let error = PicusError::store(Operation::Delete)(RepositoryError::QueryFailed(
            "Table not found".to_string(),
        ));
        assert_eq!(
            error.to_string(),
            "Failed to delete item: Query failed: Table not found"
        );
    }

    #[test]
    fn test_invalid_input_display_is_message() {
        assert_eq!(
            PicusError::InvalidInput("No data provided".to_string()).to_string(),
            "No data provided"
        );
    }
}
