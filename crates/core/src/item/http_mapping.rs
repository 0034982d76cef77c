//! Pure functions for mapping picus errors to HTTP-style responses.
//!
//! Both the HTTP API and the delete function render failures through
//! [`classify_error`], so the status codes and the public wording are
//! decided in one place. Internal detail never reaches the message.

use super::{Operation, PicusError};

/// Public message for failures the caller should not see the detail of.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Status code and caller-facing message for a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub status: u16,
    pub message: String,
}

/// Maps a [`PicusError`] to the status code and message returned to callers.
///
/// - `NotFound` -> 404 naming the key
/// - `InvalidInput` -> 400 with the input message
/// - `Store` -> 500 with a generic message for the operation
/// - `Unexpected` -> 500 `Internal server error`
///
/// # Examples
///
/// ```
/// use picus_core::item::{classify_error, PicusError};
///
/// let classified = classify_error(&PicusError::not_found("abc"));
/// assert_eq!(classified.status, 404);
/// assert_eq!(classified.message, "Item with id 'abc' not found");
/// ```
pub fn classify_error(error: &PicusError) -> ErrorClassification {
    match error {
        PicusError::NotFound { .. } => ErrorClassification {
            status: 404,
            message: error.to_string(),
        },
        PicusError::InvalidInput(message) => ErrorClassification {
            status: 400,
            message: message.clone(),
        },
        PicusError::Store { operation, .. } => ErrorClassification {
            status: 500,
            message: store_failure_message(*operation).to_string(),
        },
        PicusError::Unexpected(_) => ErrorClassification {
            status: 500,
            message: INTERNAL_SERVER_ERROR.to_string(),
        },
    }
}

/// Generic message reported when the store fails during `operation`.
pub fn store_failure_message(operation: Operation) -> &'static str {
    match operation {
        Operation::List => "Failed to retrieve items from database",
        Operation::Create => "Failed to create item in database",
        Operation::Read => "Failed to retrieve item from database",
        Operation::Delete => "Failed to delete item from database",
    }
}

/// Renders `code` as `"<code> <reason>"`, e.g. `"404 Not Found"`.
pub fn status_description(code: u16) -> String {
    let reason = match code {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => return code.to_string(),
    };
    format!("{code} {reason}")
}
