mod error;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::{Operation, PicusError};
pub use http_mapping::{
    classify_error, status_description, store_failure_message, ErrorClassification,
    INTERNAL_SERVER_ERROR,
};
pub use operations::{create_item, delete_item, get_item, list_items};
pub use requests::{parse_payload, INVALID_JSON_BODY, NO_DATA_PROVIDED};
pub use types::Item;
