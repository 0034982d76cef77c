//! Delete events delivered by the function runtime.
//!
//! Depending on the front door (API Gateway, ALB, function URL) the item
//! key arrives in a different field, so extraction is an ordered list of
//! strategies and the first one that yields a non-empty key wins.

mod extraction;
mod types;

pub use extraction::{
    extract_key, key_from_path, key_from_path_parameters, key_from_raw_path, KeyStrategy,
    KEY_STRATEGIES,
};
pub use types::DeleteEvent;
