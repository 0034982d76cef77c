use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored record: a service-generated key and an opaque JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub data: serde_json::Value,
}

impl Item {
    pub fn new(id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Creates an item under a freshly generated v4 UUID.
    pub fn with_generated_id(data: serde_json::Value) -> Self {
        Self::new(Uuid::new_v4().to_string(), data)
    }
}
