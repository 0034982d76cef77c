//! Response envelope understood by the load balancer and API gateway
//! integrations.

use std::collections::BTreeMap;

use picus_core::item::{classify_error, status_description, PicusError};
use serde::Serialize;
use serde_json::{json, Value};

/// Function response: status line, JSON content type and a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub status_description: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Envelope {
    pub fn new(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            status_description: status_description(status_code),
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.to_string(),
        }
    }

    /// 200 with `{"message": ...}`.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(200, &json!({ "message": message.into() }))
    }

    /// Logs `err` and renders it as `{"detail": ...}` with its classified status.
    pub fn from_error(err: &PicusError) -> Self {
        err.log();

        let classified = classify_error(err);
        Self::new(classified.status, &json!({ "detail": classified.message }))
    }
}
