use serde::Deserialize;
use serde_json::Value;

/// The parts of an invocation event that can carry the item key.
///
/// Fields are kept as raw JSON: a field of an unexpected type only fails
/// the strategy that reads it, and every other field of the event is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEvent {
    #[serde(default)]
    pub path_parameters: Option<Value>,
    #[serde(default)]
    pub path: Option<Value>,
    #[serde(default)]
    pub raw_path: Option<Value>,
}

impl DeleteEvent {
    /// Reads the key-bearing fields out of a raw event payload.
    ///
    /// Fails only when the payload is not an event object at all.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
