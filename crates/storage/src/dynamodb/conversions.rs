//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and items.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use picus_core::item::Item;
use picus_core::storage::{RepositoryError, ScanCursor};
use serde_json::{Map, Number, Value};

pub const ATTR_ID: &str = "id";
pub const ATTR_DATA: &str = "data";

// ============================================================================
// Item conversions
// ============================================================================

/// Convert an Item to DynamoDB item.
pub fn item_to_record(item: &Item) -> HashMap<String, AttributeValue> {
    let mut record = HashMap::new();

    record.insert(ATTR_ID.to_string(), AttributeValue::S(item.id.clone()));
    record.insert(ATTR_DATA.to_string(), json_to_attribute(&item.data));

    record
}

/// Convert a DynamoDB item to Item.
///
/// A record without a `data` attribute reads back with `null` data.
pub fn record_to_item(record: &HashMap<String, AttributeValue>) -> Result<Item, RepositoryError> {
    let id = get_string(record, ATTR_ID)?;
    let data = match record.get(ATTR_DATA) {
        Some(value) => attribute_to_json(value)?,
        None => Value::Null,
    };

    Ok(Item { id, data })
}

/// Key map addressing a single item.
pub fn key_for(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

// ============================================================================
// JSON <-> AttributeValue
// ============================================================================

/// Convert a JSON value to its native DynamoDB representation.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to JSON.
///
/// String and number sets become arrays. Binary attributes are rejected.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

/// Parse a DynamoDB number, preferring integers.
///
/// DynamoDB normalizes `N` values, so a float with no fractional part
/// (`2.0`) is stored as `2` and reads back as the integer `2`. Such a
/// payload is numerically the same but not `Value`-equal to what was put.
fn parse_number(n: &str) -> Result<Value, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(i.into()));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(u.into()));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {n}")))
}

// ============================================================================
// Scan cursors
// ============================================================================

/// Encode a `LastEvaluatedKey` as an opaque cursor.
pub fn cursor_from_key(
    key: &HashMap<String, AttributeValue>,
) -> Result<ScanCursor, RepositoryError> {
    let map = key
        .iter()
        .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
        .collect::<Result<Map<_, _>, _>>()?;

    serde_json::to_string(&map)
        .map(ScanCursor::new)
        .map_err(|e| RepositoryError::Serialization(format!("Invalid scan key: {e}")))
}

/// Decode a cursor back into an `ExclusiveStartKey`.
pub fn key_from_cursor(
    cursor: &ScanCursor,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let map: Map<String, Value> = serde_json::from_str(cursor.as_str())
        .map_err(|e| RepositoryError::Serialization(format!("Invalid scan cursor: {e}")))?;

    Ok(map
        .iter()
        .map(|(k, v)| (k.clone(), json_to_attribute(v)))
        .collect())
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    record: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    record
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
