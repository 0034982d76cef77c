//! Validation of create-item payloads.

use serde_json::Value;

use super::PicusError;

pub const NO_DATA_PROVIDED: &str = "No data provided";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Parses a raw request body into the payload to store.
///
/// A missing body, or a JSON value that carries nothing (`null`, `false`,
/// `0`, `""`, `[]`, `{}`), is rejected as "No data provided".
pub fn parse_payload(body: &[u8]) -> Result<Value, PicusError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(PicusError::InvalidInput(NO_DATA_PROVIDED.to_string()));
    }

    let data: Value = serde_json::from_slice(body)
        .map_err(|_| PicusError::InvalidInput(INVALID_JSON_BODY.to_string()))?;

    if is_empty_payload(&data) {
        return Err(PicusError::InvalidInput(NO_DATA_PROVIDED.to_string()));
    }

    Ok(data)
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejection(body: &[u8]) -> String {
        match parse_payload(body) {
            Err(PicusError::InvalidInput(message)) => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_is_missing_data() {
        assert_eq!(rejection(b""), NO_DATA_PROVIDED);
        assert_eq!(rejection(b"  \n"), NO_DATA_PROVIDED);
    }

    #[test]
    fn test_empty_json_values_are_missing_data() {
        for body in ["null", "{}", "[]", "\"\"", "false", "0"] {
            assert_eq!(rejection(body.as_bytes()), NO_DATA_PROVIDED, "body: {body}");
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert_eq!(rejection(b"{\"name\": "), INVALID_JSON_BODY);
        assert_eq!(rejection(b"name=sample"), INVALID_JSON_BODY);
    }

    #[test]
    fn test_payload_is_kept_verbatim() {
        let body = br#"{"name":"sample","nested":{"list":[1,2.5,null,true]}}"#;

        let data = parse_payload(body).unwrap();

        assert_eq!(
            data,
            json!({ "name": "sample", "nested": { "list": [1, 2.5, null, true] } })
        );
    }

    #[test]
    fn test_non_object_payloads_are_accepted() {
        assert_eq!(parse_payload(b"[1]").unwrap(), json!([1]));
        assert_eq!(parse_payload(b"\"text\"").unwrap(), json!("text"));
        assert_eq!(parse_payload(b"42").unwrap(), json!(42));
    }
}
