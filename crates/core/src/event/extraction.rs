use serde_json::Value;

use super::DeleteEvent;

/// A pure function that tries to find the item key in an event.
pub type KeyStrategy = fn(&DeleteEvent) -> Option<String>;

/// Strategies in order of precedence.
pub const KEY_STRATEGIES: [KeyStrategy; 3] =
    [key_from_path_parameters, key_from_path, key_from_raw_path];

/// Returns the first non-empty key found by [`KEY_STRATEGIES`].
pub fn extract_key(event: &DeleteEvent) -> Option<String> {
    KEY_STRATEGIES.iter().find_map(|strategy| strategy(event))
}

/// `pathParameters.key`, as set by API Gateway routes.
pub fn key_from_path_parameters(event: &DeleteEvent) -> Option<String> {
    event
        .path_parameters
        .as_ref()
        .and_then(|params| params.get("key"))
        .and_then(Value::as_str)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

/// Second segment of `path`, e.g. `abc` in `/picus/abc`.
pub fn key_from_path(event: &DeleteEvent) -> Option<String> {
    event.path.as_ref().and_then(Value::as_str).and_then(second_segment)
}

/// Second segment of `rawPath`, as sent by function URLs and HTTP APIs.
pub fn key_from_raw_path(event: &DeleteEvent) -> Option<String> {
    event.raw_path.as_ref().and_then(Value::as_str).and_then(second_segment)
}

fn second_segment(path: &str) -> Option<String> {
    path.trim_matches('/')
        .split('/')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn event(key: Option<&str>, path: Option<&str>, raw_path: Option<&str>) -> DeleteEvent {
        DeleteEvent {
            path_parameters: key.map(|k| json!({ "key": k })),
            path: path.map(Value::from),
            raw_path: raw_path.map(Value::from),
        }
    }

    #[test]
    fn test_path_parameter_wins_over_path() {
        let event = event(Some("A"), Some("/picus/B"), None);
        assert_eq!(extract_key(&event), Some("A".to_string()));
    }

    #[test]
    fn test_path_used_without_path_parameters() {
        let event = event(None, Some("/picus/B"), None);
        assert_eq!(extract_key(&event), Some("B".to_string()));
    }

    #[test]
    fn test_path_wins_over_raw_path() {
        let event = event(None, Some("/picus/B"), Some("/picus/C"));
        assert_eq!(extract_key(&event), Some("B".to_string()));
    }

    #[test]
    fn test_raw_path_is_last_resort() {
        let event = event(None, Some("/picus"), Some("/picus/C/"));
        assert_eq!(extract_key(&event), Some("C".to_string()));
    }

    #[test]
    fn test_empty_path_parameter_falls_through() {
        let event = event(Some(""), Some("/picus/B"), None);
        assert_eq!(extract_key(&event), Some("B".to_string()));
    }

    #[test]
    fn test_path_parameters_without_key_fall_through() {
        let event = DeleteEvent {
            path_parameters: Some(json!({ "id": "X" })),
            path: Some(json!("/picus/B")),
            raw_path: None,
        };
        assert_eq!(extract_key(&event), Some("B".to_string()));
    }

    #[test]
    fn test_null_path_parameter_falls_through() {
        let event = DeleteEvent {
            path_parameters: Some(json!({ "key": null })),
            path: Some(json!("/picus/B")),
            raw_path: None,
        };
        assert_eq!(extract_key(&event), Some("B".to_string()));
    }

    #[test]
    fn test_wrongly_typed_fields_only_fail_their_strategy() {
        let event = DeleteEvent {
            path_parameters: Some(json!("not-a-map")),
            path: Some(json!(42)),
            raw_path: Some(json!("/picus/C")),
        };
        assert_eq!(key_from_path_parameters(&event), None);
        assert_eq!(key_from_path(&event), None);
        assert_eq!(extract_key(&event), Some("C".to_string()));
    }

    #[test]
    fn test_odd_raw_path_does_not_hide_path_parameter() {
        let event = DeleteEvent {
            path_parameters: Some(json!({ "key": "A" })),
            path: None,
            raw_path: Some(json!(7)),
        };
        assert_eq!(extract_key(&event), Some("A".to_string()));
    }

    #[test]
    fn test_no_key_anywhere() {
        assert_eq!(extract_key(&event(None, None, None)), None);
        assert_eq!(extract_key(&event(None, Some("/picus"), None)), None);
        assert_eq!(extract_key(&event(None, Some("/"), Some(""))), None);
    }

    #[test]
    fn test_second_segment_ignores_outer_slashes() {
        assert_eq!(second_segment("//picus/abc//"), Some("abc".to_string()));
        assert_eq!(second_segment("picus/abc/extra"), Some("abc".to_string()));
        assert_eq!(second_segment("/picus//abc"), None);
    }
}
