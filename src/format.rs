//! Rendering of inbound payloads for the log.
//!
//! JSON payloads are re-serialized with two-space indentation and long string
//! values are cut down so a single large field cannot flood the log. Anything
//! that does not parse is shown exactly as received.

use serde_json::Value;

/// Marker appended to truncated strings.
pub const ELLIPSIS: &str = "...";

/// A payload ready to be placed in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPayload {
    /// Text to display
    pub text: String,
    /// Why the payload was shown raw, if it was
    pub parse_error: Option<String>,
}

impl RenderedPayload {
    pub fn is_json(&self) -> bool {
        self.parse_error.is_none()
    }
}

/// Shorten `s` to `max_chars` characters plus [`ELLIPSIS`] when it is longer.
///
/// Returns `None` when the string already fits.
pub fn truncate_str(s: &str, max_chars: usize) -> Option<String> {
    let mut chars = s.char_indices();
    match chars.nth(max_chars) {
        None => None,
        Some((cut, _)) => Some(format!("{}{}", &s[..cut], ELLIPSIS)),
    }
}

/// Truncate every string value in `value`, recursively. Object keys are left alone.
pub fn truncate_strings(value: &mut Value, max_chars: usize) {
    match value {
        Value::String(s) => {
            if let Some(short) = truncate_str(s, max_chars) {
                *s = short;
            }
        }
        Value::Array(items) => {
            for item in items {
                truncate_strings(item, max_chars);
            }
        }
        Value::Object(map) => {
            for (_, item) in map.iter_mut() {
                truncate_strings(item, max_chars);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Render one inbound payload.
pub fn render_payload(raw: &str, max_chars: usize) -> RenderedPayload {
    let mut value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            return RenderedPayload {
                text: raw.to_string(),
                parse_error: Some(e.to_string()),
            }
        }
    };

    truncate_strings(&mut value, max_chars);

    match serde_json::to_string_pretty(&value) {
        Ok(text) => RenderedPayload {
            text,
            parse_error: None,
        },
        // Serializing a Value only fails on non-string map keys, which
        // from_str cannot produce; fall back to raw to be safe
        Err(e) => RenderedPayload {
            text: raw.to_string(),
            parse_error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_over_limit() {
        assert_eq!(truncate_str("abcdef", 3), Some("abc...".to_string()));
    }

    #[test]
    fn test_truncate_str_at_limit_unchanged() {
        assert_eq!(truncate_str("abc", 3), None);
        assert_eq!(truncate_str("ab", 3), None);
        assert_eq!(truncate_str("", 0), None);
    }

    #[test]
    fn test_truncate_str_counts_chars_not_bytes() {
        assert_eq!(truncate_str("żółw", 4), None);
        assert_eq!(truncate_str("żółwie", 4), Some("żółw...".to_string()));
    }

    #[test]
    fn test_render_nested_truncation() {
        let long = "x".repeat(60);
        let raw = format!(
            r#"{{"name":"{long}","items":[{{"note":"{long}"}},"short"],"n":7}}"#,
            long = long
        );

        let rendered = render_payload(&raw, 50);
        assert!(rendered.is_json());

        let short = format!("{}...", "x".repeat(50));
        let expected = format!(
            "{{\n  \"name\": \"{s}\",\n  \"items\": [\n    {{\n      \"note\": \"{s}\"\n    }},\n    \"short\"\n  ],\n  \"n\": 7\n}}",
            s = short
        );
        assert_eq!(rendered.text, expected);
    }

    #[test]
    fn test_render_preserves_key_order() {
        let rendered = render_payload(r#"{"z":1,"a":2,"m":3}"#, 50);
        assert_eq!(rendered.text, "{\n  \"z\": 1,\n  \"a\": 2,\n  \"m\": 3\n}");
    }

    #[test]
    fn test_render_keys_are_not_truncated() {
        let key = "k".repeat(20);
        let raw = format!(r#"{{"{}":"v"}}"#, key);
        let rendered = render_payload(&raw, 5);
        assert!(rendered.text.contains(&key));
    }

    #[test]
    fn test_render_top_level_string() {
        let rendered = render_payload(r#""abcdefgh""#, 4);
        assert_eq!(rendered.text, "\"abcd...\"");
    }

    #[test]
    fn test_render_scalars_and_empty_containers() {
        assert_eq!(render_payload("42", 50).text, "42");
        assert_eq!(render_payload("null", 50).text, "null");
        assert_eq!(render_payload("{}", 50).text, "{}");
        assert_eq!(render_payload("[]", 50).text, "[]");
    }

    #[test]
    fn test_render_invalid_json_is_raw() {
        let raw = "not json {";
        let rendered = render_payload(raw, 50);
        assert_eq!(rendered.text, raw);
        assert!(!rendered.is_json());
        assert!(rendered.parse_error.is_some());
    }

    #[test]
    fn test_render_empty_payload_is_raw() {
        let rendered = render_payload("", 50);
        assert_eq!(rendered.text, "");
        assert!(rendered.parse_error.is_some());
    }

    #[test]
    fn test_render_invalid_json_not_truncated() {
        let raw = "y".repeat(200);
        assert_eq!(render_payload(&raw, 50).text, raw);
    }
}
