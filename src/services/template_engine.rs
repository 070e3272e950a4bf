use std::fmt::Write;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde_json::{Number, Value};
use crate::config::constants::{
    CONTENT_TOKEN, DEFAULT_LOCAL_DATETIME_FORMAT, ISO_DATETIME_TOKEN, LOCAL_DATETIME_TOKEN,
};

/// Floats below this magnitude convert to `i64` exactly.
const I64_SAFE_BOUND: f64 = 9_007_199_254_740_992.0;

/// Turns a payload template into the exact request body.
///
/// Substitution runs on the serialized JSON text. Each placeholder is replaced
/// at most once, first occurrence only, in this order: `{{content}}`,
/// `{{isoDateTime}}`, `{{localDateTime}}`. Later occurrences of the same
/// token are sent as-is.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    local_datetime_format: String,
}

impl TemplateEngine {
    pub fn new(local_datetime_format: &str) -> Self {
        let local_datetime_format = if Self::is_valid_format(local_datetime_format) {
            local_datetime_format.to_string()
        } else {
            log::warn!(
                "⚠️ Invalid local datetime format '{}', using '{}'",
                local_datetime_format, DEFAULT_LOCAL_DATETIME_FORMAT
            );
            DEFAULT_LOCAL_DATETIME_FORMAT.to_string()
        };

        Self { local_datetime_format }
    }

    pub fn is_valid_format(format: &str) -> bool {
        !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
    }

    pub fn render(&self, payload: &Value, content: Option<&str>) -> String {
        self.render_at(payload, content, Utc::now())
    }

    pub fn render_at(&self, payload: &Value, content: Option<&str>, now: DateTime<Utc>) -> String {
        let mut payload = payload.clone();
        integral_floats_as_integers(&mut payload);

        payload
            .to_string()
            .replacen(CONTENT_TOKEN, &escape_json_value(content), 1)
            .replacen(ISO_DATETIME_TOKEN, &iso_datetime(now), 1)
            .replacen(LOCAL_DATETIME_TOKEN, &self.local_datetime(now), 1)
    }

    fn local_datetime(&self, now: DateTime<Utc>) -> String {
        let local = now.with_timezone(&Local);
        let mut formatted = String::new();
        if write!(formatted, "{}", local.format(&self.local_datetime_format)).is_err() {
            formatted = local.format(DEFAULT_LOCAL_DATETIME_FORMAT).to_string();
        }
        formatted
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_DATETIME_FORMAT)
    }
}

/// Writes whole floats such as `1.0` as `1`, matching how JavaScript
/// serializes numbers.
#[allow(clippy::cast_possible_truncation)]
fn integral_floats_as_integers(value: &mut Value) {
    match value {
        Value::Number(number) => {
            if let Some(float) = number.as_f64().filter(|_| number.is_f64()) {
                if float.fract() == 0.0 && float.abs() < I64_SAFE_BOUND {
                    *number = Number::from(float as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_as_integers),
        Value::Object(map) => map.values_mut().for_each(integral_floats_as_integers),
        _ => {}
    }
}

/// JSON string escaping without the surrounding quotes, ready to splice into
/// an existing string literal. Absent content escapes to an empty string.
pub fn escape_json_value(value: Option<&str>) -> String {
    let quoted = Value::from(value.unwrap_or_default()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// UTC timestamp with millisecond precision and a `Z` suffix.
pub fn iso_datetime(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap()
    }

    #[test]
    fn escapes_quotes_in_content() {
        let engine = TemplateEngine::default();
        let body = engine.render(&json!({"text": "{{content}}"}), Some(r#"He said "hi""#));
        assert_eq!(body, r#"{"text":"He said \"hi\""}"#);
    }

    #[test]
    fn escapes_backslashes_and_control_characters() {
        assert_eq!(escape_json_value(Some("a\\b\nc\t\u{1}")), r"a\\b\nc\t\u0001");
        assert_eq!(escape_json_value(None), "");
        assert_eq!(escape_json_value(Some("")), "");
    }

    #[test]
    fn only_first_occurrence_of_each_token_is_replaced() {
        let engine = TemplateEngine::default();
        let body = engine.render(&json!({"a": "{{content}}", "b": "{{content}}"}), Some("x"));
        assert_eq!(body, r#"{"a":"x","b":"{{content}}"}"#);
    }

    #[test]
    fn substitutes_iso_datetime() {
        let engine = TemplateEngine::default();
        let body = engine.render_at(&json!({"at": "{{isoDateTime}}"}), None, fixed_instant());
        assert_eq!(body, r#"{"at":"2024-05-01T12:30:05.000Z"}"#);
    }

    #[test]
    fn iso_datetime_parses_back_within_the_test_window() {
        let engine = TemplateEngine::default();
        let before = Utc::now();
        let body = engine.render(&json!({"at": "{{isoDateTime}}"}), None);
        let after = Utc::now();

        let parsed: Value = serde_json::from_str(&body).unwrap();
        let at = DateTime::parse_from_rfc3339(parsed["at"].as_str().unwrap()).unwrap();
        let at = at.with_timezone(&Utc);
        assert!(at >= before - chrono::Duration::milliseconds(1));
        assert!(at <= after);
    }

    #[test]
    fn local_datetime_uses_configured_format() {
        let engine = TemplateEngine::new("%Y");
        let body = engine.render_at(&json!({"at": "{{localDateTime}}"}), None, fixed_instant());
        let expected = fixed_instant().with_timezone(&Local).format("%Y").to_string();
        assert_eq!(body, format!(r#"{{"at":"{expected}"}}"#));
    }

    #[test]
    fn invalid_format_falls_back_to_default() {
        assert!(!TemplateEngine::is_valid_format("%Q"));
        assert!(!TemplateEngine::is_valid_format(""));
        let engine = TemplateEngine::new("%Q");
        assert_eq!(engine.local_datetime_format, DEFAULT_LOCAL_DATETIME_FORMAT);
    }

    #[test]
    fn keeps_object_key_order() {
        let payload: Value = serde_json::from_str(r#"{"z":1,"a":"{{content}}","m":[true,null]}"#).unwrap();
        let body = TemplateEngine::default().render(&payload, Some("c"));
        assert_eq!(body, r#"{"z":1,"a":"c","m":[true,null]}"#);
    }

    #[test]
    fn whole_floats_are_written_as_integers() {
        let payload: Value = serde_json::from_str(r#"{"n":1.0,"m":[-0.0,2.5,3],"big":1e300}"#).unwrap();
        let body = TemplateEngine::default().render(&payload, None);
        assert_eq!(body, r#"{"n":1,"m":[0,2.5,3],"big":1e300}"#);
    }

    proptest! {
        #[test]
        fn payload_without_tokens_is_plain_serialization(
            text in "[^{}]*",
            number in any::<i64>(),
            flag in any::<bool>(),
            content in ".*",
        ) {
            let payload = json!({"text": text, "n": number, "nested": {"flag": flag, "list": [text.clone()]}});
            let body = TemplateEngine::default().render(&payload, Some(&content));
            prop_assert_eq!(body, serde_json::to_string(&payload).unwrap());
        }

        #[test]
        fn escaped_content_round_trips_as_json_string(content in "[^{]*") {
            let body = TemplateEngine::default().render(&json!({"text": "{{content}}"}), Some(&content));
            let parsed: Value = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(parsed["text"].as_str().unwrap(), content.as_str());
        }
    }
}
