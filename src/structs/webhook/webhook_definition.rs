use serde::{Deserialize, Serialize};
use crate::enums::trigger_scope::TriggerScope;
use crate::helpers::serde_helper::null_as_default;
use crate::structs::webhook::http_action_template::HttpActionTemplate;

/// One user-configured webhook and the menu entry it produces.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Pages the menu entry appears on. Empty means every page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_url_patterns: Vec<String>,

    /// Link and image targets the entry applies to. Empty makes this a
    /// selection webhook.
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_url_patterns: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub action: HttpActionTemplate,
}

impl WebhookDefinition {
    pub fn new(name: impl Into<String>, action: HttpActionTemplate) -> Self {
        Self {
            name: name.into(),
            document_url_patterns: Vec::new(),
            target_url_patterns: Vec::new(),
            action,
        }
    }

    #[must_use]
    pub fn with_document_patterns(mut self, patterns: Vec<String>) -> Self {
        self.document_url_patterns = patterns;
        self
    }

    #[must_use]
    pub fn with_target_patterns(mut self, patterns: Vec<String>) -> Self {
        self.target_url_patterns = patterns;
        self
    }

    pub fn trigger_scope(&self) -> TriggerScope {
        if self.target_url_patterns.is_empty() {
            TriggerScope::Selection
        } else {
            TriggerScope::LinkOrImage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::http_method::HttpMethod;

    #[test]
    fn missing_fields_are_normalised() {
        let definition: WebhookDefinition =
            serde_json::from_str(r#"{"name":"Slack","action":{"url":"https://hooks.example.com/x"}}"#).unwrap();
        assert_eq!(definition.action.method, HttpMethod::Post);
        assert!(definition.action.headers.is_empty());
        assert!(definition.action.payload.is_none());
        assert!(definition.document_url_patterns.is_empty());
        assert_eq!(definition.trigger_scope(), TriggerScope::Selection);
    }

    #[test]
    fn null_method_and_missing_action_fall_back() {
        let definition: WebhookDefinition =
            serde_json::from_str(r#"{"name":"a","targetUrlPatterns":["*://*/*.png"],"action":{"method":null,"headers":null}}"#)
                .unwrap();
        assert_eq!(definition.action.method, HttpMethod::Post);
        assert_eq!(definition.trigger_scope(), TriggerScope::LinkOrImage);

        let bare: WebhookDefinition = serde_json::from_str(r#"{"name":"b"}"#).unwrap();
        assert_eq!(bare.action, HttpActionTemplate::default());
    }

    #[test]
    fn serialises_with_camel_case_field_names() {
        let definition = WebhookDefinition::new("n", HttpActionTemplate::new(HttpMethod::Get, "https://e.x"))
            .with_target_patterns(vec!["https://*/*".to_string()]);
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["targetUrlPatterns"][0], "https://*/*");
        assert_eq!(json["documentUrlPatterns"], serde_json::json!([]));
        assert_eq!(json["action"]["method"], "GET");
        assert!(json["action"].get("payload").is_none());
    }
}
