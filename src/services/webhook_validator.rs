use std::collections::HashSet;
use crate::config::constants::MATCH_PATTERNS_URL;
use crate::enums::http_method::HttpMethod;
use crate::structs::validation_result::ValidationResult;
use crate::structs::webhook::webhook_definition::WebhookDefinition;

const ALL_URLS_PATTERN: &str = "<all_urls>";

/// Checks a webhook list before it is used to build menus.
///
/// URLs are only checked for presence; anything else is left to the
/// transport.
pub struct WebhookValidator;

impl WebhookValidator {
    pub fn validate(definitions: &[WebhookDefinition]) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for (index, definition) in definitions.iter().enumerate() {
            let label = if definition.name.is_empty() {
                format!("Webhook {}", index + 1)
            } else {
                format!("Webhook '{}'", definition.name)
            };

            if definition.name.trim().is_empty() {
                errors.push(format!("{label} has no name"));
            } else if !seen.insert(definition.name.as_str()) {
                warnings.push(format!("{label} is defined more than once; the last definition is used"));
            }

            if definition.action.url.trim().is_empty() {
                errors.push(format!("{label} has no endpoint URL"));
            }

            if definition.action.method == HttpMethod::Get && definition.action.payload.is_some() {
                warnings.push(format!("{label} has a payload but uses GET; dispatching it will fail"));
            }

            for pattern in definition.document_url_patterns.iter().chain(&definition.target_url_patterns) {
                if !looks_like_match_pattern(pattern) {
                    warnings.push(format!("{label}: '{pattern}' does not look like a match pattern (see {MATCH_PATTERNS_URL})"));
                }
            }
        }

        ValidationResult::from_findings(errors, warnings)
    }
}

fn looks_like_match_pattern(pattern: &str) -> bool {
    if pattern == ALL_URLS_PATTERN {
        return true;
    }
    match pattern.split_once("://") {
        Some((scheme, rest)) => !scheme.is_empty() && rest.contains('/'),
        None => false,
    }
}
