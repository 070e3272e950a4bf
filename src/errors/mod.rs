use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HookmenuError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Storage errors
    StorageError {
        key: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Network/transport errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Context menu errors
    MenuError {
        menu_item_id: String,
        reason: String,
    },

    // Webhook lookup errors
    WebhookNotFound {
        name: String,
        available: Vec<String>,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // User input errors
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },
}

impl HookmenuError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn storage_error(key: &str, operation: &str, reason: &str) -> Self {
        Self::StorageError {
            key: key.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(ToString::to_string),
        }
    }

    pub fn menu_error(menu_item_id: &str, reason: &str) -> Self {
        Self::MenuError {
            menu_item_id: menu_item_id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. }
            | Self::UserInputError { .. }
            | Self::ValidationError { .. }
            | Self::ConfigurationError { .. }
            | Self::ParseError { .. }
            | Self::MenuError { .. } => true,
            Self::WebhookNotFound { .. }
            | Self::SystemError { .. }
            | Self::StorageError { .. }
            | Self::ConfigurationFileError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::StorageError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. }
            | Self::NetworkError { .. }
            | Self::WebhookNotFound { .. }
            | Self::MenuError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. }
            | Self::ConfigurationError { .. }
            | Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and syntax")
            }
            Self::StorageError { key, operation, reason } => {
                format!("Storage error during {operation} of '{key}': {reason}\n💡 Check the storage file path and permissions")
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {ctx}"));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg
            }
            Self::MenuError { menu_item_id, reason } => {
                format!("Context menu entry '{menu_item_id}' could not be registered: {reason}")
            }
            Self::WebhookNotFound { name, available } => {
                let mut msg = format!("Webhook '{name}' not found");
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available webhooks: {}", available.join(", ")));
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{input}': expected {expected}\n💡 {suggestion}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for HookmenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for HookmenuError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for hookmenu operations
pub type HookmenuResult<T> = Result<T, HookmenuError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log the technical details and print the user-facing message.
    pub fn handle_error(error: &HookmenuError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - fix the input and run the command again");
        }
    }
}

impl From<std::io::Error> for HookmenuError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for HookmenuError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for HookmenuError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<toml::ser::Error> for HookmenuError {
    fn from(error: toml::ser::Error) -> Self {
        Self::system_error("TOML serialization", &error.to_string())
    }
}

impl From<reqwest::Error> for HookmenuError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<notify::Error> for HookmenuError {
    fn from(error: notify::Error) -> Self {
        Self::system_error("storage file watch", &error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err: HookmenuError = serde_json::from_str::<Vec<String>>("[1,").unwrap_err().into();
        assert!(matches!(err, HookmenuError::ParseError { ref content_type, .. } if content_type == "JSON"));
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn webhook_not_found_lists_available_names() {
        let err = HookmenuError::WebhookNotFound {
            name: "slack".to_string(),
            available: vec!["discord".to_string(), "bitrise".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'slack' not found"));
        assert!(msg.contains("discord, bitrise"));
    }
}
