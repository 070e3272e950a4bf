use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::http_method::HttpMethod;
use crate::helpers::serde_helper::null_as_default;
use crate::structs::webhook::header_set::HeaderSet;

/// Blueprint of the request a webhook sends.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct HttpActionTemplate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: HttpMethod,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// JSON template for the body. `None` means the request has no body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    #[serde(default)]
    pub headers: HeaderSet,
}

impl HttpActionTemplate {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            payload: None,
            headers: HeaderSet::new(),
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }
}
