use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use crate::errors::HookmenuError;

#[derive(Debug, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    #[default]
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = HookmenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(HookmenuError::user_input_error(s, "an HTTP method", "Use GET or POST")),
        }
    }
}

/// Stored methods are matched case-insensitively. An empty or unknown method
/// falls back to POST instead of failing the whole webhook list.
impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Self::Post);
        }
        Ok(raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("⚠️ Unsupported HTTP method '{raw}', using POST");
            Self::Post
        }))
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_methods_are_read_leniently() {
        let parse = |raw: &str| serde_json::from_str::<HttpMethod>(raw).unwrap();
        assert_eq!(parse(r#""get""#), HttpMethod::Get);
        assert_eq!(parse(r#""Post""#), HttpMethod::Post);
        assert_eq!(parse(r#""""#), HttpMethod::Post);
        assert_eq!(parse("null"), HttpMethod::Post);
        assert_eq!(parse(r#""PATCH""#), HttpMethod::Post);
        assert_eq!(serde_json::to_string(&HttpMethod::Get).unwrap(), r#""GET""#);
    }
}
