use crate::enums::http_method::HttpMethod;
use crate::structs::webhook::header_set::HeaderSet;

/// Fully assembled request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderSet,
    pub body: Option<String>,
}
