use async_trait::async_trait;
use crate::enums::transport_error::TransportError;
use crate::structs::transport::http_request::HttpRequest;
use crate::structs::transport::transport_response::TransportResponse;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, TransportError>;
}
