pub mod http_request;
pub mod transport_response;
