use thiserror::Error;

/// Failures raised before any response status could be observed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::InvalidRequest(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}
