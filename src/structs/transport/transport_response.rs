/// What the dispatcher can observe about a response.
///
/// The body and headers are never read. `status` is `None` when the
/// transport returns an opaque response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: Option<u16>,
}

impl TransportResponse {
    pub const fn with_status(status: u16) -> Self {
        Self { status: Some(status) }
    }

    pub const fn opaque() -> Self {
        Self { status: None }
    }

    pub fn is_error(&self) -> bool {
        self.status.is_some_and(|code| code >= 400)
    }
}
