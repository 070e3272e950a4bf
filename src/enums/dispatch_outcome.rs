use serde::{Deserialize, Serialize};

/// What the caller of a dispatch gets back once the request settled.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Sent { status_code: Option<u16> },
    Failed { message: String },
}

impl DispatchOutcome {
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}
