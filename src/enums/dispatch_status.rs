use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::HookmenuError;

/// Indicator state names as they travel in cross-surface messages.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum StatusKind {
    #[default]
    Default,
    Sending,
    #[serde(rename = "OK")]
    Ok,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "Default",
            Self::Sending => "Sending",
            Self::Ok => "OK",
            Self::Error => "Error",
        };
        f.write_str(name)
    }
}

impl FromStr for StatusKind {
    type Err = HookmenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "sending" => Ok(Self::Sending),
            "ok" => Ok(Self::Ok),
            "error" => Ok(Self::Error),
            _ => Err(HookmenuError::user_input_error(s, "an indicator status", "Use Default, Sending, OK or Error")),
        }
    }
}

/// State of the in-flight or most recent dispatch.
///
/// There is one indicator per process and no per-request identity: two
/// dispatches started close together overwrite each other's state, and the
/// last write wins.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum DispatchStatus {
    #[default]
    Default,
    Sending,
    Ok,
    Error(String),
}

impl DispatchStatus {
    pub const fn kind(&self) -> StatusKind {
        match self {
            Self::Default => StatusKind::Default,
            Self::Sending => StatusKind::Sending,
            Self::Ok => StatusKind::Ok,
            Self::Error(_) => StatusKind::Error,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
