use serde::{Deserialize, Serialize};

/// Click on the extension icon.
///
/// Without a `webhook` the click opens the options surface; with one the
/// named webhook is dispatched with `content`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ActionClick {
    #[serde(default)]
    pub webhook: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}
