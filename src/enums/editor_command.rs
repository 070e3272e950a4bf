use serde::{Deserialize, Serialize};

/// One change made on the options page, sent to the bridge as
/// `{"op": "set_url", "index": 0, "url": "..."}`.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorCommand {
    AddWebhook,
    RemoveWebhook { index: usize },
    SetName { index: usize, name: String },
    SetMethod { index: usize, method: String },
    SetUrl { index: usize, url: String },
    SetDocumentPatterns { index: usize, text: String },
    SetTargetPatterns { index: usize, text: String },
    SetPayloadText { index: usize, text: String },
    AddHeader { index: usize },
    RenameHeader { index: usize, from: String, to: String },
    SetHeaderValue { index: usize, name: String, value: String },
    RemoveHeader { index: usize, name: String },
}
