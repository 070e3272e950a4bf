use serde::{Deserialize, Serialize};
use crate::enums::menu_context::MenuContext;

/// A context-menu registration as handed to the menu subsystem.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url_patterns: Option<Vec<String>>,
}
