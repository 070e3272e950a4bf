use serde::{Deserialize, Serialize};

/// Payload the menu subsystem delivers when an entry is clicked.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuClick {
    pub menu_item_id: String,

    #[serde(default)]
    pub selection_text: Option<String>,

    #[serde(default)]
    pub link_url: Option<String>,

    #[serde(default)]
    pub src_url: Option<String>,
}

impl MenuClick {
    pub fn new(menu_item_id: impl Into<String>) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            ..Self::default()
        }
    }

    /// Picks the text sent as `{{content}}`.
    ///
    /// Selection wins over the link URL, which wins over the image source.
    /// Exactly one of them is used; empty strings count as absent.
    pub fn resolve_content(&self) -> String {
        [&self.selection_text, &self.link_url, &self.src_url]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}
