use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::menu_context::MenuContext;

/// Whether a webhook fires on selected text or on a link/image target.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq)]
pub enum TriggerScope {
    Selection,
    LinkOrImage,
}

impl TriggerScope {
    pub fn contexts(self) -> Vec<MenuContext> {
        match self {
            Self::Selection => vec![MenuContext::Selection],
            Self::LinkOrImage => vec![MenuContext::Link, MenuContext::Image],
        }
    }
}

impl fmt::Display for TriggerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection => write!(f, "selected text"),
            Self::LinkOrImage => write!(f, "links and images"),
        }
    }
}
