use std::fmt;
use serde::{Deserialize, Serialize};

/// Page element a context-menu entry is shown for.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MenuContext {
    Selection,
    Link,
    Image,
}

impl fmt::Display for MenuContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection => write!(f, "selection"),
            Self::Link => write!(f, "link"),
            Self::Image => write!(f, "image"),
        }
    }
}
