use serde::{Deserialize, Serialize};

/// Badge text, badge colour and tooltip currently shown on the icon.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct IndicatorState {
    pub badge_text: String,
    pub badge_color: Option<String>,
    pub title: String,
}
