use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "ConfigHelper::default_save_debounce_ms")]
    pub save_debounce_ms: u64,

    #[serde(default = "ConfigHelper::default_save_status_ms")]
    pub save_status_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_debounce_ms: ConfigHelper::default_save_debounce_ms(),
            save_status_ms: ConfigHelper::default_save_status_ms(),
        }
    }
}
