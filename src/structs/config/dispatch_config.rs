use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// How long the success badge stays before the indicator is cleared.
    #[serde(default = "ConfigHelper::default_success_reset_ms")]
    pub success_reset_ms: u64,

    /// chrono format string used for `{{localDateTime}}`.
    #[serde(default = "ConfigHelper::default_local_datetime_format")]
    pub local_datetime_format: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            success_reset_ms: ConfigHelper::default_success_reset_ms(),
            local_datetime_format: ConfigHelper::default_local_datetime_format(),
            user_agent: ConfigHelper::default_user_agent(),
        }
    }
}
