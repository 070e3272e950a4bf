use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "ConfigHelper::default_storage_path")]
    pub path: PathBuf,

    /// Watch the storage file for edits made by other processes.
    #[serde(default = "ConfigHelper::default_watch")]
    pub watch: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: ConfigHelper::default_storage_path(),
            watch: ConfigHelper::default_watch(),
        }
    }
}
