use serde::{Deserialize, Serialize};
use crate::structs::config::dispatch_config::DispatchConfig;
use crate::structs::config::editor_config::EditorConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::storage_config::StorageConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub dispatch: DispatchConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub server: ServerConfig,
}
