use std::path::PathBuf;
use crate::config::constants::{
    app_dir, DEFAULT_LOCAL_DATETIME_FORMAT, DEFAULT_SAVE_DEBOUNCE_MS, DEFAULT_SAVE_STATUS_MS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SUCCESS_RESET_MS, STORAGE_FILE_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_storage_path() -> PathBuf {
        app_dir().join(STORAGE_FILE_NAME)
    }

    pub const fn default_watch() -> bool {
        true
    }

    pub const fn default_success_reset_ms() -> u64 {
        DEFAULT_SUCCESS_RESET_MS
    }

    pub fn default_local_datetime_format() -> String {
        DEFAULT_LOCAL_DATETIME_FORMAT.to_string()
    }

    pub fn default_user_agent() -> String {
        format!("hookmenu/{}", env!("CARGO_PKG_VERSION"))
    }

    pub const fn default_save_debounce_ms() -> u64 {
        DEFAULT_SAVE_DEBOUNCE_MS
    }

    pub const fn default_save_status_ms() -> u64 {
        DEFAULT_SAVE_STATUS_MS
    }

    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }
}
