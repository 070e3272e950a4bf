use std::path::PathBuf;
use std::time::Duration;

pub const APP_DIR_NAME: &str = "hookmenu";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Storage key holding the JSON-encoded webhook array.
pub const WEBHOOKS_KEY: &str = "webhooks";
pub const DEFAULT_WEBHOOKS_VALUE: &str = "[]";

pub const DEFAULT_SUCCESS_RESET_MS: u64 = 750;
pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_SAVE_STATUS_MS: u64 = 750;
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8765;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const DEFAULT_LOCAL_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const CONTENT_TOKEN: &str = "{{content}}";
pub const ISO_DATETIME_TOKEN: &str = "{{isoDateTime}}";
pub const LOCAL_DATETIME_TOKEN: &str = "{{localDateTime}}";

pub const BADGE_SENDING_TEXT: &str = "…";
pub const BADGE_SENDING_COLOR: &str = "#ffbb33";
pub const BADGE_SENDING_TITLE: &str = "Sending...";
pub const BADGE_OK_TEXT: &str = "✓";
pub const BADGE_OK_COLOR: &str = "#00C851";
pub const BADGE_OK_TITLE: &str = "Sent.";
pub const BADGE_ERROR_TEXT: &str = "!";
pub const BADGE_ERROR_COLOR: &str = "#ff4444";
pub const BADGE_ERROR_TITLE: &str = "Error";

pub const SAVE_SUCCEEDED_STATUS: &str = "Options saved.";
pub const NEW_HEADER_PREFIX: &str = "new-header-";
pub const NEW_WEBHOOK_LABEL: &str = "(New Webhook)";
pub const MATCH_PATTERNS_URL: &str = "https://developer.mozilla.org/en-US/docs/Mozilla/Add-ons/WebExtensions/Match_patterns";

pub const STORAGE_EVENT_CAPACITY: usize = 64;

pub fn app_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(APP_DIR_NAME)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
