use std::path::PathBuf;
use std::sync::Arc;
use hookmenu::services::http_transport::HttpTransport;
use hookmenu::services::memory_storage::MemoryStorage;
use hookmenu::structs::config::config::Config;
use hookmenu::traits::transport::Transport;
use hookmenu::workers::background::Background;

pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.dispatch.success_reset_ms = 10;
    config.editor.save_debounce_ms = 20;
    config.editor.save_status_ms = 20;
    config
}

pub fn background_with(transport: Arc<dyn Transport>) -> Background {
    Background::with_ports(
        fast_config(),
        PathBuf::from("/tmp/hookmenu-test/config.toml"),
        Arc::new(MemoryStorage::new()),
        transport,
    )
}

pub fn http_background() -> Background {
    background_with(Arc::new(HttpTransport::new("hookmenu-tests").unwrap()))
}
