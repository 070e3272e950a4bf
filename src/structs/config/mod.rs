pub mod config;
pub mod storage_config;
pub mod dispatch_config;
pub mod editor_config;
pub mod server_config;
