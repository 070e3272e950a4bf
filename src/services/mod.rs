pub mod template_engine;
pub mod webhook_store;
pub mod menu_registrar;
pub mod menu_registry;
pub mod dispatch_engine;
pub mod status_reporter;
pub mod console_indicator;
pub mod http_transport;
pub mod memory_storage;
pub mod json_file_storage;
pub mod editor_session;
pub mod webhook_validator;
