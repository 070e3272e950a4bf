pub mod commands;
pub mod http_method;
pub mod menu_context;
pub mod trigger_scope;
pub mod storage_area;
pub mod dispatch_status;
pub mod dispatch_outcome;
pub mod extension_message;
pub mod editor_command;
pub mod transport_error;
