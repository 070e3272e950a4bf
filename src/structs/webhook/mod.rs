pub mod header_set;
pub mod http_action_template;
pub mod webhook_definition;
