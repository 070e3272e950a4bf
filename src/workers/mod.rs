pub mod background;
pub mod menu_sync;
pub mod command_runner;
