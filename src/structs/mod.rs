pub mod cli;
pub mod config;
pub mod webhook;
pub mod menu;
pub mod storage;
pub mod transport;
pub mod indicator;
pub mod validation_result;
