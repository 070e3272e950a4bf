pub mod storage_port;
pub mod menu_port;
pub mod indicator_port;
pub mod transport;
