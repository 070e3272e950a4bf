pub mod bridge_server;
