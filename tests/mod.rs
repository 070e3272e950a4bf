mod common;
mod dispatch_flow;
mod bridge_routes;
mod file_storage;
