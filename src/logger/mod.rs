use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global logger. `RUST_LOG` wins over the defaults; without it
/// the level is `info`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder
        .format_timestamp_millis()
        .format_target(verbose)
        // warp and hyper are chatty at debug
        .filter_module("hyper", LevelFilter::Info)
        .filter_module("warp", LevelFilter::Info);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
