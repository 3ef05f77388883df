use std::env;

use log::LevelFilter;

/// Initialize logging for the command line tool.
///
/// Logs at `Info` by default and `Debug` when `verbose` is set. A `RUST_LOG`
/// in the environment overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second call (e.g. from tests) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {:?} level", level);
    }
}
