use std::env;
use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: warn, info, then debug.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the verbosity flag when set. Calling this twice is a
/// no-op for the second call.
pub fn init(verbose: u8) {
    let filter = env::var("RUST_LOG")
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level_for_verbosity(verbose).into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
