//! Log output for the command-line front end.
//!
//! Logs go to stderr so that command output on stdout stays clean.

use tracing::Level;

/// Most verbose level that will be emitted
pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global `tracing` subscriber
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
