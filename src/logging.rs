//! Tracing subscriber setup. Diagnostics go to stderr so they never mix with
//! the menu on stdout.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for a given `-v` count. `RUST_LOG` takes precedence.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
