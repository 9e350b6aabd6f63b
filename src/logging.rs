//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count
/// (warn, info, debug, trace).
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("termwordle={default_level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
