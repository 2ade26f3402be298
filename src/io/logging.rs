//! Diagnostic logging to stderr through `tracing`

use tracing_subscriber::EnvFilter;

/// Log level for the given verbosity flags
///
/// `--quiet` wins over any number of `--verbose` flags.
pub const fn level_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the level derived from the flags. Installing twice is
/// a no-op, which keeps repeated initialisation in tests harmless.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            level_directive(verbosity, quiet)
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
