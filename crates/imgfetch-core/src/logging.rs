//! Logging init: structured events to stderr.
//!
//! The tool writes nothing but the fetched image to disk, so there is no log
//! file. `RUST_LOG` overrides the verbosity chosen on the command line.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,imgfetch_core=debug,imgfetch=debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr. Safe to call once per process; later calls
/// are ignored.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(1).contains("imgfetch_core=debug"));
        assert_eq!(default_filter(5), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(0);
        init_logging(2);
    }
}
