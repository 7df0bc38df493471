//! Logging setup
//!
//! Logs go to stderr so `eval` output on stdout stays machine readable.
//! `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::CalcConfig;

/// Builds the filter for a configuration, honoring `RUST_LOG` when set
#[must_use]
pub fn env_filter(config: &CalcConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(config.verbosity.level_filter().into())
        .from_env_lossy()
}

/// Installs the global subscriber
///
/// Returns false if a subscriber was already installed, which only happens
/// when the CLI is embedded (e.g. in tests).
pub fn init(config: &CalcConfig) -> bool {
    fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .try_init()
        .is_ok()
}
