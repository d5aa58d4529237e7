//! Logging initialization.
//!
//! Uses the `tracing` ecosystem for structured logging. The effective level
//! comes from, in order of precedence: the `RUST_LOG` environment variable,
//! the `--verbose` flag, then the `logging.level` config value.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vista_core::config::LoggingConfig;

/// Map the configured level string onto a filter directive.
///
/// Unknown values fall back to `info` rather than failing startup.
fn level_directive(level: &str) -> &str {
    match level {
        "error" | "warn" | "info" | "debug" | "trace" => level,
        _ => "info",
    }
}

/// Initialize the logging subsystem from the `[logging]` config section,
/// with the CLI flags taking precedence over the file.
///
/// Log output goes to stderr; stdout is reserved for search results.
pub fn init(config: &LoggingConfig, verbose: bool, json_logs: bool) {
    let directive = if verbose {
        "debug"
    } else {
        level_directive(&config.level)
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let json_format = json_logs || config.format == "json";
    if json_format {
        // JSON format for machine parsing
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty format for humans
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }

    if !verbose && level_directive(&config.level) != config.level {
        tracing::warn!(
            level = %config.level,
            "unknown logging.level in config, using info"
        );
    }
}
