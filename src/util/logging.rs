//! Structured logging setup
//!
//! Initializes a `tracing` subscriber writing to stderr, so that stdout stays
//! reserved for command output. Supports pretty console output and JSON lines,
//! honors `RUST_LOG`, and can only be initialized once per process.
//!
//! # Example
//!
//! ```no_run
//! use checkout_pilot::util::logging::{init_logging, LoggingConfig};
//!
//! init_logging(LoggingConfig::default());
//!
//! use tracing::{debug, info};
//! info!("Application started");
//! debug!(backend = "express", "Rendering templates");
//! ```

use crate::config::CheckoutConfig;
use std::io;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., checkout_pilot::detection) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Derives logging settings from the loaded application configuration
    pub fn from_checkout_config(config: &CheckoutConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, defaulting to INFO
///
/// ```
/// use checkout_pilot::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn build_filter(level: Level) -> EnvFilter {
    let directive = format!("checkout_pilot={}", level);
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Initializes the logging system; subsequent calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LOG_JSON_VAR, LOG_LEVEL_VAR};

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
        assert_eq!(parse_level("ERROR"), Level::ERROR);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_from_checkout_config() {
        let config = CheckoutConfig::from_lookup(|name| match name {
            LOG_LEVEL_VAR => Some("debug".to_string()),
            LOG_JSON_VAR => Some("true".to_string()),
            _ => None,
        });
        let logging = LoggingConfig::from_checkout_config(&config);
        assert_eq!(logging.level, Level::DEBUG);
        assert!(logging.use_json);
        assert!(logging.include_target);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(!config.include_location);
    }
}
