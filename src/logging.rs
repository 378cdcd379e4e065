//! Logging infrastructure.
//!
//! Structured logging controlled by environment variables:
//!
//! - `DQLKIT_DEBUG=true|1|yes` - enable debug logging
//! - `DQLKIT_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `DQLKIT_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! Internally the crate emits standard `tracing` events at the binding
//! seams; [`init`] installs a subscriber for them when the
//! `tracing-subscriber` feature is enabled. Applications with their own
//! subscriber can skip [`init`] entirely.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `DQLKIT_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("DQLKIT_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `DQLKIT_LOG_LEVEL`.
///
/// Defaults to "debug" if `DQLKIT_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    if let Ok(level) = env::var("DQLKIT_LOG_LEVEL") {
        match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => {
                if is_debug_enabled() {
                    "debug"
                } else {
                    "warn"
                }
            }
        }
    } else if is_debug_enabled() {
        "debug"
    } else {
        "warn"
    }
}

/// Get the configured log format from `DQLKIT_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("DQLKIT_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the logging system.
///
/// Call once at application startup; subsequent calls are no-ops. Does
/// nothing unless `DQLKIT_DEBUG` or `DQLKIT_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DQLKIT_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("dqlkit={level}"))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            match get_log_format() {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
            }

            tracing::info!(level = level, format = get_log_format(), "dqlkit logging initialized");
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            // No subscriber available; events stay silent unless the
            // application installs its own.
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_disabled_by_default() {
        // SAFETY: test runs in isolation
        unsafe {
            env::remove_var("DQLKIT_DEBUG");
        }
        assert!(!is_debug_enabled());
    }

    #[test]
    fn test_log_level_default() {
        // SAFETY: test runs in isolation
        unsafe {
            env::remove_var("DQLKIT_DEBUG");
            env::remove_var("DQLKIT_LOG_LEVEL");
        }
        assert_eq!(get_log_level(), "warn");
    }
}
