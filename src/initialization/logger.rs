//! Logger initialization.
//!
//! This module provides the function to initialize the logger with custom formatting.

use std::io::Write;

use crate::error_handling::InitializationError;
use colored::*;
use env_logger::Env;
use log::LevelFilter;

/// Initializes the logger.
///
/// Configures `env_logger` with the plain colored format (emoji, cyan target,
/// colored level). Verbosity comes from `RUST_LOG` and defaults to `info`.
/// Chatty dependency modules are capped so that the report stays readable.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug header_audit example.com
/// RUST_LOG=header_audit=debug,sqlx=info header_audit example.com
/// ```
pub fn init_logger() -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    builder.filter_module("sqlx", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);

    builder.format(|buf, record| {
        let level = record.level();
        let colored_level = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };

        let emoji = match level {
            log::Level::Error => "❌",
            log::Level::Warn => "⚠️",
            log::Level::Info => "✔️",
            log::Level::Debug => "🔍",
            log::Level::Trace => "🔬",
        };

        writeln!(
            buf,
            "{} {} [{}] {}",
            emoji,
            record.target().cyan(),
            colored_level,
            record.args()
        )
    });

    // try_init() so a second call (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_returns_error() {
        // Whichever call runs first may win; the second must fail gracefully.
        let _ = init_logger();
        let result = init_logger();
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
