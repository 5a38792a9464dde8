//! Process-wide `tracing` setup
//!
//! Log lines go to a rolling file through a non-blocking writer. Text mode
//! also echoes to stdout; JSON mode writes structured lines to the file only.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Map the configured rotation name; anything unknown never rotates
pub fn rotation(name: &str) -> Rotation {
    match name {
        "minutely" => Rotation::MINUTELY,
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Default filter directives when `RUST_LOG` is unset. sqlx logs every
/// statement at info, so it is held at warn.
pub fn default_directives(log_level: &str) -> String {
    format!("{},sqlx=warn", log_level)
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole process, or buffered file output is lost on exit.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(rotation(&config.rotation))
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)
        .with_context(|| format!("Failed to open log directory {}", config.log_dir))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let json_file = config.use_json.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(writer.clone())
            .with_ansi(false)
    });
    let text_file = (!config.use_json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(writer.clone())
            .with_ansi(false)
    });
    let stdout = (!config.use_json).then(|| fmt::layer().with_target(false).with_ansi(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_file)
        .with(text_file)
        .with(stdout)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    Ok(guard)
}
