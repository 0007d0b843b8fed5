use std::env;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Keeps the non-blocking file writers alive for the process lifetime.
/// Dropping the guards flushes and closes the log files.
pub struct LogGuards {
    _rotating: WorkerGuard,
    _basic: WorkerGuard,
}

pub fn init_logging() -> Result<LogGuards> {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let level = level.to_lowercase();

    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level),
    };

    let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| ".".to_string());

    // Rotation in the tracing ecosystem is time based, not size based; daily
    // files with a bounded retained count keep disk usage capped.
    let rotating = rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix("my_logger")
        .filename_suffix("log")
        .max_log_files(5)
        .build(&log_dir)?;
    let (rotating_writer, rotating_guard) = tracing_appender::non_blocking(rotating);

    let basic = rolling::never(&log_dir, "program.log");
    let (basic_writer, basic_guard) = tracing_appender::non_blocking(basic);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(rotating_writer),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(basic_writer),
        )
        .try_init()?;

    Ok(LogGuards {
        _rotating: rotating_guard,
        _basic: basic_guard,
    })
}
