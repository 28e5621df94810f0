//! Tracing configuration for relink
//!
//! ## Architecture / 架构
//!
//! - **stderr**: human-readable log lines, so stdout stays free for command output
//! - **file** (optional): same format without colors, written through a
//!   non-blocking appender when `logging.directory` is configured
//! - **Environment filter**: `RUST_LOG` wins over `logging.level`

use std::{fs, io, path::Path, sync::OnceLock};

use rl_core::config::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "relink.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - The configured level (or `info` when empty) applies to every target
/// - HTTP stack internals are capped at `warn`, their debug output is
///   per-connection noise
pub fn build_filter_directives(level: &str) -> Vec<String> {
    let level = match level.trim() {
        "" => DEFAULT_LEVEL,
        level => level,
    };

    vec![
        level.to_string(),
        "reqwest=warn".to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// ## English
///
/// This function:
/// 1. Creates an env-filter for level control
/// 2. Sets up the stderr fmt layer, plus the file layer when configured
/// 3. Registers the global subscriber
///
/// A file appender that cannot be created is reported on stderr and
/// logging continues on stderr only.
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
pub fn init_tracing_subscriber(logging: &LoggingConfig) -> anyhow::Result<()> {
    // Step 1: Build environment filter
    let filter_directives = build_filter_directives(&logging.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Step 2: Create writers
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if logging.directory.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&logging.directory) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    };

    // Step 3: Create fmt layers
    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    // Step 4: Register the global subscriber
    let subscriber = registry().with(env_filter).with(stderr_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::never(directory, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
