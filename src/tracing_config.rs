use std::{env, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    PvmError, Result,
    config::{ConfigPaths, GeneralConfig, LogFormat},
};

/// Environment variable overriding `general.log_format`.
pub const LOG_FORMAT_ENV: &str = "PVM_LOG_FORMAT";

/// Initialize tracing for the application
///
/// Logs go to standard error so standard output only carries reports.
/// Uses `RUST_LOG` if set, otherwise `general.log_level`. The format comes
/// from `PVM_LOG_FORMAT`, falling back to `general.log_format`.
///
/// With `general.log_to_file` set, logs are also written to a daily rotated
/// file; keep the returned guard alive until exit so buffered lines are
/// flushed.
///
/// # Errors
/// Returns error if the log directory cannot be created or a subscriber is
/// already installed
pub fn init(general: &GeneralConfig) -> Result<Option<WorkerGuard>> {
    const DAYS_TO_KEEP: usize = 7;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));
    let format = resolve_format(env::var(LOG_FORMAT_ENV).ok().as_deref(), general.log_format);

    let (file_writer, guard) = if general.log_to_file {
        let log_dir = ConfigPaths::log_dir()?;
        let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .max_log_files(DAYS_TO_KEEP)
            .filename_prefix("pvm")
            .filename_suffix("log")
            .build(&log_dir)
            .map_err(|e| PvmError::Logging(e.to_string()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        (Some(non_blocking), Some(guard))
    } else {
        (None, None)
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(writer)
                    .with_ansi(false)
            }))
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(writer)
                    .with_ansi(false)
            }))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(file_writer.map(|writer| {
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(writer)
                    .with_ansi(false)
            }))
            .try_init(),
    };

    result.map_err(|e| PvmError::Logging(e.to_string()))?;

    Ok(guard)
}

/// Picks the log format: a valid environment value wins over the config.
fn resolve_format(env_value: Option<&str>, configured: LogFormat) -> LogFormat {
    env_value
        .and_then(|value| value.parse().ok())
        .unwrap_or(configured)
}
