//! Telemetry setup
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file only.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;
use crate::error::AppError;

/// Install the global subscriber. Keep the returned guard alive for the
/// process lifetime or buffered lines are lost on exit.
pub fn init_telemetry(settings: &LogSettings) -> Result<WorkerGuard, AppError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("recipehub")
        .filename_suffix("log")
        .build(&settings.dir)
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    let result = match settings.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false),
            )
            .try_init(),
    };
    result.map_err(|e| AppError::TelemetryError(e.to_string()))?;

    tracing::info!(dir = %settings.dir, format = %settings.format, "Telemetry initialized");
    Ok(guard)
}
