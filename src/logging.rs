//! File logging
//!
//! The terminal belongs to the viewer, so events go to a daily-rolled file.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::OptdiffError;

/// Environment variable holding a filter directive; wins over the config
pub const LOG_ENV: &str = "OPTDIFF_LOG";

const LOG_FILE_PREFIX: &str = "optdiff.log";

/// Build the event filter: `OPTDIFF_LOG` first, then the configured level.
///
/// An unparsable level falls back to `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// pending events.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, OptdiffError> {
    let dir = config.resolved_dir();
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(false);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(fmt_layer)
        .try_init();

    Ok(guard)
}
