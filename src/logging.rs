use color_eyre::eyre;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const LOG_FILE_NAME: &str = "jds.log";

/// Routes tracing output to a log file, since the terminal belongs to the UI.
///
/// The returned guard flushes pending lines when dropped.
pub fn init(config: &Config) -> eyre::Result<WorkerGuard> {
    let dir = config.log_dir()?;
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre::eyre!("Failed to install tracing subscriber: {err}"))?;

    Ok(guard)
}
