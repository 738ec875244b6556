//! File logging setup.
//!
//! The terminal belongs to the TUI, so log lines go to
//! `<log dir>/folio-tui.log` instead of stderr.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "folio-tui.log";
const DEFAULT_FILTER: &str = "folio_tui=info,warn";

/// Pick the log directory: explicit flag, then `FOLIO_LOG_DIR`, then the
/// platform data dir, then the temp dir.
pub fn log_dir(explicit: Option<&Path>) -> PathBuf {
    choose_log_dir(explicit, std::env::var_os("FOLIO_LOG_DIR"))
}

fn choose_log_dir(explicit: Option<&Path>, from_env: Option<OsString>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = from_env {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .map(|p| p.join("folio-tui"))
        .unwrap_or_else(std::env::temp_dir)
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(dir: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("Starting folio-tui {} - logging to {}", env!("CARGO_PKG_VERSION"), dir.join(LOG_FILE).display());
    Ok(guard)
}
