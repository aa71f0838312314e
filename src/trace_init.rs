//! JSON trace output for hosts built with the `trace` feature.
//!
//! Without the feature `init_tracing` only reports success; every
//! `tracing` call site in the engine is compiled out by `max_level_off`.

use std::io;
use std::path::{Path, PathBuf};

/// File written inside the trace directory.
pub const TRACE_FILE: &str = "jawi-trace.jsonl";

/// Environment variable holding an `EnvFilter` directive that overrides
/// the default filter.
pub const FILTER_ENV: &str = "JAWI_TRACE";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "jawi_engine=debug,jawi_core=debug";

#[cfg(feature = "trace")]
static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("cannot create trace directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("another global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Install a JSON subscriber appending to `log_dir/jawi-trace.jsonl`,
/// creating the directory if needed. Later calls are no-ops once one has
/// succeeded.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Result<(), TraceError> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    if GUARD.get().is_some() {
        return Ok(());
    }
    std::fs::create_dir_all(log_dir).map_err(|source| TraceError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| TraceError::AlreadyInstalled)?;

    // Held for the life of the process so buffered lines keep flushing.
    let _ = GUARD.set(guard);
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Result<(), TraceError> {
    Ok(())
}
