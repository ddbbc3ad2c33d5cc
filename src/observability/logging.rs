use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::common::error::{CodegenError, Result};

/// Initializes logging on stderr, plus a JSON log file when `log_dir` is set.
///
/// Stdout carries the generated source, so no log output may go there.
/// The returned guard flushes the file writer when dropped; hold it until
/// the program exits.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    // Respect RUST_LOG if set; otherwise info for our crate, warn elsewhere
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iana_codegen=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| CodegenError::Logging(e.to_string()))?;

    Ok(guard)
}

/// Non-blocking daily rotated writer inside `dir`, creating it if needed.
fn file_writer(dir: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("iana_codegen.log")
        .build(dir)
        .map_err(|e| CodegenError::Logging(format!("{}: {}", dir.display(), e)))?;

    Ok(tracing_appender::non_blocking(appender))
}
