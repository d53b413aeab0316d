//! Diagnostic output.
//!
//! The terminal UI owns the screen, so diagnostics go to
//! `~/.wsdebug/wsdebug.log`. The web console has no screen to protect and
//! logs to stderr instead. Verbosity follows `RUST_LOG` and defaults to
//! [`DEFAULT_FILTER`].

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::config_dir;
use crate::error::{ConsoleError, ConsoleResult};

pub const LOG_FILE: &str = "wsdebug.log";

pub const DEFAULT_FILTER: &str = "wsdebug=info";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.wsdebug/wsdebug.log`, falling back to the temp directory.
pub fn default_log_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE)
}

fn open_log_file(path: &Path) -> ConsoleResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Route diagnostics to a file. Returns the path written to.
pub fn init_file_logging(path: Option<&Path>) -> ConsoleResult<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ConsoleError::Config(format!("logging already initialized: {}", e)))?;

    tracing::info!("wsdebug {} starting", crate::cli::VERSION);
    Ok(path)
}

/// Route diagnostics to stderr.
pub fn init_stderr_logging() -> ConsoleResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConsoleError::Config(format!("logging already initialized: {}", e)))
}
