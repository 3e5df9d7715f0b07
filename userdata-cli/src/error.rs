//! CLI error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use userdata_lib::error::{ConfigError, SinkError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid form configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
