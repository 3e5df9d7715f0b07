//! File logging setup.

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::paths;

/// Initialize file logging.
///
/// With no explicit path the log goes to `latest.log` in the cache
/// directory, rotating the previous one. Returns the path written to, or
/// `None` when no location could be determined.
pub fn init(path: Option<PathBuf>, level: LevelFilter) -> Result<Option<PathBuf>, CliError> {
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let path = match path {
        Some(path) => path,
        None => {
            let Some(dir) = paths::cache_dir() else {
                return Ok(None);
            };
            fs::create_dir_all(&dir)?;
            paths::rotate_logs(&dir);
            dir.join("latest.log")
        }
    };

    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::debug!("Logging to {}", path.display());
    Ok(Some(path))
}
