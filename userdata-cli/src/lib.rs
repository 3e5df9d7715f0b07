//! Terminal front end for the user data form.

pub mod commands;
pub mod error;
pub mod logging;
pub mod paths;
pub mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use simplelog::LevelFilter;
use userdata_lib::FormConfig;
use userdata_lib::model::{PHONE_DIGITS, PHONE_PREFIX};

pub use error::CliError;

/// Collects and validates user profile and login details.
#[derive(Parser, Debug)]
#[command(name = "userdata", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub form: FormArgs,

    /// Log file (defaults to latest.log in the cache directory).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a snapshot and print the error mapping as JSON.
    Validate(InputArgs),
    /// Submit a snapshot: print it if accepted, its errors otherwise.
    Submit(InputArgs),
    /// Fill in the form interactively.
    Fill,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Snapshot JSON file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Country code every phone number starts with.
    #[arg(long, global = true, default_value = PHONE_PREFIX)]
    pub phone_prefix: String,

    /// Digits required after the country code.
    #[arg(long, global = true, default_value_t = PHONE_DIGITS)]
    pub phone_digits: usize,
}

impl FormArgs {
    pub fn config(&self) -> Result<FormConfig, CliError> {
        let config = FormConfig::new()
            .phone_prefix(self.phone_prefix.clone())
            .phone_digits(self.phone_digits)
            .validated()?;
        Ok(config)
    }
}

/// Whether the command ended with an accepted or valid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}
