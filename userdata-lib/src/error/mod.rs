//! Error types

mod config;
mod edit;

pub use config::*;
pub use edit::*;
