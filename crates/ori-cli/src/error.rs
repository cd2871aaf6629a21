//! Errors raised while reading input, loading settings or dispatching.

use std::path::PathBuf;

use ori_core::MotifError;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input has fewer lines than the command needs.
    #[error("missing input line {line} ({what})")]
    MissingLine { line: usize, what: &'static str },

    /// An integer parameter was not supplied.
    #[error("missing integer parameter '{name}'")]
    MissingParameter { name: &'static str },

    /// A parameter token is not a valid integer.
    #[error("invalid integer '{value}' for parameter '{name}'")]
    InvalidInteger { name: &'static str, value: String },

    /// The core rejected the input.
    #[error(transparent)]
    Motif(#[from] MotifError),

    /// Reading or writing a file failed.
    #[error("IO error on {}: {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// The settings file is not valid TOML for [`crate::settings::Settings`].
    #[error("invalid settings in {}: {1}", .0.display())]
    Settings(PathBuf, #[source] toml::de::Error),
}
