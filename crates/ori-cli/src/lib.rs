//! ori-cli - line-oriented driver for the ori-core motif finders.
//!
//! A command reads its parameters from numbered input lines (sequences,
//! then integers), runs one core operation, and writes a single result line.
//! The binary in `main.rs` wires this library to stdin, stdout and files.

pub mod command;
pub mod error;
pub mod input;
pub mod output;
pub mod settings;

pub use command::{dispatch, Command};
pub use error::{CliError, CliResult};
pub use input::InputLines;
pub use output::Output;
pub use settings::Settings;
