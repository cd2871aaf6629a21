//! Run settings loaded from an optional TOML file.
//!
//! ```toml
//! strand = "both"
//! parallel = true
//!
//! [limits]
//! max_table_size = 16777216
//! max_neighborhood_size = 4194304
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use ori_core::{Limits, Strand};
use serde::Deserialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Ceilings on dense tables and neighborhoods.
    pub limits: Limits,
    /// Strand policy for mismatch-tolerant frequent words.
    pub strand: Strand,
    /// Scan clump windows on the rayon pool.
    pub parallel: bool,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads settings from the file at `path`.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&text).map_err(|e| CliError::Settings(path.to_path_buf(), e))
    }
}
