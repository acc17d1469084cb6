use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::encoding::{LineEnding, TextEncoding};

/// Configuration for one round-trip run.
///
/// Defaults reproduce the classic demo: two files in the working directory,
/// UTF-8, the platform's line terminator, magic number 42. Nothing here is
/// compiled in; callers pass the whole configuration into the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTripConfig {
    /// File written fragment-by-fragment, then read back with the report step
    pub first_file: PathBuf,
    /// File taken through the create/print/delete/recreate/append lifecycle
    pub second_file: PathBuf,
    /// Encoding declared on every write and read
    pub encoding: TextEncoding,
    /// Line terminator written between logical lines
    pub newline: LineEnding,
    /// Value written (stringified) as the final fragment of the first file
    pub magic_number: i64,
}

impl Default for RoundTripConfig {
    fn default() -> Self {
        Self {
            first_file: PathBuf::from("helloworld.txt"),
            second_file: PathBuf::from("helloworld2.txt"),
            encoding: TextEncoding::Utf8,
            newline: LineEnding::native(),
            magic_number: 42,
        }
    }
}

impl RoundTripConfig {
    /// Load a configuration from a JSON file; absent fields keep defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .context(format!("Failed to parse config file {}", path.display()))
    }
}
