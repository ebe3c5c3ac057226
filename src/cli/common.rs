//! Shared types for CLI commands: errors, exit codes and data loading.

use crate::config::Config;
use crate::error::WardrobeError;
use crate::models::{Catalog, FixedData, OutfitHistory, Repair};
use crate::services::{FixedDataService, WardrobeService};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input, unknown article, empty outfit
    ValidationError = 1,
    /// File could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process ends with
    pub kind: ExitCode,
    /// Message printed after `Error:`
    pub message: String,
}

impl CliError {
    /// I/O or data error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Numeric exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<WardrobeError> for CliError {
    fn from(err: WardrobeError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Data file options shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Wardrobe data file (defaults to the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Fixed configuration file (defaults to the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub fixed: Option<PathBuf>,
}

/// Data file locations after applying flags over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Wardrobe data document
    pub wardrobe_file: PathBuf,
    /// Fixed configuration document
    pub fixed_file: PathBuf,
    /// Configured generation seed
    pub seed: Option<u64>,
}

impl DataArgs {
    /// Resolves file locations: command-line flags win over `config.toml`.
    pub fn resolve(&self) -> CliResult<DataPaths> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        Ok(DataPaths {
            wardrobe_file: self
                .data
                .clone()
                .unwrap_or(config.paths.wardrobe_file),
            fixed_file: self.fixed.clone().unwrap_or(config.paths.fixed_file),
            seed: config.generation.seed,
        })
    }

    /// Resolves paths and loads the fixed data, catalog and history.
    pub fn open(&self) -> CliResult<Session> {
        Session::open(self.resolve()?)
    }
}

/// Everything a data command works on, loaded from disk.
#[derive(Debug)]
pub struct Session {
    /// Where the documents live
    pub paths: DataPaths,
    /// Fixed configuration
    pub fixed: FixedData,
    /// Compatibility edges added while loading the fixed data
    pub repairs: Vec<Repair>,
    /// Articles
    pub catalog: Catalog,
    /// Generated outfits, oldest first
    pub history: OutfitHistory,
}

impl Session {
    /// Loads fixed data, then the wardrobe document validated against it.
    pub fn open(paths: DataPaths) -> CliResult<Self> {
        let loaded = FixedDataService::load(&paths.fixed_file)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        let (catalog, history) = WardrobeService::load(&paths.wardrobe_file, &loaded.data)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        Ok(Self {
            paths,
            fixed: loaded.data,
            repairs: loaded.repairs,
            catalog,
            history,
        })
    }

    /// Writes the catalog and history back to the wardrobe file.
    pub fn save(&self) -> CliResult<()> {
        WardrobeService::save(&self.paths.wardrobe_file, &self.catalog, &self.history)
            .map_err(|e| CliError::io(format!("{e:#}")))
    }
}

/// Lowercases `value` and checks it against a closed set of choices.
pub fn require_choice<'a>(
    what: &str,
    value: &str,
    choices: impl IntoIterator<Item = &'a str>,
) -> CliResult<String> {
    let normalized = value.trim().to_lowercase();
    let choices: Vec<&str> = choices.into_iter().collect();

    if choices.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(CliError::validation(format!(
            "Unknown {what} '{value}'. Expected one of: {}",
            choices.join(", ")
        )))
    }
}

/// Prints `value` as a single JSON line on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
