//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default wardrobe data file
    #[arg(long, value_name = "FILE")]
    wardrobe_file: Option<PathBuf>,

    /// Default fixed configuration file
    #[arg(long, value_name = "FILE")]
    fixed_file: Option<PathBuf>,

    /// Fixed RNG seed for generate
    #[arg(long, value_name = "N", conflicts_with = "clear_seed")]
    seed: Option<u64>,

    /// Remove the fixed seed
    #[arg(long)]
    clear_seed: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    generation: GenerationOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    wardrobe_file: String,
    fixed_file: String,
}

#[derive(Serialize, Debug)]
struct GenerationOutput {
    seed: Option<u64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

fn config_file_display() -> String {
    Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(unknown)".to_string())
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&ConfigOutput {
                config_file: config_file_display(),
                paths: PathsOutput {
                    wardrobe_file: config.paths.wardrobe_file.display().to_string(),
                    fixed_file: config.paths.fixed_file.display().to_string(),
                },
                generation: GenerationOutput {
                    seed: config.generation.seed,
                },
            })
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.wardrobe_file.is_none()
            && self.fixed_file.is_none()
            && self.seed.is_none()
            && !self.clear_seed
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --wardrobe-file, --fixed-file, --seed, or --clear-seed",
            ));
        }

        let mut config = load_config()?;

        if let Some(path) = &self.wardrobe_file {
            config.paths.wardrobe_file.clone_from(path);
        }
        if let Some(path) = &self.fixed_file {
            config.paths.fixed_file.clone_from(path);
        }
        if self.seed.is_some() {
            config.generation.seed = self.seed;
        }
        if self.clear_seed {
            config.generation.seed = None;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Wardrobe Configuration");
    println!("======================");
    println!();
    println!("Config file: {}", config_file_display());
    println!();

    println!("Paths:");
    println!("  Wardrobe File: {}", config.paths.wardrobe_file.display());
    println!("  Fixed File:    {}", config.paths.fixed_file.display());
    println!();

    println!("Generation:");
    match config.generation.seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: (random)"),
    }
}
