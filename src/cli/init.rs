//! Write starter data files.

use crate::cli::common::{CliError, CliResult, DataArgs};
use crate::models::{Catalog, FixedData, OutfitHistory};
use crate::services::{FixedDataService, WardrobeService};
use clap::Args;
use tracing::info;

/// Create a starter fixed-data file and an empty wardrobe
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let paths = data.resolve()?;

        if !self.force {
            for path in [&paths.fixed_file, &paths.wardrobe_file] {
                if path.exists() {
                    return Err(CliError::validation(format!(
                        "{} already exists. Use --force to overwrite it.",
                        path.display()
                    )));
                }
            }
        }

        let loaded = FixedDataService::parse(FixedData::STARTER_JSON)
            .map_err(|e| CliError::io(format!("Invalid starter data: {e:#}")))?;
        FixedDataService::save(&loaded.data, &paths.fixed_file)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        WardrobeService::save(
            &paths.wardrobe_file,
            &Catalog::new(&loaded.data),
            &OutfitHistory::new(),
        )
        .map_err(|e| CliError::io(format!("{e:#}")))?;

        info!(
            fixed = %paths.fixed_file.display(),
            wardrobe = %paths.wardrobe_file.display(),
            "Initialized data files"
        );
        println!("Created {}", paths.fixed_file.display());
        println!("Created {}", paths.wardrobe_file.display());
        Ok(())
    }
}
