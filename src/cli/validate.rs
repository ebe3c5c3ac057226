//! Validation command for the data files.

use crate::cli::common::{print_json, CliResult, DataArgs};
use crate::models::Repair;
use clap::Args;
use serde::Serialize;

/// Check the fixed data and wardrobe files for problems
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    valid: bool,
    repairs: &'a [Repair],
    warnings: Vec<String>,
    articles: usize,
    outfits: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// Unreadable or inconsistent files fail the command; repairs and
    /// warnings are reported but do not.
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let session = data.open()?;
        let warnings = session.fixed.warnings();

        let response = ValidationResponse {
            valid: warnings.is_empty(),
            repairs: &session.repairs,
            warnings,
            articles: session.catalog.len(),
            outfits: session.history.len(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Fixed data:    {}", session.paths.fixed_file.display());
        println!("Wardrobe data: {}", session.paths.wardrobe_file.display());
        println!();

        if response.repairs.is_empty() {
            println!("Compatibility: symmetric");
        } else {
            println!(
                "Compatibility: repaired {} missing reverse entr{} (written back)",
                response.repairs.len(),
                if response.repairs.len() == 1 { "y" } else { "ies" }
            );
            for repair in response.repairs {
                println!("  added '{}' to '{}'", repair.color, repair.missing_from);
            }
        }

        if response.warnings.is_empty() {
            println!("Warnings:      none");
        } else {
            println!("Warnings:");
            for warning in &response.warnings {
                println!("  - {warning}");
            }
        }

        println!();
        println!(
            "{} article(s), {} outfit(s) in history.",
            response.articles, response.outfits
        );
        Ok(())
    }
}
