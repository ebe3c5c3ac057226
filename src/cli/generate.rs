//! Generate a random outfit.

use crate::cli::common::{print_json, CliResult, DataArgs};
use crate::models::Criteria;
use crate::services::OutfitGenerator;
use clap::Args;
use tracing::debug;

/// Generate an outfit and record it in the history
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Criteria as key:value (use:formal weather:cold color:warm)
    #[arg(value_name = "KEY:VALUE")]
    pub criteria: Vec<String>,

    /// RNG seed for a reproducible pick (overrides the configured seed)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output the outfit as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let criteria = Criteria::parse_tokens(&self.criteria)?;

        let mut session = data.open()?;
        criteria.validate(&session.fixed)?;

        let seed = self.seed.or(session.paths.seed);
        debug!(?seed, ?criteria, "Generating outfit");

        let outfit = {
            let mut generator = match seed {
                Some(seed) => OutfitGenerator::seeded(&session.fixed, seed),
                None => OutfitGenerator::from_entropy(&session.fixed),
            };
            generator.generate(&session.catalog, &criteria, &mut session.history)?
        };
        session.save()?;

        if self.json {
            print_json(&outfit)?;
        } else {
            println!("{outfit}");
        }
        Ok(())
    }
}
