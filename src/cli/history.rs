//! Outfit history commands: `history` and `last`.

use crate::cli::common::{print_json, CliResult, DataArgs};
use clap::Args;

/// List generated outfits, oldest first
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// Forget every recorded outfit
    #[arg(long)]
    pub clear: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show the most recently generated outfit
#[derive(Debug, Clone, Args)]
pub struct LastArgs {
    /// Output as JSON (null when there is none)
    #[arg(long)]
    pub json: bool,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let mut session = data.open()?;

        if self.clear {
            let cleared = session.history.len();
            session.history.clear();
            session.save()?;
            if self.json {
                print_json(&serde_json::json!({ "cleared": cleared }))?;
            } else {
                println!("Cleared {cleared} outfit(s) from history.");
            }
            return Ok(());
        }

        if self.json {
            print_json(session.history.list())?;
        } else if session.history.is_empty() {
            println!("No outfits generated yet.");
        } else {
            for (index, outfit) in session.history.list().iter().enumerate() {
                println!("#{} {outfit}", index + 1);
                println!();
            }
        }
        Ok(())
    }
}

impl LastArgs {
    /// Execute the last command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let session = data.open()?;
        let last = session.history.last();

        if self.json {
            print_json(&last)?;
        } else {
            match last {
                Some(outfit) => println!("{outfit}"),
                None => println!("No outfits generated yet."),
            }
        }
        Ok(())
    }
}
