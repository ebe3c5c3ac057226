//! Delete an article from the wardrobe.

use crate::cli::common::{print_json, CliResult, DataArgs};
use clap::Args;
use uuid::Uuid;

/// Delete an article by id
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Article id, as printed by `add` and `list`
    #[arg(long, value_name = "UUID")]
    pub id: Uuid,

    /// Only look under this article type
    #[arg(long = "type", value_name = "TYPE")]
    pub article_type: Option<String>,

    /// Output the removed article as JSON
    #[arg(long)]
    pub json: bool,
}

impl DeleteArgs {
    /// Execute the delete command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let mut session = data.open()?;

        let removed = match &self.article_type {
            Some(article_type) => session
                .catalog
                .remove_article(&article_type.trim().to_lowercase(), self.id)?,
            None => session.catalog.remove_by_id(self.id)?,
        };
        session.save()?;

        if self.json {
            print_json(&removed)?;
        } else {
            println!("Deleted {removed}");
        }
        Ok(())
    }
}
