//! Import articles from a line-oriented text file.

use crate::cli::common::{print_json, CliError, CliResult, DataArgs};
use crate::services::import::{self, ImportIssue};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// Import articles, one `type | subtype | description | colors | weather | price` per line
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// File to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ImportResponse<'a> {
    imported: usize,
    ids: Vec<Uuid>,
    issues: &'a [ImportIssue],
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let mut session = data.open()?;

        let report = import::import_file(&self.file, &session.fixed)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let mut ids = Vec::with_capacity(report.imported_count());
        for article in report.imported.iter().cloned() {
            ids.push(session.catalog.add_article(article)?.id());
        }
        if !ids.is_empty() {
            session.save()?;
        }

        if self.json {
            print_json(&ImportResponse {
                imported: ids.len(),
                ids,
                issues: &report.issues,
            })?;
        } else {
            for issue in &report.issues {
                eprintln!("line {}: {}", issue.line, issue.reason);
            }
            println!(
                "Imported {} article(s), skipped {}.",
                ids.len(),
                report.issues.len()
            );
        }
        Ok(())
    }
}
