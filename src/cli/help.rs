//! Display help topics from help.toml

use crate::cli::common::{CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use clap::Args;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Display help topics
#[derive(Args, Debug)]
pub struct HelpArgs {
    /// Help topic name to display (e.g., "overview", "articles", "generate")
    #[arg(value_name = "TOPIC")]
    topic: Option<String>,
}

#[derive(Deserialize, Debug)]
struct HelpData {
    #[serde(default)]
    topics: BTreeMap<String, Topic>,
}

#[derive(Deserialize, Debug)]
struct Topic {
    name: String,
    description: String,
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Deserialize, Debug, Clone)]
struct Entry {
    usage: String,
    summary: String,
    #[serde(default)]
    priority: u32,
}

fn load_help() -> CliResult<HelpData> {
    toml::from_str(include_str!("../data/help.toml"))
        .map_err(|e| CliError::io(format!("Failed to parse help.toml: {e}")))
}

impl HelpArgs {
    /// Execute the help command: display topics or specific topic details
    pub fn execute(&self) -> CliResult<()> {
        let help_data = load_help()?;

        if let Some(topic) = &self.topic {
            display_topic(topic, &help_data)
        } else {
            list_all_topics(&help_data);
            Ok(())
        }
    }
}

fn display_topic(topic: &str, help_data: &HelpData) -> CliResult<()> {
    let normalized_topic = topic.trim().to_lowercase().replace('-', "_");

    let topic_data = help_data.topics.get(&normalized_topic).ok_or_else(|| {
        CliError::validation(format!(
            "Unknown help topic: '{topic}'\n\nRun '{APP_BINARY_NAME} help' to see available topics."
        ))
    })?;

    println!("{}", topic_data.name);
    println!("{}", "=".repeat(topic_data.name.len()));
    println!();
    println!("{}", topic_data.description);
    println!();

    let mut entries = topic_data.entries.clone();
    entries.sort_by_key(|e| e.priority);

    for entry in entries {
        println!("  {}", entry.usage);
        println!("      {}", entry.summary);
    }

    Ok(())
}

fn list_all_topics(help_data: &HelpData) {
    println!("Available Help Topics");
    println!("=====================");
    println!();

    for (key, topic) in &help_data.topics {
        println!("  {key:<12}  -  {}", topic.description);
    }
    println!();

    println!("Usage: {APP_BINARY_NAME} help <topic>");
    println!("       {APP_BINARY_NAME} help overview");
}
