//! Wardrobe - random outfit generator for a personal clothing catalog
//!
//! Articles are filed by type, filtered by use, weather and color palette,
//! and combined into outfits that are kept in a history.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wardrobe::cli::{
    AddArgs, CliResult, ConfigArgs, DataArgs, DeleteArgs, GenerateArgs, HelpArgs, HistoryArgs,
    ImportArgs, InitArgs, LastArgs, ListArgs, ValidateArgs,
};
use wardrobe::constants::APP_NAME;

/// Wardrobe - random outfit generator for a personal clothing catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an article
    Add(AddArgs),
    /// List articles
    List(ListArgs),
    /// Delete an article by id
    Delete(DeleteArgs),
    /// Generate an outfit and record it
    Generate(GenerateArgs),
    /// Import articles from a text file
    Import(ImportArgs),
    /// Show or clear the outfit history
    History(HistoryArgs),
    /// Show the most recent outfit
    Last(LastArgs),
    /// Show help topics
    Help(HelpArgs),
    /// Check the data files
    Validate(ValidateArgs),
    /// Create starter data files
    Init(InitArgs),
    /// Show or change settings
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self, data: &DataArgs) -> CliResult<()> {
        match self {
            Self::Add(args) => args.execute(data),
            Self::List(args) => args.execute(data),
            Self::Delete(args) => args.execute(data),
            Self::Generate(args) => args.execute(data),
            Self::Import(args) => args.execute(data),
            Self::History(args) => args.execute(data),
            Self::Last(args) => args.execute(data),
            Self::Help(args) => args.execute(),
            Self::Validate(args) => args.execute(data),
            Self::Init(args) => args.execute(data),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(err) = cli.command.execute(&cli.data) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
