//! CLI command handlers for Wardrobe.
//!
//! Each command loads the data files it needs, applies one operation and
//! writes the wardrobe back as a whole.

pub mod add;
pub mod common;
pub mod config;
pub mod delete;
pub mod generate;
pub mod help;
pub mod history;
pub mod import;
pub mod init;
pub mod list;
pub mod validate;

// Re-export types used by main.rs and tests
pub use add::AddArgs;
pub use common::{CliError, CliResult, DataArgs, ExitCode};
pub use config::ConfigArgs;
pub use delete::DeleteArgs;
pub use generate::GenerateArgs;
pub use help::HelpArgs;
pub use history::{HistoryArgs, LastArgs};
pub use import::ImportArgs;
pub use init::InitArgs;
pub use list::ListArgs;
pub use validate::ValidateArgs;
