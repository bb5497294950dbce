//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: extract the string literal at a cursor position
//! - `lookup`: inspect existing resource entries by key or value
//! - `init`: write a default `.resxrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the string literal at a cursor position into strings.xml
    Extract(ExtractCommand),
    /// Show resource entries matching a key or value
    Lookup(LookupCommand),
    /// Initialize a .resxrc.json configuration file
    Init,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source file containing the literal
    pub file: PathBuf,

    /// Cursor line (1-based)
    #[arg(long)]
    pub line: usize,

    /// Cursor column (1-based)
    #[arg(long)]
    pub column: usize,

    /// Resource key to use instead of the suggested one
    #[arg(long)]
    pub key: Option<String>,

    /// Resource value to use instead of the extracted template
    #[arg(long)]
    pub value: Option<String>,

    /// Reuse an existing resource key instead of adding a new entry
    #[arg(long, conflicts_with_all = ["key", "value"])]
    pub use_existing: Option<String>,

    /// Proceed even when matching entries already exist
    #[arg(long)]
    pub force: bool,

    /// Actually modify files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Match entries by exact key
    #[arg(long)]
    pub key: Option<String>,

    /// Match entries by exact value
    #[arg(long)]
    pub value: Option<String>,
}
