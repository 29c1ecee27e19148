//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `dump`: Extract translatable text from a mod into per-namespace JSON files
//! - `init`: Initialize modloc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::records::Category;

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Dump(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// Unpacked mod directory
    pub mod_path: PathBuf,

    /// Directory to write `<ModName>/` into (overrides config file)
    #[arg(short, long, env = "MODLOC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Categories to extract (default: config file, then all)
    /// Can be specified multiple times: --category items --category npcs
    #[arg(long = "category", value_enum)]
    pub categories: Vec<Category>,

    /// Extract and report without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Do not copy resource files into the output
    #[arg(long)]
    pub no_resources: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable text from a mod into per-namespace JSON files
    Dump(DumpCommand),
    /// Initialize a new .modlocrc.json configuration file
    Init,
}
