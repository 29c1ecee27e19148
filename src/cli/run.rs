//! Dispatch parsed arguments to the matching command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and its failure count
//! - `Err` if the command fails (e.g., mod not found, payload cannot be decoded)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, dump::dump, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
