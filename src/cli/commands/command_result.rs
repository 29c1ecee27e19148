use crate::cli::exit_status::ExitStatus;
use crate::core::dump::DumpSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Dump(DumpSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running modloc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of categories that could not be written.
    pub error_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
