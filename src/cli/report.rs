//! Report formatting and printing utilities.
//!
//! This module prints command summaries in cargo-style format.
//! Separate from core logic to allow modloc to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::dump::{CategorySummary, DumpSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Dump(summary) => print_dump_to(summary, verbose, &mut stdout),
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }
}

/// Print a dump summary to a custom writer.
pub fn print_dump_to<W: Write>(summary: &DumpSummary, verbose: bool, writer: &mut W) {
    let heading = if summary.dry_run {
        "Would dump".yellow().bold()
    } else {
        "Dumped".green().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} to {}",
        heading,
        summary.mod_name,
        summary.output_dir.display()
    );

    for category in &summary.categories {
        print_category_to(category, verbose, writer);
    }

    if summary.resources_copied > 0 {
        let verb = if summary.dry_run { "to copy" } else { "copied" };
        let _ = writeln!(
            writer,
            "  {} resource file(s) {}",
            summary.resources_copied, verb
        );
    }

    let failed = summary.failed_count();
    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} category(ies) failed", failed).red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} record(s) extracted", summary.record_count()).green()
        );
    }

    if summary.dry_run {
        let _ = writeln!(writer, "Run without {} to write files.", "--dry-run".cyan());
    }
}

fn print_category_to<W: Write>(category: &CategorySummary, verbose: bool, writer: &mut W) {
    if let Some(missing) = &category.missing_namespace {
        let _ = writeln!(
            writer,
            "  {} {}: {} has no namespace",
            FAILURE_MARK.red(),
            category.category.folder(),
            missing.owner.bold()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "  {} {}: {} record(s) in {} file(s)",
        SUCCESS_MARK.green(),
        category.category.folder(),
        category.records,
        category.namespaces.len()
    );
    if verbose {
        for namespace in &category.namespaces {
            let _ = writeln!(writer, "      {}.json", namespace.dimmed());
        }
    }
}

/// Print an init summary to a custom writer.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
