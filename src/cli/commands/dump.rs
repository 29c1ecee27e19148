use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::{
    archive::UnpackedMod,
    cli::args::DumpCommand,
    config::{Config, load_config},
    core::{
        dump::{DumpOptions, dump as dump_mod},
        model::JsonModuleDecoder,
    },
};

pub fn dump(cmd: DumpCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd)?.config;

    let archive = UnpackedMod::open(&cmd.mod_path, &config.code_file, &config.resource_ignores)?;
    let options = merge_options(&cmd, config);
    let summary = dump_mod(&archive, &JsonModuleDecoder, &options)?;

    Ok(CommandResult {
        error_count: summary.failed_count(),
        summary: CommandSummary::Dump(summary),
    })
}

/// CLI flags take precedence over the config file.
fn merge_options(cmd: &DumpCommand, config: Config) -> DumpOptions {
    let output_root = cmd
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_root));
    let categories = if cmd.categories.is_empty() {
        config.categories
    } else {
        cmd.categories.clone()
    };

    DumpOptions {
        output_root,
        categories,
        markers: config.markers,
        copy_resources: config.copy_resources && !cmd.no_resources,
        dry_run: cmd.dry_run,
    }
}
