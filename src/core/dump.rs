//! End-to-end dump of one mod: load, extract, write.
//!
//! The module is loaded and decoded before anything touches the output
//! directory, so a load failure leaves no partial output behind. After that,
//! writing is not transactional: an I/O error aborts the run and keeps whatever
//! was already written.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Map;

use crate::{
    archive::{ModArchive, ModProperties, parse_build_properties},
    core::{
        extract::{ExtractedRecords, extract},
        model::{MarkerNames, Module, ModuleDecoder},
        records::{Category, Translation},
        writer::{MissingNamespace, OutputLayout, group_by_namespace, write_groups, write_json},
    },
};

pub const BUILD_INFO_FILE_NAME: &str = "Info.json";
pub const MOD_INFO_FILE_NAME: &str = "Mod.json";

/// Settings for one dump run, already merged from config and CLI.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub output_root: PathBuf,
    pub categories: Vec<Category>,
    pub markers: MarkerNames,
    pub copy_resources: bool,
    /// Extract and group without writing anything.
    pub dry_run: bool,
}

/// Outcome of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub records: usize,
    /// Namespaces written (or that would be written), in output order.
    pub namespaces: Vec<String>,
    /// Set when the category could not be grouped; nothing was written for it.
    pub missing_namespace: Option<MissingNamespace>,
}

impl CategorySummary {
    pub fn is_failed(&self) -> bool {
        self.missing_namespace.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct DumpSummary {
    pub mod_name: String,
    pub output_dir: PathBuf,
    pub categories: Vec<CategorySummary>,
    pub resources_copied: usize,
    pub dry_run: bool,
}

impl DumpSummary {
    pub fn failed_count(&self) -> usize {
        self.categories.iter().filter(|c| c.is_failed()).count()
    }

    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|c| c.records).sum()
    }
}

/// Read the code payload, decode it and resolve markers.
pub fn load_module(
    archive: &impl ModArchive,
    decoder: &impl ModuleDecoder,
    markers: &MarkerNames,
) -> Result<Module> {
    let payload = archive.primary_code()?;
    let mut module = decoder
        .decode(&payload)
        .with_context(|| format!("Failed to load mod: {}", archive.name()))?;
    module.resolve_markers(markers);
    Ok(module)
}

pub fn dump(
    archive: &impl ModArchive,
    decoder: &impl ModuleDecoder,
    options: &DumpOptions,
) -> Result<DumpSummary> {
    let layout = OutputLayout::new(&options.output_root, archive.name());
    let resources: Vec<&str> = match archive.location() {
        Some(source) => {
            let output_dir = resolve_path(layout.root())?;
            if source.starts_with(&output_dir) {
                bail!(
                    "Output directory {} would overwrite the mod at {}",
                    output_dir.display(),
                    source.display()
                );
            }
            // A previous dump written inside the mod is not a resource.
            archive
                .resource_files()
                .iter()
                .filter(|file| !source.join(file.as_str()).starts_with(&output_dir))
                .map(String::as_str)
                .collect()
        }
        None => archive.resource_files().iter().map(String::as_str).collect(),
    };

    let module = load_module(archive, decoder, &options.markers)?;
    let build = match archive.build_info()? {
        Some(data) => parse_build_properties(&data)?,
        None => Map::new(),
    };

    let categories: Vec<Category> = Category::all()
        .into_iter()
        .filter(|c| options.categories.contains(c))
        .collect();
    let records = extract(&module, &categories);

    let target = if options.dry_run {
        None
    } else {
        layout.prepare(&categories)?;
        write_json(&layout.root().join(BUILD_INFO_FILE_NAME), &build)?;
        write_json(
            &layout.root().join(MOD_INFO_FILE_NAME),
            &ModProperties::new(archive.name(), &build),
        )?;
        Some(&layout)
    };

    let summaries = categories
        .iter()
        .map(|&category| write_category(&records, category, target))
        .collect::<Result<Vec<_>>>()?;

    let resources_copied = if options.copy_resources {
        if let Some(layout) = target {
            copy_resources(archive, &resources, layout.root())?;
        }
        resources.len()
    } else {
        0
    };

    Ok(DumpSummary {
        mod_name: archive.name().to_string(),
        output_dir: layout.root().to_path_buf(),
        categories: summaries,
        resources_copied,
        dry_run: options.dry_run,
    })
}

/// Absolute form of `path` with its existing prefix canonicalized.
///
/// The output directory usually does not exist yet, so only the part of the
/// path that does exist can go through `canonicalize`.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Invalid output path: {}", path.display()))?;

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("Invalid output path: {}", path.display()))?;
    resolved.extend(missing.into_iter().rev());
    Ok(resolved)
}

fn write_category(
    records: &ExtractedRecords,
    category: Category,
    target: Option<&OutputLayout>,
) -> Result<CategorySummary> {
    match category {
        Category::Items => summarize(category, &records.items, target),
        Category::Npcs => summarize(category, &records.npcs, target),
        Category::Buffs => summarize(category, &records.buffs, target),
        Category::Misc => summarize(category, &records.misc, target),
        Category::Tiles => summarize(category, &records.tiles, target),
        Category::Customs => summarize(category, &records.customs, target),
    }
}

fn summarize<T: Translation + Serialize>(
    category: Category,
    records: &[T],
    target: Option<&OutputLayout>,
) -> Result<CategorySummary> {
    let groups = match group_by_namespace(records) {
        Ok(groups) => groups,
        Err(missing) => {
            return Ok(CategorySummary {
                category,
                records: records.len(),
                namespaces: Vec::new(),
                missing_namespace: Some(missing),
            });
        }
    };

    if let Some(layout) = target {
        write_groups(layout, category, &groups)?;
    }

    Ok(CategorySummary {
        category,
        records: records.len(),
        namespaces: groups.iter().map(|g| g.namespace.to_string()).collect(),
        missing_namespace: None,
    })
}

/// Copy resource files to the same relative path under `root`.
///
/// Resources are copied after the category files, so a resource that shares a
/// category folder sits next to the namespace files.
fn copy_resources(archive: &impl ModArchive, files: &[&str], root: &Path) -> Result<()> {
    for file in files {
        let data = archive.read_file(file)?;
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&path, data)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    Ok(())
}
