//! Namespace-grouped output.
//!
//! Every category goes to its own folder under the mod output directory, with
//! one JSON file per namespace. Namespaces appear in first-seen order and
//! records keep their extraction order inside each file, so the same module
//! always produces byte-identical output.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::records::{Category, Translation};

/// Directory layout of one mod's output: `<output_root>/<mod name>/`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(output_root: &Path, mod_name: &str) -> Self {
        Self {
            root: output_root.join(mod_name),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.folder())
    }

    /// Path of the file holding `namespace`'s records of `category`.
    pub fn namespace_file(&self, category: Category, namespace: &str) -> PathBuf {
        self.category_dir(category).join(format!("{}.json", namespace))
    }

    /// Clear any previous output and create the folders of `categories`.
    pub fn prepare(&self, categories: &[Category]) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).with_context(|| {
                format!("Failed to clear output directory: {}", self.root.display())
            })?;
        }
        for category in categories {
            let dir = self.category_dir(*category);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Records of one namespace, in extraction order.
#[derive(Debug)]
pub struct NamespaceGroup<'a, T> {
    pub namespace: &'a str,
    pub records: Vec<&'a T>,
}

/// A record whose namespace is empty; its category cannot be grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNamespace {
    pub category: Category,
    pub owner: String,
}

/// Group records by namespace in first-seen order.
///
/// Fails on the first record with an empty namespace.
pub fn group_by_namespace<T: Translation>(
    records: &[T],
) -> Result<Vec<NamespaceGroup<'_, T>>, MissingNamespace> {
    let mut groups: Vec<NamespaceGroup<'_, T>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let namespace = record.namespace();
        if namespace.is_empty() {
            return Err(MissingNamespace {
                category: record.category(),
                owner: record.owner().to_string(),
            });
        }
        match index.get(namespace) {
            Some(&i) => groups[i].records.push(record),
            None => {
                index.insert(namespace, groups.len());
                groups.push(NamespaceGroup {
                    namespace,
                    records: vec![record],
                });
            }
        }
    }

    Ok(groups)
}

/// Write each group to `<category dir>/<namespace>.json`.
pub fn write_groups<T: Serialize>(
    layout: &OutputLayout,
    category: Category,
    groups: &[NamespaceGroup<'_, T>],
) -> Result<()> {
    for group in groups {
        write_json(&layout.namespace_file(category, group.namespace), &group.records)?;
    }
    Ok(())
}

/// Pretty-print `value` as JSON with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
