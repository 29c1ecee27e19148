//! Mod archive access.
//!
//! The extractor only needs a handful of named blobs from a mod: the primary
//! code payload, the build properties and the resource files that are copied
//! through untouched. [`ModArchive`] is that interface; [`UnpackedMod`] reads
//! it from an unpacked mod directory.

pub mod unpacked;

pub use unpacked::UnpackedMod;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// File name of the build properties inside a mod.
pub const BUILD_FILE_NAME: &str = "build.txt";

/// Source of the named byte blobs that make up a mod.
pub trait ModArchive {
    /// Mod name; also the name of the output directory.
    fn name(&self) -> &str;

    /// The primary code payload. Missing payload is an error.
    fn primary_code(&self) -> Result<Vec<u8>>;

    /// Raw build properties, if the mod has any.
    fn build_info(&self) -> Result<Option<Vec<u8>>>;

    /// Relative, `/`-separated paths of resource files, in a stable order.
    fn resource_files(&self) -> &[String];

    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Canonical directory the mod is read from, when it lives on disk.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Build properties as an ordered `key → value` object.
///
/// Parsed from `key = value` lines. Blank lines and lines starting with `#`
/// are skipped, as are lines without `=`. Later keys overwrite earlier ones.
pub fn parse_build_properties(data: &[u8]) -> Result<Map<String, Value>> {
    let text = std::str::from_utf8(data).context("Build properties are not valid UTF-8")?;
    let mut properties = Map::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            properties.insert(
                key.trim().to_string(),
                Value::String(value.trim().to_string()),
            );
        }
    }

    Ok(properties)
}

/// Identity of a mod, written next to the extracted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModProperties {
    pub name: String,
    pub version: String,
    pub display_name: Option<String>,
}

impl ModProperties {
    pub fn new(name: &str, build: &Map<String, Value>) -> Self {
        let get = |key: &str| build.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: name.to_string(),
            version: get("version").unwrap_or_else(|| "1.0".to_string()),
            display_name: get("displayName"),
        }
    }
}
