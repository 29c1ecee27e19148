//! Mod archive backed by an unpacked mod directory.
//!
//! Layout:
//!
//! ```text
//! ExampleMod/
//!   module.json      primary code payload (decoded module, name configurable)
//!   build.txt        build properties (optional)
//!   Images/Sword.png resource files, everything else
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

use super::{BUILD_FILE_NAME, ModArchive};

#[derive(Debug)]
pub struct UnpackedMod {
    root: PathBuf,
    location: PathBuf,
    name: String,
    code_file: String,
    resources: Vec<String>,
}

impl UnpackedMod {
    /// Open `root`, listing resource files up front.
    ///
    /// Resource paths matching any of `resource_ignores` (glob patterns over the
    /// `/`-separated relative path) are left out.
    pub fn open(root: &Path, code_file: &str, resource_ignores: &[String]) -> Result<Self> {
        if !root.is_dir() {
            bail!("Mod directory not found: {}", root.display());
        }

        let location = root
            .canonicalize()
            .with_context(|| format!("Invalid mod path: {}", root.display()))?;
        let name = location
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .with_context(|| format!("Cannot determine mod name from: {}", root.display()))?;

        let patterns = resource_ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid resource ignore pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut resources = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Cannot read mod directory: {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(relative) = relative_path(root, entry.path()) else {
                continue;
            };
            if relative == code_file || relative == BUILD_FILE_NAME {
                continue;
            }
            if patterns.iter().any(|p| p.matches(&relative)) {
                continue;
            }
            resources.push(relative);
        }

        Ok(Self {
            root: root.to_path_buf(),
            location,
            name,
            code_file: code_file.to_string(),
            resources,
        })
    }
}

/// `/`-separated path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

impl ModArchive for UnpackedMod {
    fn name(&self) -> &str {
        &self.name
    }

    fn primary_code(&self) -> Result<Vec<u8>> {
        let path = self.root.join(&self.code_file);
        fs::read(&path).with_context(|| format!("Code payload not found: {}", path.display()))
    }

    fn build_info(&self) -> Result<Option<Vec<u8>>> {
        let path = self.root.join(BUILD_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        let data =
            fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Some(data))
    }

    fn resource_files(&self) -> &[String] {
        &self.resources
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        fs::read(&full).with_context(|| format!("Failed to read file: {}", full.display()))
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.location)
    }
}
