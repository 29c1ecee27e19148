use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{model::MarkerNames, records::Category};

pub const CONFIG_FILE_NAME: &str = ".modlocrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory under which `<ModName>/` is written.
    #[serde(default = "default_output_root")]
    pub output_root: String,
    /// Name of the code payload inside an unpacked mod.
    #[serde(default = "default_code_file")]
    pub code_file: String,
    #[serde(default)]
    pub markers: MarkerNames,
    #[serde(default = "Category::all")]
    pub categories: Vec<Category>,
    #[serde(default = "default_copy_resources")]
    pub copy_resources: bool,
    /// Glob patterns of mod files that are not copied through as resources.
    #[serde(default = "default_resource_ignores")]
    pub resource_ignores: Vec<String>,
}

fn default_output_root() -> String {
    "./dump".to_string()
}

fn default_code_file() -> String {
    "module.json".to_string()
}

fn default_copy_resources() -> bool {
    true
}

fn default_resource_ignores() -> Vec<String> {
    ["**/*.cs", "**/*.csproj", "**/*.dll", "**/*.pdb", "**/bin/**", "**/obj/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            code_file: default_code_file(),
            markers: MarkerNames::default(),
            categories: Category::all(),
            copy_resources: default_copy_resources(),
            resource_ignores: default_resource_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `resourceIgnores`, an empty
    /// marker name or an empty `codeFile`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.resource_ignores {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'resourceIgnores': \"{}\"", pattern)
            })?;
        }

        let markers = [
            ("item", &self.markers.item),
            ("npc", &self.markers.npc),
            ("buff", &self.markers.buff),
            ("tile", &self.markers.tile),
        ];
        for (kind, name) in markers {
            if name.trim().is_empty() {
                bail!("Marker '{}' in 'markers' must not be empty", kind);
            }
        }

        if self.code_file.trim().is_empty() {
            bail!("'codeFile' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
