use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::{Value, json};
use tempfile::TempDir;

mod dump;

const BIN_NAME: &str = "modloc";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup from escaping into the directories above the temp dir.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with one unpacked mod at `ExampleMod/`.
    pub fn with_mod(module: &Value) -> Result<Self> {
        let test = Self::new()?;
        test.write_mod("ExampleMod", module)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_mod(&self, name: &str, module: &Value) -> Result<()> {
        self.write_file(
            &format!("{}/module.json", name),
            &serde_json::to_string_pretty(module)?,
        )?;
        self.write_file(
            &format!("{}/build.txt", name),
            "displayName = Example Mod\nauthor = someone\n",
        )?;
        self.write_file(&format!("{}/Items/Sword.png", name), "png")?;
        self.write_file(&format!("{}/Items/Sword.cs", name), "class Sword {}")?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn dump_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["dump", "ExampleMod", "--output", "out"]);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }
}

// ============================================================
// Module fixtures
// ============================================================

pub fn ldstr(value: &str) -> Value {
    json!({ "op": "ldstr", "value": value })
}

pub fn call(declaring_type: &str, name: &str, parameter_count: usize) -> Value {
    json!({
        "op": "call",
        "method": { "declaringType": declaring_type, "name": name, "parameterCount": parameter_count }
    })
}

pub fn callvirt(declaring_type: &str, name: &str, parameter_count: usize) -> Value {
    json!({
        "op": "callvirt",
        "method": { "declaringType": declaring_type, "name": name, "parameterCount": parameter_count }
    })
}

pub fn getter(name: &str) -> Value {
    call("Terraria.ModLoader.ModType", name, 0)
}

pub fn set_default() -> Value {
    callvirt("Terraria.ModLoader.ModTranslation", "SetDefault", 1)
}

pub fn nop() -> Value {
    json!({ "op": "nop" })
}

pub fn method(name: &str, instructions: Vec<Value>) -> Value {
    json!({ "name": name, "body": { "locals": 2, "instructions": instructions } })
}

pub fn type_def(namespace: &str, name: &str, base: Option<&str>, methods: Vec<Value>) -> Value {
    json!({
        "name": name,
        "namespace": namespace,
        "baseTypes": base.into_iter().collect::<Vec<_>>(),
        "methods": methods
    })
}

/// A mod with one record of every category.
pub fn example_module() -> Value {
    json!({
        "types": [
            type_def(
                "ExampleMod.Items",
                "Sword",
                Some("Terraria.ModLoader.ModItem"),
                vec![method(
                    "SetStaticDefaults",
                    vec![
                        json!({ "op": "ldarg", "index": 0 }),
                        getter("get_DisplayName"),
                        ldstr("Sword"),
                        set_default(),
                        json!({ "op": "ldarg", "index": 0 }),
                        getter("get_Tooltip"),
                        ldstr("A sharp blade"),
                        set_default(),
                    ],
                )],
            ),
            type_def(
                "ExampleMod.NPCs",
                "Guide",
                Some("Terraria.ModLoader.ModNPC"),
                vec![
                    method(
                        "SetStaticDefaults",
                        vec![getter("get_DisplayName"), ldstr("Guide"), set_default()],
                    ),
                    method("GetChat", vec![ldstr("Hello"), ldstr("Welcome back")]),
                ],
            ),
            type_def(
                "ExampleMod.Buffs",
                "Rage",
                Some("Terraria.ModLoader.ModBuff"),
                vec![method(
                    "SetDefaults",
                    vec![
                        getter("get_DisplayName"),
                        ldstr("Rage"),
                        set_default(),
                        getter("get_Description"),
                        ldstr("Hits harder"),
                        set_default(),
                    ],
                )],
            ),
            type_def(
                "ExampleMod.Tiles",
                "Rock",
                Some("Terraria.ModLoader.ModTile"),
                vec![method(
                    "SetDefaults",
                    vec![
                        callvirt("Terraria.ModLoader.ModTile", "CreateMapEntryName", 1),
                        ldstr("Rock"),
                        set_default(),
                    ],
                )],
            ),
            type_def(
                "ExampleMod.Systems",
                "Announcer",
                None,
                vec![method(
                    "OnWorldLoad",
                    vec![
                        ldstr("The world awakens"),
                        nop(),
                        nop(),
                        nop(),
                        nop(),
                        call("Terraria.Main", "NewText", 5),
                    ],
                )],
            ),
            type_def(
                "ExampleMod",
                "ExampleMod",
                Some("Terraria.ModLoader.Mod"),
                vec![method(
                    "Load",
                    vec![
                        ldstr("Greeting"),
                        callvirt("Terraria.ModLoader.Mod", "CreateTranslation", 1),
                        json!({ "op": "stloc", "slot": 0 }),
                        json!({ "op": "ldloc", "slot": 0 }),
                        ldstr("Hi there"),
                        set_default(),
                    ],
                )],
            ),
        ]
    })
}
