use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{
    CliTest, call, example_module, getter, ldstr, method, set_default, type_def,
};

#[test]
fn test_dump_writes_every_category() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    let output = test.dump_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("✓ Items: 1 record(s) in 1 file(s)"));
    assert!(stdout.contains("✓ 6 record(s) extracted"));

    assert_eq!(
        test.read_json("out/ExampleMod/Items/ExampleMod.Items.json")?,
        json!([{
            "TypeName": "Sword",
            "Namespace": "ExampleMod.Items",
            "Name": "Sword",
            "ToolTip": "A sharp blade",
            "ModifyTooltips": [],
            "SetBonus": null
        }])
    );
    assert_eq!(
        test.read_json("out/ExampleMod/NPCs/ExampleMod.NPCs.json")?[0]["ChatTexts"],
        json!(["Hello", "Welcome back"])
    );
    assert_eq!(
        test.read_json("out/ExampleMod/Buffs/ExampleMod.Buffs.json")?[0]["Tip"],
        json!("Hits harder")
    );
    assert_eq!(
        test.read_json("out/ExampleMod/Tiles/ExampleMod.Tiles.json")?[0]["Name"],
        json!("Rock")
    );
    assert_eq!(
        test.read_json("out/ExampleMod/Misc/ExampleMod.Systems.json")?,
        json!([{
            "TypeName": "Announcer",
            "Namespace": "ExampleMod.Systems",
            "Method": "OnWorldLoad",
            "Contents": ["The world awakens"]
        }])
    );
    assert_eq!(
        test.read_json("out/ExampleMod/Customs/ExampleMod.json")?,
        json!([{ "Key": "Greeting", "Namespace": "ExampleMod", "Value": "Hi there" }])
    );

    Ok(())
}

#[test]
fn test_dump_writes_mod_info_and_resources() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    test.dump_command().output()?;

    insta::assert_snapshot!(test.read_file("out/ExampleMod/Mod.json")?, @r#"
    {
      "Name": "ExampleMod",
      "Version": "1.0",
      "DisplayName": "Example Mod"
    }
    "#);
    assert_eq!(
        test.read_json("out/ExampleMod/Info.json")?["author"],
        json!("someone")
    );
    assert!(test.root().join("out/ExampleMod/Items/Sword.png").is_file());
    assert!(!test.root().join("out/ExampleMod/Items/Sword.cs").exists());
    assert!(!test.root().join("out/ExampleMod/module.json").exists());

    Ok(())
}

#[test]
fn test_dump_no_resources() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    let output = test.dump_command().arg("--no-resources").output()?;

    assert!(output.status.success());
    assert!(!test.root().join("out/ExampleMod/Items/Sword.png").exists());
    assert!(test.root().join("out/ExampleMod/Mod.json").is_file());

    Ok(())
}

#[test]
fn test_dump_selected_categories() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    let output = test
        .dump_command()
        .args(["--category", "buffs", "--category", "customs"])
        .output()?;

    assert!(output.status.success());
    let root = test.root().join("out/ExampleMod");
    assert!(root.join("Buffs/ExampleMod.Buffs.json").is_file());
    assert!(root.join("Customs/ExampleMod.json").is_file());
    assert!(!root.join("NPCs").exists());
    // Items/ only holds the copied resource.
    assert!(!root.join("Items/ExampleMod.Items.json").exists());
    assert!(root.join("Items/Sword.png").is_file());

    Ok(())
}

#[test]
fn test_dump_groups_by_namespace_in_first_seen_order() -> Result<()> {
    let sword = |namespace: &str, name: &str| {
        type_def(
            namespace,
            name,
            Some("Terraria.ModLoader.ModItem"),
            vec![method(
                "SetStaticDefaults",
                vec![getter("get_DisplayName"), ldstr(name), set_default()],
            )],
        )
    };
    let module = json!({
        "types": [
            sword("ExampleMod.Items.Melee", "Sword"),
            sword("ExampleMod.Items.Ranged", "Bow"),
            sword("ExampleMod.Items.Melee", "Spear"),
        ]
    });
    let test = CliTest::with_mod(&module)?;

    let output = test
        .dump_command()
        .args(["--category", "items", "--verbose"])
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let melee = test.read_json("out/ExampleMod/Items/ExampleMod.Items.Melee.json")?;
    let names: Vec<&str> = melee
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["TypeName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Sword", "Spear"]);
    assert!(test.root().join("out/ExampleMod/Items/ExampleMod.Items.Ranged.json").is_file());

    let melee_line = stdout.find("ExampleMod.Items.Melee.json").unwrap();
    let ranged_line = stdout.find("ExampleMod.Items.Ranged.json").unwrap();
    assert!(melee_line < ranged_line);

    Ok(())
}

#[test]
fn test_dump_resolves_markers_through_base_types() -> Result<()> {
    let module = json!({
        "types": [
            type_def("ExampleMod.Common", "BaseWeapon", Some("Terraria.ModLoader.ModItem"), vec![]),
            type_def(
                "ExampleMod.Items",
                "Axe",
                Some("ExampleMod.Common.BaseWeapon"),
                vec![method(
                    "SetStaticDefaults",
                    vec![getter("get_DisplayName"), ldstr("Axe"), set_default()],
                )],
            ),
        ]
    });
    let test = CliTest::with_mod(&module)?;

    let output = test.dump_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_json("out/ExampleMod/Items/ExampleMod.Items.json")?[0]["Name"],
        json!("Axe")
    );

    Ok(())
}

#[test]
fn test_dump_empty_namespace_fails_category() -> Result<()> {
    let module = json!({
        "types": [
            type_def(
                "",
                "GlobalHelper",
                None,
                vec![method(
                    "Load",
                    vec![
                        ldstr("Orphan"),
                        call("Terraria.ModLoader.Mod", "CreateTranslation", 1),
                        json!({ "op": "stloc", "slot": 1 }),
                        json!({ "op": "ldloc", "slot": 1 }),
                        ldstr("Lost"),
                    ],
                )],
            ),
            type_def(
                "ExampleMod.Buffs",
                "Rage",
                Some("Terraria.ModLoader.ModBuff"),
                vec![method("SetDefaults", vec![getter("get_DisplayName"), ldstr("Rage"), set_default()])],
            ),
        ]
    });
    let test = CliTest::with_mod(&module)?;

    let output = test.dump_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✘ Customs: Orphan has no namespace"));
    assert!(stdout.contains("✘ 1 category(ies) failed"));
    assert!(test.root().join("out/ExampleMod/Buffs/ExampleMod.Buffs.json").is_file());
    assert_eq!(
        std::fs::read_dir(test.root().join("out/ExampleMod/Customs"))?.count(),
        0
    );

    Ok(())
}

#[test]
fn test_dump_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    let output = test.dump_command().arg("--dry-run").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("Would dump ExampleMod"));
    assert!(stdout.contains("1 resource file(s) to copy"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_dump_clears_previous_output() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;
    test.write_file("out/ExampleMod/Items/Stale.json", "[]")?;

    let output = test.dump_command().output()?;

    assert!(output.status.success());
    assert!(!test.root().join("out/ExampleMod/Items/Stale.json").exists());

    Ok(())
}

#[test]
fn test_dump_is_deterministic() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    test.dump_command().output()?;
    let first = test.read_file("out/ExampleMod/NPCs/ExampleMod.NPCs.json")?;
    test.dump_command().output()?;
    let second = test.read_file("out/ExampleMod/NPCs/ExampleMod.NPCs.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_dump_uses_config_file() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;
    test.write_file(
        ".modlocrc.json",
        r#"{ "outputRoot": "translations", "categories": ["tiles"] }"#,
    )?;

    let output = test.command().args(["dump", "ExampleMod"]).output()?;

    assert!(output.status.success());
    let root = test.root().join("translations/ExampleMod");
    assert!(root.join("Tiles/ExampleMod.Tiles.json").is_file());
    assert!(!root.join("Items/ExampleMod.Items.json").exists());
    assert!(!root.join("Buffs").exists());

    Ok(())
}

#[test]
fn test_dump_resources_sit_next_to_namespace_files() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    let output = test.dump_command().output()?;

    assert!(output.status.success());
    let mut names: Vec<String> = std::fs::read_dir(test.root().join("out/ExampleMod/Items"))?
        .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_>>()?;
    names.sort();
    assert_eq!(names, vec!["ExampleMod.Items.json", "Sword.png"]);

    Ok(())
}

#[test]
fn test_dump_refuses_to_overwrite_mod() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;

    let output = test.command().args(["dump", "ExampleMod", "-o", "."]).output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("would overwrite the mod"));
    assert!(test.root().join("ExampleMod/module.json").is_file());
    assert!(test.root().join("ExampleMod/Items/Sword.png").is_file());

    Ok(())
}

#[test]
fn test_dump_twice_from_inside_mod() -> Result<()> {
    let test = CliTest::with_mod(&example_module())?;
    let mod_root = test.root().join("ExampleMod");

    for _ in 0..2 {
        let output = test
            .command()
            .current_dir(&mod_root)
            .args(["dump", "."])
            .output()?;
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let dumped = mod_root.join("dump/ExampleMod");
    assert!(dumped.join("Items/Sword.png").is_file());
    assert!(!dumped.join("dump").exists());

    Ok(())
}

#[test]
fn test_dump_missing_mod_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.dump_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Mod directory not found"));

    Ok(())
}

#[test]
fn test_dump_invalid_payload_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ExampleMod/module.json", "{ not json")?;
    test.write_file("out/ExampleMod/Items/Kept.json", "[]")?;

    let output = test.dump_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Failed to load mod: ExampleMod"));
    assert!(test.root().join("out/ExampleMod/Items/Kept.json").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("dump"));

    Ok(())
}
