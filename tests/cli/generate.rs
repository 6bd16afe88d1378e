use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const RAW_API: &str = "\
Account Functions
GetAccountExpansionLevel
print
C_Timer.After
C_Timer.NewTicker
table.insert
strsplit
";

const RAW_WIDGET: &str = "\
Button
Button:Click() - Simulates a click
Button:Enable()
CheckButton
CheckButton:Click()
CheckButton:Enable()
texture = CheckButton:GetCheckedTexture() - Returns the texture
Gizmo:Spin(speed)
not a method
";

const RAW_EVENTS: &str = "\
REMOVED PLAYER_DIED text
PLAYER_ALIVE fires when

UNIT_HEALTH changes
";

#[test]
fn test_events_only() -> Result<()> {
    let test = CliTest::with_file("raw_events", RAW_EVENTS)?;

    let result = run({
        let mut cmd = test.generate_command();
        cmd.arg("events");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert_snapshot!(result.stdout, @r#"
    {
      match: '(\'|")(PLAYER_ALIVE|UNIT_HEALTH)\\1'
      name: 'constant.wow.event'
    }
    "#);
    assert_eq!(result.stderr, "");

    Ok(())
}

#[test]
fn test_no_command_runs_everything() -> Result<()> {
    let test = CliTest::with_file("raw_events", RAW_EVENTS)?;

    let result = run(test.command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("constant.wow.event"));
    // the other three listings are missing
    assert_eq!(result.stderr.matches("missing-input").count(), 3);
    assert!(result.stderr.contains("skipped functions output"));
    assert!(result.stderr.contains("skipped framexml output"));
    assert!(result.stderr.contains("skipped widgets output"));

    Ok(())
}

#[test]
fn test_all_components_in_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("raw_api", RAW_API)?;
    test.write_file("raw_framexml", "ToggleGameMenu\nUIParent_OnLoad\n")?;
    test.write_file("raw_widget", RAW_WIDGET)?;
    test.write_file("raw_events", RAW_EVENTS)?;

    let result = run(test.generate_command())?;

    assert_eq!(result.code, Some(0));

    let scopes: Vec<&str> = result
        .stdout
        .lines()
        .filter_map(|line| line.strip_prefix("  name: "))
        .collect();
    assert_eq!(
        scopes,
        vec![
            "'support.function.wow.api'",
            "'support.function.wow.lua'",
            "'support.function.wow.framexml'",
            "'support.function.wow.widget.Button'",
            "'support.function.wow.widget.CheckButton'",
            "'support.function.wow.widget.Gizmo'",
            "'constant.wow.event'",
        ]
    );

    assert!(
        result
            .stdout
            .contains(r"\\b(C_Timer\\.(After|NewTicker)|GetAccountExpansionLevel|print)\\b")
    );
    assert!(result.stdout.contains(r"\\b(Click|Enable)\\b"));
    assert!(result.stdout.contains(r"\\b(GetCheckedTexture)\\b"));
    assert!(!result.stdout.contains("insert"));

    assert!(result.stderr.contains("class not found: Gizmo"));
    assert!(result.stderr.contains("raw_widget:9"));
    assert!(result.stderr.contains("not a method"));

    Ok(())
}

#[test]
fn test_config_and_flag_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".wowchunksrc.json", r#"{ "eventsFile": "lists/events.txt" }"#)?;
    test.write_file("lists/events.txt", "ADDON_LOADED addon\n")?;
    test.write_file("other_events", "LOOT_READY\n")?;

    let from_config = run({
        let mut cmd = test.generate_command();
        cmd.arg("events");
        cmd
    })?;
    assert!(from_config.stdout.contains("(ADDON_LOADED)"));

    let from_flag = run({
        let mut cmd = test.generate_command();
        cmd.args(["events", "--events", "other_events"]);
        cmd
    })?;
    assert!(from_flag.stdout.contains("(LOOT_READY)"));

    Ok(())
}

#[test]
fn test_root_directory() -> Result<()> {
    let test = CliTest::with_file("data/raw_events", "LOOT_READY\n")?;

    let result = run({
        let mut cmd = test.generate_command();
        cmd.args(["events", "--root", "data"]);
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("(LOOT_READY)"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".wowchunksrc.json", "{ nope")?;

    let result = run(test.generate_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.starts_with("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("generate"));
    assert!(result.stdout.contains("init"));

    Ok(())
}
