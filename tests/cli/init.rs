use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created .wowchunksrc.json"));
    assert!(test.root().join(".wowchunksrc.json").exists());

    let content = test.read_file(".wowchunksrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["apiFile"], "raw_api");
    assert_eq!(parsed["framexmlFile"], "raw_framexml");
    assert_eq!(parsed["widgetFile"], "raw_widget");
    assert_eq!(parsed["eventsFile"], "raw_events");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".wowchunksrc.json", "{}")?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains(".wowchunksrc.json already exists"));
    assert_eq!(test.read_file(".wowchunksrc.json")?, "{}");

    Ok(())
}
