use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created .taglinerc.json"));

    let content = test.read_file(".taglinerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;

    assert_eq!(parsed["tagName"], "t");
    assert_eq!(parsed["translationsInput"], "./translations/input.json");
    assert_eq!(parsed["translationsOutput"], "./translations/output.json");
    assert_eq!(parsed["missingText"], "MISSING: ");
    assert_eq!(parsed["outDir"], "./dist");
    assert!(content.contains("\n  \"tagName\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".taglinerc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".taglinerc.json already exists"));
    assert_eq!(test.read_file(".taglinerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/app.js", "t`Hi`;")?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(test.read_file("dist/src/app.js")?, "`Hi`;");
    assert!(test.root().join("translations/output.json").exists());

    Ok(())
}
