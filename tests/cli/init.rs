use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localesPath"], "locales");
    assert_eq!(parsed["srcPath"], ".");
    assert_eq!(parsed["context"], true);
    assert!(
        parsed.get("srcExtensions").is_some(),
        "Config should have 'srcExtensions' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \"localesPath\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ Created .i18n-unused.json\n");
    assert!(test.root().join(".i18n-unused.json").exists());

    let content = test.read_file(".i18n-unused.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-unused.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stderr, "Error: .i18n-unused.json already exists\n");
    assert_eq!(test.read_file(".i18n-unused.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("unused"));
    assert!(output.stdout.contains("missed"));

    Ok(())
}
