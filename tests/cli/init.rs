use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["paths"], serde_json::json!(["locales/**/*.json"]));
    assert_eq!(parsed["allowDuplicateKeys"], Value::Bool(false));
    assert!(
        parsed["keyValidation"].is_object(),
        "Config should enable key validation"
    );
    assert_eq!(parsed["keyValidation"]["separator"], ".");
    assert_eq!(parsed["keyValidation"]["strict"], Value::Bool(true));

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".keycheckrc.json").exists());
    let content = test.read_file(".keycheckrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keycheckrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert_eq!(test.read_file(".keycheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keycheckrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().args(["init", "--force"]));

    assert_config_content(&test.read_file(".keycheckrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_config_is_accepted_by_check() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"home": {"title": "Home"}}"#),
        ("src/app.tsx", "t('home.title')"),
    ])?;

    let status = test.command().arg("init").status()?;
    assert!(status.success());

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}
