use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const CONFIG: &str = r#"{
  "paths": ["locales/*.json"],
  "keyValidation": {
    "sourceFiles": ["src/**/*.ts"]
  }
}"#;

const NON_STRICT_CONFIG: &str = r#"{
  "paths": ["locales/*.json"],
  "keyValidation": {
    "sourceFiles": ["src/**/*.ts"],
    "strict": false
  }
}"#;

/// Source text calling `t()` with `k.m1` through `k.m{count}`.
fn many_calls(count: usize) -> String {
    (1..=count).map(|i| format!("t('k.m{}');\n", i)).collect()
}

#[test]
fn test_check_passes_when_all_keys_exist() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        (
            "locales/en.json",
            r#"{"common": {"hello": "Hello", "bye": "Bye"}}"#,
        ),
        ("src/app.ts", "t('common.hello');\nt(\"common.bye\");\n"),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_strict_missing_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", r#"{"common": {"hello": "Hello"}}"#),
        ("src/app.ts", "t('common.hello'); t('common.gone');"),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_strict_failure_lists_every_missing_key() -> Result<()> {
    let calls = many_calls(25);
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", "{}"),
        ("src/app.ts", &calls),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_non_strict_missing_keys_warn() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", NON_STRICT_CONFIG),
        ("locales/en.json", "{}"),
        ("src/app.ts", "t('common.missing')"),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_non_strict_warning_is_truncated() -> Result<()> {
    let calls = many_calls(25);
    let test = CliTest::with_files(&[
        (".keycheckrc.json", NON_STRICT_CONFIG),
        ("locales/en.json", "{}"),
        ("src/app.ts", &calls),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_no_strict_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", "{}"),
        ("src/app.ts", "t('common.missing')"),
    ])?;

    assert_cmd_snapshot!(test.check_command().arg("--no-strict"));

    Ok(())
}

#[test]
fn test_invalid_json() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", r#"{"common": }"#),
        ("src/app.ts", "t('common.hello')"),
    ])?;
    let _filters = test.bind_path_filters();

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_duplicate_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        (
            "locales/en.json",
            r#"{"common": {"hello": "Hi", "hello": "Hello"}}"#,
        ),
        ("src/app.ts", "t('common.hello')"),
    ])?;
    let _filters = test.bind_path_filters();

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_duplicate_keys_allowed() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".keycheckrc.json",
            r#"{
  "paths": ["locales/*.json"],
  "allowDuplicateKeys": true,
  "keyValidation": { "sourceFiles": ["src/**/*.ts"] }
}"#,
        ),
        (
            "locales/en.json",
            r#"{"common": {"hello": "Hi", "hello": "Hello"}}"#,
        ),
        ("src/app.ts", "t('common.hello')"),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_pattern_without_capture_group() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".keycheckrc.json",
            r#"{
  "paths": ["locales/*.json"],
  "keyValidation": { "patterns": [{ "regex": "t\\(no-group\\)" }] }
}"#,
        ),
        ("locales/en.json", "{}"),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_syntax_only() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", "{}"),
        ("src/app.ts", "t('common.missing')"),
    ])?;

    assert_cmd_snapshot!(test.check_command().arg("--syntax-only"));

    Ok(())
}

#[test]
fn test_key_validation_disabled_by_default() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", "{}"),
        ("src/app.ts", "t('common.missing')"),
    ])?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_custom_separator() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", r#"{"nav": {"home": "Home"}}"#),
        ("src/app.ts", "t('nav/home')"),
    ])?;

    assert_cmd_snapshot!(test.check_command().args(["--separator", "/"]));

    Ok(())
}

#[test]
fn test_silent_log_level() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", r#"{"a": "A"}"#),
        ("src/app.ts", "t('a')"),
    ])?;

    assert_cmd_snapshot!(test.check_command().args(["--log-level", "silent"]));

    Ok(())
}

#[test]
fn test_explicit_config_and_root() -> Result<()> {
    let test = CliTest::with_files(&[
        ("configs/keycheck.json", CONFIG),
        ("web/locales/en.json", r#"{"a": "A"}"#),
        ("web/src/app.ts", "t('a'); t('b');"),
    ])?;

    assert_cmd_snapshot!(test.check_command().args([
        "--root",
        "web",
        "--config",
        "configs/keycheck.json",
    ]));

    Ok(())
}

#[test]
fn test_verbose() -> Result<()> {
    let test = CliTest::with_files(&[
        (".keycheckrc.json", CONFIG),
        ("locales/en.json", r#"{"a": "A"}"#),
        ("src/app.ts", "t('a')"),
    ])?;
    let _filters = test.bind_path_filters();

    assert_cmd_snapshot!(test.check_command().arg("--verbose"));

    Ok(())
}
