use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_missed_static_and_dynamic() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".i18n-unused.json",
            r#"{ "srcPath": "src" }"#,
        ),
        ("locales/en.json", r#"{"menu": {"title": "Menu"}}"#),
        (
            "src/app.ts",
            "t('menu.title');\nt('nav.home');\nt(`item_${id}`);\nt(key);\n",
        ),
    ])?;

    let output = run(test.missed_command())?;

    assert_eq!(output.code, 1);
    insta::assert_snapshot!(output.stdout, @r"
    <<<==========================================================>>>
    Missed translations in: src/app.ts
    Missed static translations count: 1
    Missed dynamic translations count: 1
    Static keys:
    +---+----------+
    | # | Key      |
    +---+----------+
    | 0 | nav.home |
    +---+----------+
    Dynamic keys:
    +---+--------+
    | # | Key    |
    +---+--------+
    | 0 | item_* |
    +---+--------+
    ✘ Total missed static translations count: 1
    ✘ Total missed dynamic translations count: 1
    ");

    Ok(())
}

#[test]
fn test_missed_nothing_found() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"errors": {"E001": "Oops"}}"#),
        ("src/app.ts", "t(`errors.${code}`); t('errors.E001')"),
    ])?;

    let output = run(test.missed_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ No missed translations found\n");

    Ok(())
}

#[test]
fn test_missed_strip_key_prefix_and_ignore_paths() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".i18n-unused.json",
            r#"{ "stripKeyPrefix": "app.", "ignorePaths": ["generated"] }"#,
        ),
        ("locales/en.json", r#"{"home": "Home"}"#),
        ("src/app.ts", "t('app.home')"),
        ("generated/api.ts", "t('not.declared')"),
    ])?;

    let output = run(test.missed_command())?;

    assert_eq!(output.code, 0);

    Ok(())
}

#[test]
fn test_missed_custom_matcher() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".i18n-unused.json",
            r#"{ "translationKeyMatcher": "(?:^|\\W)(translate\\()" }"#,
        ),
        ("locales/en.json", "{}"),
        ("src/app.ts", "translate('a.b'); t('ignored')"),
    ])?;

    let mut cmd = test.missed_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, 1);
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value["totalStaticCount"], 1);
    assert_eq!(value["translations"][0]["staticKeys"][0], "a.b");

    Ok(())
}

#[test]
fn test_missed_invalid_matcher_is_error() -> Result<()> {
    let test = CliTest::with_files(&[
        (".i18n-unused.json", r#"{ "translationKeyMatcher": "t\\((" }"#),
        ("locales/en.json", "{}"),
    ])?;

    let output = run(test.missed_command())?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("translationKeyMatcher"));

    Ok(())
}
