use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_unused_reports_undeclared_usage() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "locales/en.json",
            r#"{"hello": "Hi", "bye": "Bye", "menu": {"title": "Menu"}}"#,
        ),
        ("src/app.ts", "t('hello');\nt(`menu.${name}`);\n"),
    ])?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, 1);
    insta::assert_snapshot!(output.stdout, @r"
    <<<==========================================================>>>
    Unused translations in: locales/en.json
    Unused translations count: 1
    +---+-------------+
    | # | Translation |
    +---+-------------+
    | 0 | bye         |
    +---+-------------+
    ✘ Total unused translations count: 1
    Can free up memory: ~0.00kb
    ");
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_unused_nothing_found() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"greeting_male": "Hello sir"}"#),
        ("src/app.vue", "<template>{{ $t('greeting') }}</template>"),
    ])?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ No unused translations found\n");

    Ok(())
}

#[test]
fn test_unused_config_exclude_key() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".i18n-unused.json",
            r#"{ "excludeKey": ["meta."], "srcPath": "src" }"#,
        ),
        (
            "locales/en.json",
            r#"{"meta": {"version": "1"}, "title": "Title"}"#,
        ),
        ("src/app.js", "i18n.t('title')"),
    ])?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ No unused translations found\n");

    Ok(())
}

#[test]
fn test_unused_yaml_locales() -> Result<()> {
    let test = CliTest::with_files(&[
        (".i18n-unused.json", r#"{ "localesExtensions": ["yml"] }"#),
        ("locales/en.yml", "nav:\n  home: Home\n  about: About\n"),
        ("src/app.tsx", "const label = t('nav.home');"),
    ])?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("| 0 | nav.about   |"));

    Ok(())
}

#[test]
fn test_unused_ignore_comments_flag() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"old": "Old"}"#),
        ("src/app.ts", "// t('old')\n"),
    ])?;

    let with_comments = run(test.unused_command())?;
    assert_eq!(with_comments.code, 0);

    let mut cmd = test.unused_command();
    cmd.arg("--ignore-comments");
    let without_comments = run(cmd)?;
    assert_eq!(without_comments.code, 1);
    assert!(without_comments.stdout.contains("| 0 | old         |"));

    Ok(())
}

#[test]
fn test_unused_json_format() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"a": "A", "b": "B"}"#),
        ("src/app.ts", "t('a')"),
    ])?;

    let mut cmd = test.unused_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, 1);
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value["totalCount"], 1);
    assert_eq!(value["translations"][0]["localePath"], "locales/en.json");
    assert_eq!(value["translations"][0]["keys"], serde_json::json!(["b"]));

    Ok(())
}

#[test]
fn test_unused_corrupt_locale_is_error() -> Result<()> {
    let test = CliTest::with_files(&[
        ("locales/en.json", r#"{"a": "#),
        ("src/app.ts", "t('a')"),
    ])?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, 2);
    assert!(output.stdout.is_empty());
    assert!(
        output
            .stderr
            .starts_with("Error: Failed to parse locale file locales/en.json")
    );

    Ok(())
}

#[test]
fn test_unused_missing_locales_dir() -> Result<()> {
    let test = CliTest::with_files(&[("src/app.ts", "t('a')")])?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, 2);
    assert_eq!(
        output.stderr,
        "Error: Locales directory does not exist: locales\n"
    );

    Ok(())
}

#[test]
fn test_unused_locales_path_override() -> Result<()> {
    let test = CliTest::with_files(&[
        ("i18n/en.json", r#"{"a": "A"}"#),
        ("src/app.ts", "t('a')"),
    ])?;

    let mut cmd = test.unused_command();
    cmd.args(["--locales-path", "i18n"]);
    let output = run(cmd)?;

    assert_eq!(output.code, 0);

    Ok(())
}
