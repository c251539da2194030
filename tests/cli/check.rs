use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_reports_missing_translations() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "say(t`Hi`);\nsay(t(\"menu\")`Open`);\n",
    )?;
    test.write_file(
        "translations/input.json",
        r#"{ "Hi": { "default": "Bonjour" } }"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("warning: No translation for \"Open\"  missing-translation"));
    assert!(out.contains("src/app.js:2:5"));
    assert!(out.contains("= note: context: \"menu\""));
    assert!(!out.contains("\"Hi\""));
    assert!(out.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_check_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hi`;")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    assert!(!test.exists("dist"));
    assert!(!test.exists("translations/output.json"));

    Ok(())
}

#[test]
fn test_check_all_translated() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const A = () => <b>{t`Hi`}</b>;\n")?;
    test.write_file(
        "translations/input.json",
        r#"{ "Hi": { "default": "Salut" } }"#,
    )?;

    let output = test.check_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Checked 1 source file - no issues found"));

    Ok(())
}

#[test]
fn test_check_reports_invalid_context() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "const key = \"k\";\nt(key)`Hi`;\n")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("error: Context argument must be a string literal."));
    assert!(out.contains("found identifier, expected a string literal"));
    assert!(out.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_reports_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "const = t`Hi`;")?;
    test.write_file("src/fine.js", "t`Ok`;")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("parse-error"));
    assert!(out.contains("src/broken.js:1:"));
    assert!(out.contains("No translation for \"Ok\""));

    Ok(())
}

#[test]
fn test_check_ignores_test_files() -> Result<()> {
    let test = CliTest::with_file(
        ".taglinerc.json",
        r#"{ "ignoreTestFiles": true, "ignores": ["**/legacy/**"] }"#,
    )?;
    test.write_file("src/app.test.js", "t`Only in tests`;")?;
    test.write_file("src/legacy/old.js", "t`Old`;")?;
    test.write_file("src/app.js", "const a = 1;")?;

    let output = test.check_command().output()?;
    assert!(output.status.success(), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".taglinerc.json", r#"{ "tagName": "not valid" }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("tagName"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
