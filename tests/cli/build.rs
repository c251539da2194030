use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_build_translates_and_merges() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "say(t`Hi`);\nsay(t(\"button\")`Save ${n}`);\n",
    )?;
    test.write_file(
        "translations/input.json",
        r#"{ "Hi": { "default": "Bonjour" } }"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Translated 2 templates in 1 file"));

    assert_eq!(
        test.read_file("dist/src/app.js")?,
        "say(`Bonjour`);\nsay(`Save ${n}`);\n"
    );
    assert_snapshot!(test.read_file("translations/output.json")?, @r#"
    {
      "Hi": {
        "default": "Hi"
      },
      "Save {n}": {
        "button": "MISSING: Save {n}"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_build_keeps_prior_catalog_entries() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t(\"button\")`Hello`;")?;
    test.write_file(
        "translations/output.json",
        r#"{ "Old": { "default": "Old" }, "Hello": { "label": "Hello" } }"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.read_file("translations/output.json")?, @r#"
    {
      "Hello": {
        "button": "MISSING: Hello",
        "label": "Hello"
      },
      "Old": {
        "default": "Old"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_build_without_templates_leaves_catalog_alone() -> Result<()> {
    let catalog = r#"{"keep":{"default":"as is"}}"#;
    let test = CliTest::with_file("src/plain.js", "const a = `not tagged`;\n")?;
    test.write_file("translations/output.json", catalog)?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("translations/output.json")?, catalog);
    assert_eq!(
        test.read_file("dist/src/plain.js")?,
        "const a = `not tagged`;\n"
    );

    Ok(())
}

#[test]
fn test_build_aborts_on_invalid_context() -> Result<()> {
    let test = CliTest::with_file("src/good.js", "t`Fine`;")?;
    test.write_file("src/bad.js", "const x = t(42)`Broken`;")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let out = stdout(&output);
    assert!(out.contains("Context argument must be a string literal."));
    assert!(out.contains("invalid-context"));
    assert!(out.contains("src/bad.js:1:11"));
    assert!(stderr(&output).contains("Build aborted"));

    assert!(!test.exists("dist"));
    assert!(!test.exists("translations/output.json"));

    Ok(())
}

#[test]
fn test_build_aborts_on_too_many_context_arguments() -> Result<()> {
    let test = CliTest::with_file("src/bad.js", "t(\"a\", \"b\")`Two`;")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("Can handle only 1 context argument."));
    assert!(!test.exists("dist"));

    Ok(())
}

#[test]
fn test_build_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hi`;")?;

    let output = test.build_command().arg("--dry-run").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("dry run"));

    assert!(!test.exists("dist"));
    assert!(!test.exists("translations/output.json"));

    Ok(())
}

#[test]
fn test_build_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const s: string = __`Hi`;\nt`Untouched`;\n")?;

    let output = test
        .build_command()
        .args(["--tag-name", "__"])
        .args(["--out-dir", "out"])
        .args(["--missing-text", "TODO "])
        .args(["--translations-output", "i18n/catalog.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("out/src/app.ts")?,
        "const s: string = `Hi`;\nt`Untouched`;\n"
    );
    assert_snapshot!(test.read_file("i18n/catalog.json")?, @r#"
    {
      "Hi": {
        "default": "TODO Hi"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_build_reads_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".taglinerc.json",
        r#"{
          "tagName": "tr",
          "translationsInput": "./i18n/fr.json",
          "translationsOutput": "./i18n/all.json",
          "includes": ["app"],
          "outDir": "./build"
      }"#,
    )?;
    test.write_file("app/page.jsx", "const el = <p>{tr`Welcome`}</p>;\n")?;
    test.write_file("i18n/fr.json", r#"{ "Welcome": { "default": "Bienvenue" } }"#)?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("build/app/page.jsx")?,
        "const el = <p>{`Bienvenue`}</p>;\n"
    );
    assert_snapshot!(test.read_file("i18n/all.json")?, @r#"
    {
      "Welcome": {
        "default": "Welcome"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_build_with_invalid_input_catalog() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hi`;")?;
    test.write_file("translations/input.json", r#"{ "Hi": "not an object" }"#)?;

    let output = test.build_command().arg("-v").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("using an empty catalog"));

    assert_eq!(test.read_file("dist/src/app.js")?, "`Hi`;");
    assert!(test.read_file("translations/output.json")?.contains("MISSING: Hi"));

    Ok(())
}

#[test]
fn test_build_nested_templates() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t`Hello ${t`World`}`;")?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("dist/src/app.js")?, "`Hello ${`World`}`;");
    assert_snapshot!(test.read_file("translations/output.json")?, @r#"
    {
      "Hello {t`World`}": {
        "default": "MISSING: Hello {t`World`}"
      },
      "World": {
        "default": "MISSING: World"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_build_keeps_byte_order_mark() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "\u{feff}const a = t`Hi`;\n")?;
    test.write_file(
        "translations/input.json",
        r#"{ "Hi": { "default": "Bonjour" } }"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stdout: {}", stdout(&output));

    assert_eq!(
        test.read_file("dist/src/app.js")?,
        "\u{feff}const a = `Bonjour`;\n"
    );

    Ok(())
}
