use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::BuildCommand,
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK, plural, report},
};
use super::helper::translate_files;
use crate::core::{CatalogWriter, ProjectContext};

/// Translate every source file into the output directory and merge the catalog.
///
/// A single failing file aborts the build before anything is written.
pub fn build(cmd: BuildCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = ProjectContext::new(&args.common, args.out_dir.as_deref())?;
    let translated = translate_files(&ctx)?;

    if !translated.errors.is_empty() {
        report(&translated.errors);
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            "Build aborted, no files were written".red()
        );
        return Ok(ExitStatus::Error);
    }

    let catalog = translated.run.finish();
    let missing = translated
        .run
        .records()
        .iter()
        .filter(|r| r.not_found)
        .count();

    if !args.dry_run {
        for (file_path, transformed) in &translated.files {
            let out_path = ctx.output_path(file_path)?;
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&out_path, &transformed.code)
                .with_context(|| format!("Failed to write file: {}", out_path.display()))?;
        }

        if let Some(catalog) = &catalog {
            CatalogWriter::new(&ctx.translations_output()).save(catalog)?;
        }
    }

    let template_count = translated.template_count();
    let file_count = translated.files.len();
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Translated {} {} in {} {}",
            template_count,
            plural(template_count, "template", "templates"),
            file_count,
            plural(file_count, "file", "files")
        )
        .green()
    );
    if missing > 0 {
        println!(
            "  {} {} without translation",
            missing.to_string().yellow(),
            plural(missing, "text", "texts")
        );
    }

    if args.dry_run {
        println!("{} dry run, nothing was written", "note:".bold());
    } else {
        println!("  wrote {}", ctx.out_dir().display());
        if catalog.is_some() {
            println!("  updated {}", ctx.translations_output().display());
        }
    }

    Ok(ExitStatus::Success)
}
