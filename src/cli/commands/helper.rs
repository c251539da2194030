use std::fs;

use anyhow::{Context, Result};

use crate::{
    core::{FileTransform, ProjectContext, RunContext},
    issues::Issue,
};

/// Outcome of transforming every source file of a project.
pub struct TranslatedFiles {
    pub run: RunContext,
    /// Successfully transformed files, in scan order.
    pub files: Vec<(String, FileTransform)>,
    /// One issue per file that could not be transformed.
    pub errors: Vec<Issue>,
}

impl TranslatedFiles {
    pub fn template_count(&self) -> usize {
        self.files.iter().map(|(_, t)| t.extractions.len()).sum()
    }
}

/// Transform every scanned file. Files that fail keep nothing in the run.
pub fn translate_files(ctx: &ProjectContext) -> Result<TranslatedFiles> {
    let mut run = ctx.start_run();
    let mut files = Vec::new();
    let mut errors = Vec::new();

    for file_path in &ctx.files {
        let code = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read source file: {}", file_path))?;

        match run.transform_file(file_path, &code) {
            Ok(transformed) => {
                if ctx.verbose {
                    eprintln!(
                        "  {}: {} template(s)",
                        file_path,
                        transformed.extractions.len()
                    );
                }
                files.push((file_path.clone(), transformed));
            }
            Err(e) => {
                if ctx.verbose {
                    eprintln!("  {}: failed", e.file_path());
                }
                errors.push(Issue::from(e));
            }
        }
    }

    Ok(TranslatedFiles { run, files, errors })
}
