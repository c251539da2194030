use anyhow::Result;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{print_success, report},
};
use super::helper::translate_files;
use crate::{
    core::ProjectContext,
    issues::{Issue, MissingTranslationIssue},
};

/// Run the transform without writing and report what a build would leave untranslated.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.args.common, None)?;
    let translated = translate_files(&ctx)?;

    let mut issues = translated.errors;
    for (_, transformed) in &translated.files {
        issues.extend(
            transformed
                .extractions
                .iter()
                .filter(|e| e.lookup.not_found)
                .map(|e| {
                    Issue::MissingTranslation(MissingTranslationIssue {
                        context: e.context.clone(),
                        text: e.record.text.clone(),
                        translation_context: e.record.context.clone(),
                    })
                }),
        );
    }

    if issues.is_empty() {
        print_success(ctx.files.len());
        return Ok(ExitStatus::Success);
    }

    report(&issues);
    Ok(ExitStatus::Failure)
}
