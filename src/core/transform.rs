//! Per-file transform: parse, extract, splice, repeat.
//!
//! Replacing a tagged template copies its interpolations verbatim, so a
//! template nested inside one (`` t`a ${t`b`}` ``) only becomes reachable after
//! the outer one is rewritten. The file is re-parsed and visited again until a
//! pass finds nothing to translate. The final pass also checks that the
//! rewritten source still parses.

use thiserror::Error;

use crate::core::{
    Catalog, ResolveError, SourceContext, SourceLocation, TaggedTemplateVisitor, parse_source,
    extract::{Extraction, Replacement},
};

/// Upper bound on parse/extract/splice passes for one file.
pub const MAX_PASSES: usize = 16;

/// UTF-8 byte order mark. swc drops it from the parsed file, so spans are
/// relative to the text after it.
const BYTE_ORDER_MARK: &str = "\u{feff}";

/// Errors that abort the transform of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("{location}: {message}")]
    Parse {
        location: SourceLocation,
        message: String,
    },
    #[error("{}: {error}", .context.location)]
    Context {
        context: SourceContext,
        error: ResolveError,
    },
    #[error("{file_path}: still found translatable templates after {passes} passes")]
    TooManyPasses { file_path: String, passes: usize },
}

impl TransformError {
    pub fn file_path(&self) -> &str {
        match self {
            TransformError::Parse { location, .. } => &location.file_path,
            TransformError::Context { context, .. } => context.file_path(),
            TransformError::TooManyPasses { file_path, .. } => file_path,
        }
    }
}

/// Result of transforming one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransform {
    /// Source with every translatable template replaced.
    pub code: String,
    /// Extractions of all passes, in order.
    pub extractions: Vec<Extraction>,
}

impl FileTransform {
    pub fn is_changed(&self) -> bool {
        !self.extractions.is_empty()
    }
}

/// Transform one source file.
///
/// Locations of extractions found after the first pass refer to the rewritten source.
/// A leading byte order mark is kept in the output.
pub fn transform_source(
    code: &str,
    file_path: &str,
    tag_name: &str,
    input: &Catalog,
) -> Result<FileTransform, TransformError> {
    let (bom, body) = match code.strip_prefix(BYTE_ORDER_MARK) {
        Some(body) => (BYTE_ORDER_MARK, body),
        None => ("", code),
    };
    let mut code = body.to_string();
    let mut extractions = Vec::new();

    for _ in 0..MAX_PASSES {
        let parsed = parse_source(code.clone(), file_path)?;
        let found = TaggedTemplateVisitor::new(file_path, &parsed, &code, tag_name, input)
            .extract(&parsed.module)?;

        if found.is_empty() {
            return Ok(FileTransform {
                code: format!("{}{}", bom, code),
                extractions,
            });
        }

        code = apply_replacements(&code, found.iter().map(|e| &e.replacement));
        extractions.extend(found);
    }

    Err(TransformError::TooManyPasses {
        file_path: file_path.to_string(),
        passes: MAX_PASSES,
    })
}

/// Splice non-overlapping replacements into `code`.
pub fn apply_replacements<'r>(
    code: &str,
    replacements: impl IntoIterator<Item = &'r Replacement>,
) -> String {
    let mut sorted: Vec<&Replacement> = replacements.into_iter().collect();
    // Back to front so earlier offsets stay valid
    sorted.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = code.to_string();
    for replacement in sorted {
        result.replace_range(replacement.start..replacement.end, &replacement.text);
    }
    result
}
