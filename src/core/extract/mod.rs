//! Extraction of translatable tagged templates from a parsed file.
//!
//! The visitor reacts to every `TaggedTpl` node swc hands it, in document order.
//! For each translatable one it produces an [`Extraction`]: the record that
//! feeds the end-of-run catalog merge, and the replacement text for the node.

pub mod visitor;

pub use visitor::{TaggedTemplateVisitor, classify_tag};

use crate::core::{LookupResult, SourceContext, TranslationKey};

/// One translatable template encountered during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// Raw template content (placeholders not normalized).
    pub text: String,
    pub context: String,
    /// True when the input catalog had no translation for `(text, context)`.
    pub not_found: bool,
}

impl ExtractionRecord {
    /// Catalog key for this record (placeholders normalized).
    pub fn key(&self) -> TranslationKey {
        TranslationKey::new(&self.text, self.context.clone())
    }
}

/// Replace the byte range `[start, end)` of a source buffer with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Everything the visitor learned about one translatable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub record: ExtractionRecord,
    pub lookup: LookupResult,
    pub replacement: Replacement,
    /// Where the tagged template starts.
    pub context: SourceContext,
}
