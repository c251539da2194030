//! Translation engine: key resolution, lookup, extraction and catalog merge.
//!
//! A run goes through three stages:
//! - Extraction: every source file is parsed and its translatable tagged
//!   templates are replaced with the translated template literal
//! - Accumulation: each replaced template leaves an [`ExtractionRecord`] on the
//!   [`RunContext`]
//! - Merge: at the end of the run the records are folded into the output catalog
//!
//! Failures come back as values and the CLI layer decides how to report them.
//! The only output from here is verbose-mode warnings on stderr, for catalogs
//! that fall back to empty and for paths the scanner cannot read.

pub mod catalog;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod lookup;
pub mod merge;
pub mod parser;
pub mod run;
pub mod source;
pub mod transform;

pub use catalog::{Catalog, CatalogWriter, ContextMap, load_catalog, try_load_catalog};
pub use context::ProjectContext;
pub use extract::{Extraction, ExtractionRecord, Replacement, TaggedTemplateVisitor};
pub use key::{
    ContextArg, DEFAULT_CONTEXT, ResolveError, TagShape, TranslationKey, normalize_placeholders,
};
pub use lookup::{LookupResult, lookup};
pub use merge::merge_records;
pub use parser::{ParsedSource, parse_source};
pub use run::{RunContext, TransformOptions};
pub use source::{SourceContext, SourceLocation};
pub use transform::{FileTransform, TransformError, transform_source};
