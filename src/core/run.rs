//! Per-run state threaded through every file transform and the final merge.

use std::path::Path;

use crate::core::{
    Catalog, ExtractionRecord, FileTransform, TransformError, load_catalog, merge_records,
    transform_source,
};

/// Options that shape a run's transform and merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Identifier marking translatable templates (`t` in `` t`Hello` ``).
    pub tag_name: String,
    /// Prefix stored in the output catalog for texts without a translation.
    pub missing_text: String,
}

/// State of one build run.
///
/// The input catalog is read-only. The output catalog is only read here; the
/// merged catalog returned by [`RunContext::finish`] is what gets persisted.
#[derive(Debug)]
pub struct RunContext {
    options: TransformOptions,
    input: Catalog,
    output: Catalog,
    records: Vec<ExtractionRecord>,
}

impl RunContext {
    pub fn new(options: TransformOptions, input: Catalog, output: Catalog) -> Self {
        Self {
            options,
            input,
            output,
            records: Vec::new(),
        }
    }

    /// Load both catalogs from disk. Missing or invalid files count as empty catalogs.
    pub fn load(
        options: TransformOptions,
        input_path: &Path,
        output_path: &Path,
        verbose: bool,
    ) -> Self {
        let input = load_catalog(input_path, verbose);
        let output = load_catalog(output_path, verbose);
        Self::new(options, input, output)
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn input(&self) -> &Catalog {
        &self.input
    }

    /// Records accumulated so far, in encounter order.
    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    /// Transform one file and accumulate its records.
    ///
    /// On error nothing from this file is accumulated.
    pub fn transform_file(
        &mut self,
        file_path: &str,
        code: &str,
    ) -> Result<FileTransform, TransformError> {
        let transformed = transform_source(code, file_path, &self.options.tag_name, &self.input)?;
        self.records
            .extend(transformed.extractions.iter().map(|e| e.record.clone()));
        Ok(transformed)
    }

    /// Merge the accumulated records into the output catalog.
    ///
    /// `None` when no translatable template was seen; the output catalog file
    /// must then be left alone.
    pub fn finish(&self) -> Option<Catalog> {
        merge_records(&self.output, &self.records, &self.options.missing_text)
    }
}
