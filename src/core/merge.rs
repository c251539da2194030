//! End-of-run fold of extraction records into the output catalog.

use crate::core::{Catalog, ExtractionRecord, TranslationKey};

/// Fold `records` into a copy of `output`.
///
/// Returns `None` when there is nothing to merge, in which case the output
/// catalog must not be rewritten.
///
/// Every record sets exactly one `(text, context)` entry; other contexts of the
/// same text are kept. The stored value is the normalized text, prefixed with
/// `missing_text` when the input catalog had no translation for it.
pub fn merge_records(
    output: &Catalog,
    records: &[ExtractionRecord],
    missing_text: &str,
) -> Option<Catalog> {
    if records.is_empty() {
        return None;
    }

    let mut catalog = output.clone();

    for record in records {
        let TranslationKey { text, context } = record.key();
        let value = if record.not_found {
            format!("{}{}", missing_text, text)
        } else {
            text.clone()
        };

        catalog.entry(text).or_default().insert(context, value);
    }

    Some(catalog)
}
