use crate::core::Catalog;

/// Result of looking up a template's text in the input catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Translated text, or the text itself when no translation exists.
    pub string: String,
    pub not_found: bool,
}

/// Look up `catalog[text][context]`.
///
/// Falls back to `text` itself when there is no entry. The missing-text prefix
/// is a catalog concern and is applied at merge time, not here.
pub fn lookup(text: &str, context: &str, catalog: &Catalog) -> LookupResult {
    match catalog.get(text).and_then(|contexts| contexts.get(context)) {
        Some(translation) => LookupResult {
            string: translation.clone(),
            not_found: false,
        },
        None => LookupResult {
            string: text.to_string(),
            not_found: true,
        },
    }
}
