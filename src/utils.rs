//! Common utility functions shared across the codebase.

/// Checks if `name` can be used as a JavaScript identifier.
///
/// Covers the ASCII subset plus Unicode letters; reserved words are not rejected.
///
/// # Examples
///
/// ```
/// use tagline::utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("t"));
/// assert!(is_valid_identifier("__"));
/// assert!(is_valid_identifier("$t"));
/// assert!(is_valid_identifier("übersetze"));
/// assert!(!is_valid_identifier(""));
/// assert!(!is_valid_identifier("1t"));
/// assert!(!is_valid_identifier("t.raw"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first == '_' || first == '$' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}
