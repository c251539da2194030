//! Canonical translation keys and context resolution.
//!
//! A translatable tagged template comes in two shapes:
//!
//! - plain tag: `` t`Save` `` (default context)
//! - call tag: `` t("button")`Save` `` (context taken from the single string argument)
//!
//! The tag is classified once into a [`TagShape`] by the syntax adapter
//! (see `crate::core::extract`), and resolved here without touching the AST.

use thiserror::Error;

/// Context used when a tagged template carries no context argument.
pub const DEFAULT_CONTEXT: &str = "default";

/// The two-character sequence opening an interpolation placeholder in a template literal.
const PLACEHOLDER_OPEN: &str = "${";

/// Canonical placeholder opening used in catalog keys.
const CATALOG_PLACEHOLDER_OPEN: &str = "{";

/// A single argument of a call-form tag, as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextArg {
    /// Plain string literal: `t("button")`.
    Str(String),
    /// Anything else. Holds a short human-readable description of the argument kind.
    Other(&'static str),
}

/// Shape of a tagged template's tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagShape {
    /// Bare identifier matching the tag name: `` t`...` ``
    Plain,
    /// Call whose callee is the tag name: `` t(...)`...` ``
    Call(Vec<ContextArg>),
    /// Any other tag (member expressions, other identifiers, other callees).
    Other,
}

/// Fatal context resolution failures. Both abort the transform of the current file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Context argument must be a string literal.")]
    InvalidContextType {
        /// Description of the argument that was found instead.
        found: &'static str,
    },
    #[error("Can handle only 1 context argument.")]
    TooManyContextArguments {
        /// Number of arguments passed to the tag.
        count: usize,
    },
}

impl ResolveError {
    /// Additional detail for diagnostics.
    pub fn details(&self) -> String {
        match self {
            ResolveError::InvalidContextType { found } => {
                format!("found {}, expected a string literal", found)
            }
            ResolveError::TooManyContextArguments { count } => {
                format!("found {} arguments, expected at most 1", count)
            }
        }
    }
}

impl TagShape {
    /// Resolve the translation context for this tag.
    ///
    /// Returns `Ok(None)` when the tag is not translatable at all.
    pub fn resolve_context(&self) -> Result<Option<String>, ResolveError> {
        match self {
            TagShape::Other => Ok(None),
            TagShape::Plain => Ok(Some(DEFAULT_CONTEXT.to_string())),
            TagShape::Call(args) => match args.as_slice() {
                [] => Ok(Some(DEFAULT_CONTEXT.to_string())),
                [ContextArg::Str(context)] => Ok(Some(context.clone())),
                [ContextArg::Other(found)] => Err(ResolveError::InvalidContextType { found: *found }),
                _ => Err(ResolveError::TooManyContextArguments { count: args.len() }),
            },
        }
    }
}

/// Rewrite every `${` into `{`.
///
/// Literal substitution only: the closing `}` and the expression are left as they are.
pub fn normalize_placeholders(text: &str) -> String {
    text.replace(PLACEHOLDER_OPEN, CATALOG_PLACEHOLDER_OPEN)
}

/// Canonical `(text, context)` pair indexing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TranslationKey {
    /// Template content with placeholders normalized.
    pub text: String,
    pub context: String,
}

impl TranslationKey {
    /// Build a key from raw template content, normalizing its placeholders.
    pub fn new(raw_text: &str, context: impl Into<String>) -> Self {
        Self {
            text: normalize_placeholders(raw_text),
            context: context.into(),
        }
    }
}
