//! Issue types produced by a translation run.
//!
//! Every issue is self-contained: it carries everything the reporter needs to
//! print it, so the core never formats output itself.

use enum_dispatch::enum_dispatch;

use crate::core::{ResolveError, SourceContext, SourceLocation, TransformError};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    InvalidContext,
    ParseError,
    NestingLimit,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::InvalidContext => write!(f, "invalid-context"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::NestingLimit => write!(f, "nesting-limit"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translatable template with no entry in the input catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub context: SourceContext,
    /// Raw template content.
    pub text: String,
    /// Translation context the lookup used.
    pub translation_context: String,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Call-form tag whose arguments cannot name a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidContextIssue {
    pub context: SourceContext,
    pub error: ResolveError,
}

impl InvalidContextIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::InvalidContext
    }
}

/// Source (or rewritten source) that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub location: SourceLocation,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// File whose templates kept producing new translatable templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingLimitIssue {
    pub file_path: String,
    pub passes: usize,
}

impl NestingLimitIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NestingLimit
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    InvalidContext(InvalidContextIssue),
    ParseError(ParseErrorIssue),
    NestingLimit(NestingLimitIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

impl From<TransformError> for Issue {
    fn from(error: TransformError) -> Self {
        match error {
            TransformError::Parse { location, message } => Issue::ParseError(ParseErrorIssue {
                location,
                error: message,
            }),
            TransformError::Context { context, error } => {
                Issue::InvalidContext(InvalidContextIssue { context, error })
            }
            TransformError::TooManyPasses { file_path, passes } => {
                Issue::NestingLimit(NestingLimitIssue { file_path, passes })
            }
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with the line for the code frame.
    Source(&'a SourceContext),
    /// Position without the source line.
    Position(&'a SourceLocation),
    /// File-level only.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::Position(loc) => loc.file_path.as_str(),
            ReportLocation::File { path } => *path,
        }
    }

    /// Line and column, `(0, 0)` for file-level locations.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::Position(loc) => (loc.line, loc.col),
            ReportLocation::File { .. } => (0, 0),
        }
    }

    pub fn source_line(&self) -> Option<&str> {
        match self {
            ReportLocation::Source(ctx) => Some(ctx.source_line.as_str()),
            _ => None,
        }
    }
}

/// Everything a reporter needs to render an issue.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    fn hint(&self) -> Option<String> {
        None
    }

    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("No translation for \"{}\"", self.text)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("context: \"{}\"", self.translation_context))
    }
}

impl Report for InvalidContextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.error.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("pass a single string literal, e.g. t(\"button\")`Save`".to_string())
    }

    fn details(&self) -> Option<String> {
        Some(self.error.details())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position(&self.location)
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for NestingLimitIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!(
            "Translatable templates remain after {} passes",
            self.passes
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("a translation probably contains its own tagged template".to_string())
    }
}
