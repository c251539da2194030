use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{Callee, Expr, ExprOrSpread, Lit, Module, TaggedTpl};
use swc_ecma_visit::{Visit, VisitWith};

use super::{Extraction, ExtractionRecord, Replacement};
use crate::core::{
    Catalog, ContextArg, ParsedSource, SourceContext, SourceLocation, TagShape, TransformError,
    lookup,
};

/// Template literals are always delimited by backticks.
const TEMPLATE_DELIMITER: char = '`';

/// Classify a tagged template's tag against the configured tag name.
///
/// Parentheses around the tag or a context argument are ignored, so
/// `` (t)`x` `` and `` t(("ctx"))`x` `` behave like their bare forms.
pub fn classify_tag(tag: &Expr, tag_name: &str) -> TagShape {
    match unwrap_parens(tag) {
        Expr::Ident(ident) if ident.sym.as_str() == tag_name => TagShape::Plain,
        Expr::Call(call) => {
            if let Callee::Expr(callee) = &call.callee
                && let Expr::Ident(ident) = unwrap_parens(callee)
                && ident.sym.as_str() == tag_name
            {
                TagShape::Call(call.args.iter().map(context_arg).collect())
            } else {
                TagShape::Other
            }
        }
        _ => TagShape::Other,
    }
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

fn context_arg(arg: &ExprOrSpread) -> ContextArg {
    if arg.spread.is_some() {
        return ContextArg::Other("spread argument");
    }

    match unwrap_parens(&arg.expr) {
        Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
            Some(value) => ContextArg::Str(value.to_string()),
            None => ContextArg::Other("string literal with lone surrogates"),
        },
        other => ContextArg::Other(describe_expr(other)),
    }
}

fn describe_expr(expr: &Expr) -> &'static str {
    match expr {
        Expr::Lit(Lit::Num(_)) => "numeric literal",
        Expr::Lit(Lit::BigInt(_)) => "bigint literal",
        Expr::Lit(Lit::Bool(_)) => "boolean literal",
        Expr::Lit(Lit::Null(_)) => "null",
        Expr::Lit(Lit::Regex(_)) => "regular expression",
        Expr::Lit(_) => "literal",
        Expr::Tpl(_) => "template literal",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::Ident(_) => "identifier",
        Expr::Member(_) => "member expression",
        Expr::Call(_) => "call expression",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        _ => "expression",
    }
}

/// Collects translatable tagged templates from one parsed file.
///
/// A matched node's children are not visited: templates nested inside its
/// interpolations end up in the replacement text and are picked up by the
/// next pass over the rewritten source (see `crate::core::transform`).
///
/// The first context error stops extraction for the whole file.
pub struct TaggedTemplateVisitor<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    start_pos: BytePos,
    code: &'a str,
    tag_name: &'a str,
    input: &'a Catalog,
    extractions: Vec<Extraction>,
    error: Option<TransformError>,
}

impl<'a> TaggedTemplateVisitor<'a> {
    pub fn new(
        file_path: &'a str,
        parsed: &'a ParsedSource,
        code: &'a str,
        tag_name: &'a str,
        input: &'a Catalog,
    ) -> Self {
        Self {
            file_path,
            source_map: &parsed.source_map,
            start_pos: parsed.start_pos,
            code,
            tag_name,
            input,
            extractions: Vec::new(),
            error: None,
        }
    }

    /// Visit `module` and return the extractions in document order.
    pub fn extract(mut self, module: &Module) -> Result<Vec<Extraction>, TransformError> {
        module.visit_with(&mut self);
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.extractions),
        }
    }

    /// Byte offset of `pos` in `code`.
    fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.start_pos.0) as usize
    }

    fn source_context(&self, pos: BytePos) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(pos);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }

    fn extract_node(&mut self, node: &TaggedTpl, context: String) {
        // Template content without the enclosing backticks
        let tpl_start = self.offset(node.tpl.span.lo);
        let tpl_end = self.offset(node.tpl.span.hi);
        let Some(text) = self.code.get(tpl_start + 1..tpl_end.saturating_sub(1)) else {
            return;
        };

        let result = lookup(text, &context, self.input);

        let replacement = Replacement {
            start: self.offset(node.span.lo),
            end: self.offset(node.span.hi),
            text: format!(
                "{}{}{}",
                TEMPLATE_DELIMITER, result.string, TEMPLATE_DELIMITER
            ),
        };

        self.extractions.push(Extraction {
            record: ExtractionRecord {
                text: text.to_string(),
                context,
                not_found: result.not_found,
            },
            lookup: result,
            replacement,
            context: self.source_context(node.span.lo),
        });
    }
}

impl Visit for TaggedTemplateVisitor<'_> {
    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        if self.error.is_some() {
            return;
        }

        match classify_tag(&node.tag, self.tag_name).resolve_context() {
            Ok(Some(context)) => self.extract_node(node, context),
            Ok(None) => node.visit_children_with(self),
            Err(error) => {
                self.error = Some(TransformError::Context {
                    context: self.source_context(node.span.lo),
                    error,
                });
            }
        }
    }
}
