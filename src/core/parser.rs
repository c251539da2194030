//! Source parsing with swc.

use std::{path::Path, sync::Arc};

use swc_common::{BytePos, FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::{SourceLocation, TransformError};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Position of the first byte of the file in `source_map`.
    pub start_pos: BytePos,
}

/// Pick the parser syntax from the file extension.
///
/// `.ts`/`.mts`/`.cts` are parsed without JSX so that `<T>expr` casts keep working.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a source string into a module.
///
/// Recoverable syntax errors are treated as failures too: a file the parser
/// had to patch up is not safe to splice.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource, TransformError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let to_error = |error: swc_ecma_parser::error::Error| {
            let loc = source_map.lookup_char_pos(error.span().lo);
            TransformError::Parse {
                location: SourceLocation::new(file_path, loc.line, loc.col_display + 1),
                message: error.kind().msg().to_string(),
            }
        };

        let module = parser.parse_module().map_err(to_error)?;

        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(to_error(error));
        }

        Ok(ParsedSource {
            module,
            start_pos: source_file.start_pos,
            source_map: source_map.clone(),
        })
    })
}
