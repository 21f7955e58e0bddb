//! Spec assembly: one pass over one source text
//!
//! Drives the declaration scanner over the normalized input and routes
//! each match to its typed record. Function headers are not analyzed one
//! by one: every header is appended, with a synthetic closing brace, to a
//! single compound fragment that is re-parsed once after the scan.

use crate::collector::collect_custom_types;
use crate::error::Result;
use crate::ir::{ImportSpec, ParsedContents, TypeSpec};
use crate::normalize::dedent;
use crate::scanner::{self, Declaration};
use crate::signature::function_specs;

/// Parse one source text into the extraction IR.
///
/// The input is normalized exactly once; every `definition` in the result
/// is an owned, newline-terminated slice of that normalized text, and the
/// three sequences preserve encounter order. Source that matches none of
/// the recognized forms contributes nothing.
pub fn parse_specs(contents: &str) -> Result<ParsedContents> {
    let normalized = dedent(contents);
    let mut types = Vec::new();
    let mut imports = Vec::new();
    let mut compound = String::new();

    for decl in scanner::scan(&normalized) {
        match decl {
            Declaration::FunctionHeader { text } => {
                // Headers arrive without bodies; close each one so the
                // compound fragment stays parseable on its own.
                compound.push_str(text.trim_end());
                compound.push_str("}\n");
            }
            Declaration::TypeDecl {
                kind,
                name,
                is_exported,
                text,
            } => {
                types.push(TypeSpec {
                    kind,
                    name: name.to_string(),
                    is_exported,
                    definition: text.to_string(),
                });
            }
            Declaration::ImportDecl { kind, path, text } => {
                imports.push(ImportSpec {
                    kind,
                    from_path: path.map(str::to_string),
                    definition: text.to_string(),
                    custom_types: collect_custom_types(text)?,
                });
            }
        }
    }

    Ok(ParsedContents {
        functions: function_specs(&compound, true)?,
        types,
        imports,
    })
}
