//! Line-anchored declaration scanner
//!
//! The first extraction stage: one multi-line regex with five ordered
//! alternatives delimits raw declaration fragments in a single
//! left-to-right pass, resuming immediately after each match. Lines that
//! match no alternative are skipped without error: the scanner is an
//! under-approximation of a narrow declaration style, not a grammar.
//!
//! Function headers are captured without their bodies; the orchestrator
//! appends a synthetic empty body before structural re-parsing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::ir::{ImportKind, TypeKind};

/// The five recognized surface forms, in priority order. The pieces are
/// concatenated into one alternation so each alternative stays readable
/// next to the record it produces.
const DECLARATION_FORMS: [&str; 5] = [
    // 1. Exported function header, captured through its opening brace
    r"^export\s+function\s+\w+\s*\([^)]*\)\s*(?::\s*[^<\n]+)?\s+\{\n",
    // 2. Interface declaration, full body through the closing brace
    r"|^(?P<iface_export>export\s+)?interface\s+(?P<iface_name>\w+)\s*\{[\s\S]*?\n\}\n",
    // 3. Type alias, through the terminating semicolon
    r"|^(?P<alias_export>export\s+)?type\s+(?P<alias_name>\w+)\s*=\s*[\s\S]*?;\n",
    // 4. Static module import, capturing the module path
    r#"|^import\s+[\s\S]*?from\s*['"](?P<import_path>.*?)['"];?\n"#,
    // 5. Assignment-style dynamic require, capturing the module path
    r#"|^const[\s\S]*?require\(\s*['"](?P<require_path>.*?)['"]\s*\);?\n"#,
];

lazy_static! {
    static ref DECLARATION_RE: Regex =
        Regex::new(&format!("(?m){}", DECLARATION_FORMS.concat())).unwrap();
}

/// A single scanner match, borrowing from the normalized source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration<'a> {
    /// `export function` header text, body not included
    FunctionHeader { text: &'a str },

    /// Interface or type-alias declaration
    TypeDecl {
        kind: TypeKind,
        name: &'a str,
        is_exported: bool,
        text: &'a str,
    },

    /// Import or require statement
    ImportDecl {
        kind: ImportKind,
        path: Option<&'a str>,
        text: &'a str,
    },
}

impl<'a> Declaration<'a> {
    /// The full matched text: an exact, newline-terminated slice of the
    /// scanned source
    pub fn text(&self) -> &'a str {
        match self {
            Self::FunctionHeader { text }
            | Self::TypeDecl { text, .. }
            | Self::ImportDecl { text, .. } => *text,
        }
    }
}

/// Scan normalized source text, yielding declarations in source order.
///
/// The input is expected to be dedented already; all five alternatives
/// anchor at line boundaries.
pub fn scan<'a>(source: &'a str) -> impl Iterator<Item = Declaration<'a>> + 'a {
    DECLARATION_RE.captures_iter(source).map(|caps| {
        let text = caps.get(0).map_or("", |m| m.as_str());
        if let Some(name) = caps.name("iface_name") {
            Declaration::TypeDecl {
                kind: TypeKind::Interface,
                name: name.as_str(),
                is_exported: captured_export(&caps, "iface_export"),
                text,
            }
        } else if let Some(name) = caps.name("alias_name") {
            Declaration::TypeDecl {
                kind: TypeKind::Alias,
                name: name.as_str(),
                is_exported: captured_export(&caps, "alias_export"),
                text,
            }
        } else if let Some(path) = caps.name("import_path") {
            Declaration::ImportDecl {
                kind: ImportKind::Import,
                path: Some(path.as_str()),
                text,
            }
        } else if let Some(path) = caps.name("require_path") {
            Declaration::ImportDecl {
                kind: ImportKind::Require,
                path: Some(path.as_str()),
                text,
            }
        } else {
            Declaration::FunctionHeader { text }
        }
    })
}

/// True iff the named group captured a leading `export` token
fn captured_export(caps: &regex::Captures, group: &str) -> bool {
    caps.name(group)
        .map_or(false, |m| m.as_str().trim() == "export")
}
