//! Intermediate representation consumed by the bridge generators
//!
//! One [`ParsedContents`] is produced per scanned source text and is the
//! sole contract between extraction and code generation. The types here
//! are designed for:
//!
//! 1. **Determinism**: `BTreeSet` for custom-type sets, so iteration and
//!    serialization order never depend on insertion order
//! 2. **Serialization**: full serde support, so generators and caches can
//!    pass the model around as plain data
//!
//! Generators branch on [`TypeSpec::kind`] and [`ImportSpec::kind`] to
//! decide how each declaration is re-emitted, and pass `definition` texts
//! through verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Declaration kinds
// ============================================================================

/// Kind of a scanned type declaration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TypeKind {
    /// `type Name = ...;`
    #[serde(rename = "type")]
    Alias,
    /// `interface Name { ... }`
    #[serde(rename = "interface")]
    Interface,
}

impl TypeKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alias => "type",
            Self::Interface => "interface",
        }
    }
}

/// Kind of a scanned import statement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// `import ... from '...'`
    Import,
    /// `const ... = require('...')`
    Require,
}

impl ImportKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Require => "require",
        }
    }
}

// ============================================================================
// Specs
// ============================================================================

/// A single function parameter, captured as verbatim source text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name; a destructuring pattern keeps its full source text
    pub name: String,

    /// Literal type annotation text, without the leading `:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,

    /// Literal default-value expression text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// An extracted function signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Function name; empty only for anonymous declarations
    pub name: String,

    /// Parameters in source order; duplicate names are kept as written
    pub params: Vec<ParamSpec>,

    /// Return type text, `"void"` when the annotation is absent
    pub return_type: String,

    /// Custom type names referenced anywhere in the signature
    pub custom_types: BTreeSet<String>,
}

/// A type alias or interface declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSpec {
    /// What kind of declaration this is
    pub kind: TypeKind,

    /// Declared name
    pub name: String,

    /// Whether the declaration carries a leading `export`
    pub is_exported: bool,

    /// Verbatim, newline-terminated slice of the normalized source
    pub definition: String,
}

/// An import or require statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportSpec {
    /// What kind of statement this is
    pub kind: ImportKind,

    /// Module path captured from the statement, if any
    pub from_path: Option<String>,

    /// Verbatim, newline-terminated slice of the normalized source
    pub definition: String,

    /// Local names of the statement's type-only bindings
    pub custom_types: BTreeSet<String>,
}

/// Everything extracted from one source text
///
/// Each sequence preserves encounter order. A fresh value is built per
/// scan; the extractor holds no state across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedContents {
    /// Exported function signatures
    pub functions: Vec<FunctionSpec>,

    /// Type alias and interface declarations
    pub types: Vec<TypeSpec>,

    /// Import and require statements
    pub imports: Vec<ImportSpec>,
}

impl ParsedContents {
    /// True when the scan recognized nothing
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.types.is_empty() && self.imports.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
