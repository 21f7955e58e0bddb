//! bridge-ast: TypeScript declaration extraction for bridge codegen
//!
//! This crate is the extraction core of a cross-process bridge generator.
//! It scans TypeScript source text and produces a structured model of
//! three declaration kinds (functions, type declarations, and import
//! statements), each enriched with the custom (non-builtin) type names
//! referenced in its signature. Downstream generators consume that model
//! to re-emit the declarations on the far side of a process boundary.
//!
//! # Design: two passes, one fragment contract
//!
//! Extraction is split into two independently testable stages:
//!
//! 1. A cheap, line-anchored regex scan ([`scanner`]) that delimits raw
//!    declaration fragments while ignoring everything else. The scanner
//!    knows five surface forms and silently skips the rest; it is an
//!    intentional under-approximation, not a grammar.
//! 2. An exact Tree-sitter walk ([`collector`], [`signature`]) over each
//!    isolated fragment that recovers the structure a textual scan cannot
//!    see: generics, destructuring patterns, union and intersection
//!    members, type-only imports.
//!
//! The stages meet at an explicit fragment contract: matched function
//! headers are made self-contained by appending a synthetic empty body
//! before re-parsing.
//!
//! # Example
//!
//! ```rust
//! use bridge_ast::parse_specs;
//!
//! let contents = parse_specs(
//!     r#"
//!     import type { Query } from "./ipc";
//!
//!     export function runQuery(q: Query): number {
//!         return 0;
//!     }
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(contents.functions[0].name, "runQuery");
//! assert!(contents.functions[0].custom_types.contains("Query"));
//! assert!(contents.imports[0].custom_types.contains("Query"));
//! ```

pub mod collector;
pub mod error;
pub mod ir;
pub mod normalize;
pub mod parser;
pub mod scanner;
pub mod signature;
mod syntax;

pub use collector::{collect_custom_types, is_builtin_type};
pub use error::{ExtractError, Result};
pub use ir::{
    FunctionSpec, ImportKind, ImportSpec, ParamSpec, ParsedContents, TypeKind, TypeSpec,
};
pub use normalize::dedent;
pub use parser::parse_specs;
pub use signature::function_specs;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
