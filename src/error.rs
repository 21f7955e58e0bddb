//! Error types for bridge-ast
//!
//! Most non-matches are silent omissions by design: source the scanner or
//! collector does not recognize is simply absent from the output. Errors
//! are reserved for the cases where no syntax tree can be built at all, or
//! where a reconstructed fragment turns out to be corrupt.

use thiserror::Error;

/// Errors from extraction operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The TypeScript grammar could not be loaded into a parser
    #[error("Failed to load TypeScript grammar: {0}")]
    Grammar(String),

    /// A reconstructed function fragment did not parse cleanly
    #[error("Malformed declaration fragment: {0}")]
    MalformedFragment(String),
}

/// Result type alias for ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;
