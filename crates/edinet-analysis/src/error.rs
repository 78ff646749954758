//! Error types for analysis operations.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur during analysis operations.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The raw statement record was structurally invalid.
    #[error(transparent)]
    Normalize(#[from] edinet_statements::NormalizeError),

    /// A comparison was requested for an empty company list.
    #[error("comparison requires at least one company")]
    EmptyComparison,
}
