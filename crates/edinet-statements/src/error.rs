//! Error types for statement normalization.

use thiserror::Error;

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Structural errors raised by the normalizer.
///
/// Field-level problems (missing keys, non-numeric strings) are not errors;
/// they surface as [`crate::FieldWarning`]s on the normalized record. An
/// error here means the input violated the documented contract outright.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The raw record was not a JSON object.
    #[error("raw statement record is not a JSON object (got {kind})")]
    NotAnObject {
        /// JSON type of the offending value ("array", "string", ...).
        kind: &'static str,
    },
}
