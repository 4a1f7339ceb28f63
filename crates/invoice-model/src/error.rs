use thiserror::Error;

use crate::field::CanonicalField;

/// Structural problems in a raw extraction.
///
/// These are contract breaches by the upstream OCR producer, surfaced as
/// hard errors before mapping runs. Data-quality problems never take this
/// path; they become diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    #[error("raw keys '{first}' and '{second}' are indistinguishable after normalization")]
    AmbiguousKey { first: String, second: String },
    #[error("confidence score is not a finite number")]
    NonFiniteConfidence,
}

/// Invalid alias table configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AliasTableError {
    #[error("'{name}' is not a canonical field")]
    UnknownField { name: String },
    #[error("{field} has no usable aliases")]
    EmptyAliasList { field: CanonicalField },
    #[error("alias '{alias}' is claimed by both {first} and {second}")]
    OverlappingAlias {
        alias: String,
        first: CanonicalField,
        second: CanonicalField,
    },
}
