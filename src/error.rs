//! Error types for spatial translation.

use thiserror::Error;

use crate::dialect::SpatialDialect;
use crate::predicate::SpatialPredicate;

/// The main error type for spatial translation operations.
///
/// Every variant is permanent: nothing here is worth retrying. Translation
/// errors surface at query-construction time, before any database round-trip.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The predicate is not registered for the given dialect.
    #[error("lookup '{predicate}' is not supported for {dialect} columns")]
    UnsupportedPredicate {
        predicate: SpatialPredicate,
        dialect: SpatialDialect,
    },

    /// The operand shape or type does not match what the predicate expects.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// A distance value's unit is incompatible with the column's
    /// coordinate system.
    #[error("unit mismatch: {0}")]
    UnitMismatch(String),

    /// The geometry type of a column could not be determined from either
    /// row sampling or constraint text.
    #[error("geometry type could not be determined: {0}")]
    Introspection(String),

    /// The host's query executor reported a failure.
    #[error("executor error: {0}")]
    Executor(String),

    /// A spatial index was requested on a planar column without a
    /// bounding extent.
    #[error("a spatial index on a geometry column requires a bounding extent")]
    MissingExtent,

    /// Envelope text returned by the database could not be parsed.
    #[error("malformed extent: {0}")]
    MalformedExtent(String),
}

impl SpatialError {
    /// Create an invalid-operand error.
    pub fn operand(message: impl Into<String>) -> Self {
        Self::InvalidOperand(message.into())
    }

    /// Create a unit-mismatch error.
    pub fn unit(message: impl Into<String>) -> Self {
        Self::UnitMismatch(message.into())
    }
}

/// Result type alias for spatial translation operations.
pub type SpatialResult<T> = Result<T, SpatialError>;
