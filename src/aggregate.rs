//! Spatial aggregate SQL.

use serde::{Deserialize, Serialize};

use crate::dialect::SpatialDialect;

/// The spatial aggregates SQL Server supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpatialAggregate {
    /// Collect geometries into one collection (`CollectionAggregate`).
    Collect,
    /// The envelope of a set of geometries (`EnvelopeAggregate`).
    Extent,
    /// The union of a set of geometries (`UnionAggregate`).
    Union,
}

impl SpatialAggregate {
    /// The T-SQL aggregate function name.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Collect => "CollectionAggregate",
            Self::Extent => "EnvelopeAggregate",
            Self::Union => "UnionAggregate",
        }
    }
}

/// Render a spatial aggregate over a pre-quoted field reference.
///
/// The aggregates are static members of the type namespace, and the result
/// is read back as text since the host cannot bind the engine's native
/// spatial types.
pub fn aggregate_sql(
    aggregate: SpatialAggregate,
    dialect: SpatialDialect,
    field_ref: &str,
) -> String {
    format!(
        "{}::{}({}).ToString()",
        dialect.namespace(),
        aggregate.function(),
        field_ref
    )
}
