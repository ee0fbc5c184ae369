//! Spatial predicate translation for SQL Server.
//!
//! SQL Server expresses spatial predicates as method calls on the column
//! (`[geom].STContains(@p1) = 1`) rather than the function-call syntax most
//! engines use. This crate maps an abstract spatial predicate plus its
//! operands onto that surface: it produces the SQL fragment and the values
//! to bind, and leaves query assembly, execution and transactions to the
//! host.
//!
//! The three entry points mirror the three jobs a spatial backend has:
//! [`translate`] for filter conditions, [`introspect::infer_geometry_type`]
//! for reading a column's spatial type back out of the database, and
//! [`ddl::emit_spatial_ddl`] for the CHECK constraint and spatial index a
//! geometry column needs at creation time.

pub mod aggregate;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod geometry;
pub mod introspect;
pub mod measure;
pub mod predicate;
pub mod quoting;
pub mod translate;

pub use dialect::SpatialDialect;
pub use error::{SpatialError, SpatialResult};
pub use predicate::SpatialPredicate;
pub use translate::{translate, PredicateOperand, SqlParam, Translation};

pub mod prelude {
    pub use crate::aggregate::{aggregate_sql, SpatialAggregate};
    pub use crate::ddl::emit_spatial_ddl;
    pub use crate::dialect::SpatialDialect;
    pub use crate::error::{SpatialError, SpatialResult};
    pub use crate::geometry::{BoundingExtent, GeometryLiteral, GeometryOperand};
    pub use crate::introspect::{infer_geometry_type, FieldTypeInfo, QueryExecutor};
    pub use crate::measure::{DistanceOperand, DistanceValue, LinearUnit, Measure};
    pub use crate::predicate::SpatialPredicate;
    pub use crate::quoting::IdentifierQuoter;
    pub use crate::translate::{
        translate, translate_at, wkt_select, PredicateOperand, SqlParam, Translation,
    };
}
