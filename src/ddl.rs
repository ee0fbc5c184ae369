//! Constraint and spatial index DDL.
//!
//! Pure text generation: the host executes the statements, owns the
//! transaction, and deals with duplicate constraint or index names.

use crate::dialect::SpatialDialect;
use crate::error::{SpatialError, SpatialResult};
use crate::geometry::BoundingExtent;
use crate::quoting::IdentifierQuoter;

/// Emit the DDL a spatial column needs, CHECK constraint first.
///
/// The engine does not enforce a per-column geometry subtype, so a CHECK
/// constraint pinning `STGeometryType()` is always emitted (it is also what
/// introspection falls back to on empty tables). When `wants_index` is set a
/// spatial index statement follows; planar columns require the caller to
/// supply a bounding extent for the index grid, geodetic columns take none.
pub fn emit_spatial_ddl(
    quoter: &dyn IdentifierQuoter,
    table: &str,
    column: &str,
    geometry_type: &str,
    dialect: SpatialDialect,
    extent: Option<&BoundingExtent>,
    wants_index: bool,
) -> SpatialResult<Vec<String>> {
    let qt = quoter.quote(table);
    let qc = quoter.quote(column);

    let constraint_name = quoter.quote(&format!("{table}_{column}_type_ck"));
    let mut statements = vec![format!(
        "ALTER TABLE {qt} ADD CONSTRAINT {constraint_name} \
         CHECK ({qc}.STGeometryType() = '{}')",
        geometry_type.replace('\'', "''")
    )];

    if wants_index {
        let index_name = quoter.quote(&format!("{table}_{column}_sidx"));
        let statement = match dialect {
            SpatialDialect::Geometry => {
                let extent = extent.ok_or(SpatialError::MissingExtent)?;
                format!(
                    "CREATE SPATIAL INDEX {index_name} ON {qt} ({qc}) \
                     USING GEOMETRY_AUTO_GRID WITH (BOUNDING_BOX = {extent})"
                )
            }
            SpatialDialect::Geography => format!(
                "CREATE SPATIAL INDEX {index_name} ON {qt} ({qc}) \
                 USING GEOGRAPHY_AUTO_GRID"
            ),
        };
        statements.push(statement);
    }

    Ok(statements)
}
