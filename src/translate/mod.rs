//! Spatial predicate to SQL fragment translation.
//!
//! The host's query compiler calls [`translate`] once per spatial filter
//! condition and splices the returned fragment and bound parameters into the
//! statement it is assembling. Fragments use positional `@pN` placeholders;
//! values are always bound, never interpolated.

pub mod registry;

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dialect::SpatialDialect;
use crate::error::{SpatialError, SpatialResult};
use crate::geometry::GeometryOperand;
use crate::measure::{DistanceOperand, ResolvedDistance};
use crate::predicate::SpatialPredicate;
pub use registry::EmissionStrategy;

/// A value to bind positionally alongside a translated fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlParam {
    /// A text value; geometry literals bind their WKT here.
    Text(String),
    /// A floating-point distance value.
    Float(f64),
    /// A decimal distance value.
    Decimal(Decimal),
}

/// A translated SQL fragment plus the parameters it binds, in placeholder
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Positional parameter collector.
///
/// Placeholders render as `@p1`, `@p2`, ... The starting index is
/// configurable so the host can splice a fragment into a statement that
/// already binds parameters.
#[derive(Debug)]
struct ParamContext {
    next: usize,
    params: Vec<SqlParam>,
}

impl ParamContext {
    fn starting_at(first: usize) -> Self {
        Self {
            next: first,
            params: Vec::new(),
        }
    }

    /// Add a value and return the placeholder for it.
    fn add(&mut self, value: SqlParam) -> String {
        let placeholder = format!("@p{}", self.next);
        self.next += 1;
        self.params.push(value);
        placeholder
    }
}

/// The right-hand operand of a spatial predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredicateOperand {
    /// A geometry, for the boolean and bounding-box predicates.
    Geometry(GeometryOperand),
    /// A geometry and a distance, for the distance-comparison predicates.
    Distance(GeometryOperand, DistanceOperand),
    /// Whether to test for NULL (`true`) or NOT NULL (`false`).
    IsNull(bool),
}

/// Translate one spatial filter condition into a SQL fragment.
///
/// `column_ref` must already be quoted by the host; this layer never quotes
/// identifiers. Parameters number from `@p1`; use [`translate_at`] to start
/// elsewhere.
pub fn translate(
    predicate: SpatialPredicate,
    dialect: SpatialDialect,
    column_ref: &str,
    operand: &PredicateOperand,
) -> SpatialResult<Translation> {
    translate_at(predicate, dialect, column_ref, operand, 1)
}

/// [`translate`] with an explicit first parameter index.
pub fn translate_at(
    predicate: SpatialPredicate,
    dialect: SpatialDialect,
    column_ref: &str,
    operand: &PredicateOperand,
    first_param: usize,
) -> SpatialResult<Translation> {
    // Nullability is a column-level property, not a spatial one: isnull
    // bypasses the registry and is available for every dialect.
    if predicate == SpatialPredicate::IsNull {
        let PredicateOperand::IsNull(is_null) = operand else {
            return Err(SpatialError::operand(
                "the isnull lookup takes a boolean operand",
            ));
        };
        return Ok(Translation {
            sql: format!(
                "{} IS {}NULL",
                column_ref,
                if *is_null { "" } else { "NOT " }
            ),
            params: Vec::new(),
        });
    }

    let strategy = EmissionStrategy::lookup(dialect, predicate)
        .ok_or(SpatialError::UnsupportedPredicate { predicate, dialect })?;

    let mut ctx = ParamContext::starting_at(first_param);
    let sql = match strategy {
        EmissionStrategy::BoolMethod { function } => {
            let geom = expect_geometry(predicate, operand)?;
            let operand_sql = geometry_operand_sql(geom, dialect, &mut ctx);
            format!("{}.{}({}) = 1", column_ref, function, operand_sql)
        }
        EmissionStrategy::BboxMethod { function } => {
            let geom = expect_geometry(predicate, operand)?;
            let operand_sql = geometry_operand_sql(geom, dialect, &mut ctx);
            format!(
                "{}.STEnvelope().{}({}.STEnvelope()) = 1",
                column_ref, function, operand_sql
            )
        }
        EmissionStrategy::DistanceComparison { operator } => {
            let PredicateOperand::Distance(geom, distance) = operand else {
                return Err(SpatialError::operand(format!(
                    "a (geometry, distance) pair is required for the '{}' lookup",
                    predicate
                )));
            };
            let operand_sql = geometry_operand_sql(geom, dialect, &mut ctx);
            let value_sql = match distance.resolve(dialect)? {
                ResolvedDistance::Float(v) => ctx.add(SqlParam::Float(v)),
                ResolvedDistance::Decimal(d) => ctx.add(SqlParam::Decimal(d)),
            };
            format!(
                "{}.STDistance({}) {} {}",
                column_ref, operand_sql, operator, value_sql
            )
        }
    };

    Ok(Translation {
        sql,
        params: ctx.params,
    })
}

/// `SELECT`-list wrapper that reads a spatial column back as WKT.
pub fn wkt_select(column_ref: &str) -> String {
    format!("{}.STAsText()", column_ref)
}

fn expect_geometry<'a>(
    predicate: SpatialPredicate,
    operand: &'a PredicateOperand,
) -> SpatialResult<&'a GeometryOperand> {
    match operand {
        PredicateOperand::Geometry(geom) => Ok(geom),
        _ => Err(SpatialError::operand(format!(
            "a geometry operand is required for the '{}' lookup",
            predicate
        ))),
    }
}

/// Render a geometry operand, binding literals as WKT parameters.
///
/// T-SQL requires the SRID argument on every constructor call, so it is
/// embedded in the placeholder expression; the WKT itself is always bound.
fn geometry_operand_sql(
    operand: &GeometryOperand,
    dialect: SpatialDialect,
    ctx: &mut ParamContext,
) -> String {
    match operand {
        GeometryOperand::Literal(lit) => {
            let placeholder = ctx.add(SqlParam::Text(lit.wkt().to_string()));
            format!(
                "{}::STGeomFromText({},{})",
                dialect.namespace(),
                placeholder,
                lit.srid()
            )
        }
        GeometryOperand::Expression(expr) => expr.clone(),
    }
}
