//! Geometry column introspection.
//!
//! SQL Server's spatial column types carry no subtype, SRID or dimension of
//! their own; that information lives on the stored instances. Introspection
//! therefore samples a row and reads the metadata off the value, and only
//! when the table is empty falls back to scraping the CHECK constraint this
//! crate's own DDL pins the subtype with. The fallback is best effort: it
//! recovers the type name and nothing else.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SpatialError, SpatialResult};
use crate::quoting::IdentifierQuoter;
use crate::translate::SqlParam;

/// A cell of a row returned by the host's query executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Int(i64),
    Text(String),
}

impl SqlValue {
    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

/// Query execution supplied by the host.
///
/// Synchronous from this layer's point of view; timeouts and cancellation
/// belong to the implementor. Failures are surfaced immediately as
/// [`SpatialError::Executor`], never retried.
pub trait QueryExecutor {
    fn query(&mut self, sql: &str, params: &[SqlParam]) -> SpatialResult<Vec<Vec<SqlValue>>>;
}

/// The spatial type of a column, as far as it could be determined.
///
/// `srid` is omitted when it is the 4326 default and `dimension` when it is
/// the 2D default; on the constraint-scrape path both are unknown and
/// reported absent rather than guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeInfo {
    pub geometry_type: String,
    pub srid: Option<i32>,
    pub dimension: Option<i32>,
}

const DEFAULT_SRID: i64 = 4326;
const DEFAULT_DIMENSION: i64 = 2;

/// Determine the geometry type of `table`.`column`.
///
/// Tries a sampled row first, then the column's CHECK constraints, and
/// fails with [`SpatialError::Introspection`] when neither yields a type.
pub fn infer_geometry_type<E: QueryExecutor + ?Sized>(
    executor: &mut E,
    quoter: &dyn IdentifierQuoter,
    table: &str,
    column: &str,
) -> SpatialResult<FieldTypeInfo> {
    let qt = quoter.quote(table);
    let qc = quoter.quote(column);

    let sample_sql = format!(
        "SELECT TOP 1 {qc}.STGeometryType(), {qc}.STDimension(), {qc}.STSrid \
         FROM {qt} WHERE {qc} IS NOT NULL"
    );
    let rows = executor.query(&sample_sql, &[])?;

    if let Some(row) = rows.first() {
        return field_info_from_sample(row, table, column);
    }

    debug!(table, column, "no sample row, scanning check constraints");
    let constraint_sql = "SELECT cc.[CHECK_CLAUSE] \
         FROM [INFORMATION_SCHEMA].[CHECK_CONSTRAINTS] cc \
         JOIN [INFORMATION_SCHEMA].[CONSTRAINT_COLUMN_USAGE] ccu \
         ON ccu.[CONSTRAINT_NAME] = cc.[CONSTRAINT_NAME] \
         WHERE ccu.[TABLE_NAME] = @p1 AND ccu.[COLUMN_NAME] = @p2";
    let params = [
        SqlParam::Text(table.to_string()),
        SqlParam::Text(column.to_string()),
    ];
    let rows = executor.query(constraint_sql, &params)?;

    for row in &rows {
        let Some(clause) = row.first().and_then(SqlValue::as_text) else {
            continue;
        };
        if let Some(geometry_type) = scrape_constraint_clause(clause) {
            debug!(
                table,
                column, geometry_type, "type recovered from constraint text"
            );
            // The clause encodes the subtype only; SRID and dimension stay
            // unknown rather than defaulted.
            return Ok(FieldTypeInfo {
                geometry_type: geometry_type.to_string(),
                srid: None,
                dimension: None,
            });
        }
    }

    Err(SpatialError::Introspection(format!(
        "no sample rows and no usable check constraint for {table}.{column}"
    )))
}

fn field_info_from_sample(
    row: &[SqlValue],
    table: &str,
    column: &str,
) -> SpatialResult<FieldTypeInfo> {
    let malformed = || {
        SpatialError::Introspection(format!(
            "unexpected sample row shape for {table}.{column}"
        ))
    };

    let geometry_type = row
        .first()
        .and_then(SqlValue::as_text)
        .ok_or_else(malformed)?
        .to_string();
    let dimension = row.get(1).and_then(SqlValue::as_int).ok_or_else(malformed)?;
    let srid = row.get(2).and_then(SqlValue::as_int).ok_or_else(malformed)?;

    Ok(FieldTypeInfo {
        geometry_type,
        srid: (srid != DEFAULT_SRID).then_some(srid as i32),
        dimension: (dimension != DEFAULT_DIMENSION).then_some(dimension as i32),
    })
}

/// Extract the subtype name from a CHECK clause such as
/// `([geom].[STGeometryType]()='Point')`.
fn scrape_constraint_clause(clause: &str) -> Option<&str> {
    static TYPE_RE: OnceLock<Regex> = OnceLock::new();
    let re = TYPE_RE.get_or_init(|| {
        // Tolerates both the bracketed catalog spelling and bare
        // STGeometryType()='...' text.
        Regex::new(r"STGeometryType\]?\s*\(\s*\)\s*=\s*'(\w+)'").unwrap()
    });
    re.captures(clause)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
