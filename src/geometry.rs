//! Geometry operand values.

use serde::{Deserialize, Serialize};

use crate::error::{SpatialError, SpatialResult};

/// A literal geometry: well-known text plus its spatial reference.
///
/// Kept as a plain structured value rather than a string that smuggles an
/// SRID along; consumers that want the raw text call [`GeometryLiteral::wkt`].
/// The SRID is mandatory because every T-SQL geometry constructor requires
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryLiteral {
    wkt: String,
    srid: i32,
}

impl GeometryLiteral {
    pub fn new(wkt: impl Into<String>, srid: i32) -> Self {
        Self {
            wkt: wkt.into(),
            srid,
        }
    }

    /// The well-known-text representation.
    pub fn wkt(&self) -> &str {
        &self.wkt
    }

    /// The spatial reference identifier.
    pub fn srid(&self) -> i32 {
        self.srid
    }
}

/// The geometry side of a predicate's right-hand operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryOperand {
    /// A literal geometry, bound as a WKT parameter inside a
    /// `STGeomFromText` constructor call.
    Literal(GeometryLiteral),
    /// A pre-quoted column or expression reference, rendered verbatim
    /// with no bound parameter.
    Expression(String),
}

impl From<GeometryLiteral> for GeometryOperand {
    fn from(lit: GeometryLiteral) -> Self {
        Self::Literal(lit)
    }
}

/// A four-corner axis-aligned rectangle, as used by spatial index DDL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingExtent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingExtent {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Parse the envelope polygon text SQL Server returns for extent
    /// aggregates, for example `POLYGON ((0 0, 2 0, 2 3, 0 3, 0 0))`.
    ///
    /// Corner 0 is the minimum corner and corner 2 the maximum, which is
    /// how the engine orders envelope rings.
    pub fn from_envelope_wkt(poly: &str) -> SpatialResult<Self> {
        let malformed = || SpatialError::MalformedExtent(poly.to_string());

        let inner = poly
            .trim()
            .strip_prefix("POLYGON")
            .map(|rest| rest.trim_start())
            .and_then(|rest| rest.strip_prefix("(("))
            .and_then(|rest| rest.strip_suffix("))"))
            .ok_or_else(malformed)?;

        let corners: Vec<&str> = inner.split(',').map(str::trim).collect();
        if corners.len() < 3 {
            return Err(malformed());
        }

        let parse_corner = |corner: &str| -> SpatialResult<(f64, f64)> {
            let mut coords = corner.split_whitespace();
            let x = coords.next().and_then(|c| c.parse().ok());
            let y = coords.next().and_then(|c| c.parse().ok());
            match (x, y) {
                (Some(x), Some(y)) => Ok((x, y)),
                _ => Err(malformed()),
            }
        };

        let (xmin, ymin) = parse_corner(corners[0])?;
        let (xmax, ymax) = parse_corner(corners[2])?;
        Ok(Self::new(xmin, ymin, xmax, ymax))
    }
}

impl std::fmt::Display for BoundingExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}
