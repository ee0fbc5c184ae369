//! The two SQL Server spatial type families.

use serde::{Deserialize, Serialize};

/// The spatial data type family of a column.
///
/// SQL Server namespaces its spatial constructors and aggregates by type
/// family, so the dialect decides the `geometry::`/`geography::` prefix as
/// well as which predicates are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialDialect {
    /// Planar, Cartesian coordinates.
    Geometry,
    /// Geodetic, ellipsoidal coordinates in angular units.
    Geography,
}

impl SpatialDialect {
    /// The T-SQL type namespace, used for constructor calls
    /// (`geometry::STGeomFromText(...)`) and aggregates.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Geometry => "geometry",
            Self::Geography => "geography",
        }
    }

    /// Whether columns of this family are measured in angular units.
    pub fn is_geodetic(&self) -> bool {
        matches!(self, Self::Geography)
    }
}

impl Default for SpatialDialect {
    fn default() -> Self {
        Self::Geometry
    }
}

impl std::fmt::Display for SpatialDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.namespace())
    }
}
