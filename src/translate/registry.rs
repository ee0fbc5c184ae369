//! The predicate registry: which emission strategy serves a predicate in a
//! given dialect.

use crate::dialect::SpatialDialect;
use crate::predicate::SpatialPredicate;

/// How a `<column> <predicate> <operand>` triple renders as T-SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionStrategy {
    /// `<col>.<Fn>(<operand>) = 1`
    ///
    /// SQL Server's boolean spatial methods return a bit, not a boolean
    /// expression, so the result is coerced with `= 1`.
    BoolMethod { function: &'static str },

    /// `<col>.STEnvelope().<Fn>(<operand>.STEnvelope()) = 1`
    ///
    /// The engine has no native bounding-box predicate family; both
    /// operands are first reduced to their envelopes. Precision is at
    /// rectangle granularity, not exact bbox topology.
    BboxMethod { function: &'static str },

    /// `<col>.STDistance(<operand>) <op> <value>`
    DistanceComparison { operator: &'static str },
}

impl EmissionStrategy {
    /// Look up the strategy registered for a predicate in a dialect.
    ///
    /// The table is fixed at compile time. Geography registers the six
    /// boolean methods defined on the ellipsoid plus the distance family;
    /// `STTouches`/`STCrosses` and the envelope emulation exist only for
    /// planar geometry. `isnull` is handled before the registry and never
    /// appears here.
    pub fn lookup(dialect: SpatialDialect, predicate: SpatialPredicate) -> Option<Self> {
        use SpatialDialect::*;
        use SpatialPredicate::*;

        let method = |function| Some(Self::BoolMethod { function });
        let bbox = |function| Some(Self::BboxMethod { function });
        let distance = |operator| Some(Self::DistanceComparison { operator });

        match (dialect, predicate) {
            (_, Contains) => method("STContains"),
            (_, Within) => method("STWithin"),
            (_, Intersects) => method("STIntersects"),
            (_, Disjoint) => method("STDisjoint"),
            (_, Equals) => method("STEquals"),
            (_, Overlaps) => method("STOverlaps"),
            (Geometry, Touches) => method("STTouches"),
            (Geometry, Crosses) => method("STCrosses"),

            (Geometry, BboxContains) => bbox("STContains"),
            (Geometry, BboxOverlaps) => bbox("STOverlaps"),
            (Geometry, BboxContained) => bbox("STWithin"),

            (_, DistanceGt) => distance(">"),
            (_, DistanceGte) => distance(">="),
            (_, DistanceLt) => distance("<"),
            (_, DistanceLte) => distance("<="),

            _ => None,
        }
    }
}
