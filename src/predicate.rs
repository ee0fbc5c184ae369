//! The spatial predicate vocabulary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A spatial filter predicate, named after the ORM-style lookup it
/// implements.
///
/// The set is fixed at compile time; which predicates are actually
/// translatable depends on the dialect registry in [`crate::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialPredicate {
    /// Column spatially contains the operand (`STContains`)
    Contains,
    /// Column lies within the operand (`STWithin`)
    Within,
    /// Column intersects the operand (`STIntersects`)
    Intersects,
    /// Column and operand are disjoint (`STDisjoint`)
    Disjoint,
    /// Column and operand are spatially equal (`STEquals`)
    Equals,
    /// Column overlaps the operand (`STOverlaps`)
    Overlaps,
    /// Column touches the operand (`STTouches`)
    Touches,
    /// Column crosses the operand (`STCrosses`)
    Crosses,
    /// Column's bounding box contains the operand's (envelope-emulated)
    BboxContains,
    /// Column's bounding box overlaps the operand's (envelope-emulated)
    BboxOverlaps,
    /// Column's bounding box lies within the operand's (envelope-emulated)
    BboxContained,
    /// Distance to the operand is greater than a value
    DistanceGt,
    /// Distance to the operand is greater than or equal to a value
    DistanceGte,
    /// Distance to the operand is less than a value
    DistanceLt,
    /// Distance to the operand is less than or equal to a value
    DistanceLte,
    /// Column is (not) NULL; has no geometry semantics
    IsNull,
}

impl SpatialPredicate {
    /// The ORM lookup name this predicate answers to.
    pub fn lookup_name(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Within => "within",
            Self::Intersects => "intersects",
            Self::Disjoint => "disjoint",
            Self::Equals => "equals",
            Self::Overlaps => "overlaps",
            Self::Touches => "touches",
            Self::Crosses => "crosses",
            Self::BboxContains => "bbcontains",
            Self::BboxOverlaps => "bboverlaps",
            Self::BboxContained => "contained",
            Self::DistanceGt => "distance_gt",
            Self::DistanceGte => "distance_gte",
            Self::DistanceLt => "distance_lt",
            Self::DistanceLte => "distance_lte",
            Self::IsNull => "isnull",
        }
    }

    /// Whether this is one of the four distance-comparison predicates.
    pub fn is_distance(&self) -> bool {
        matches!(
            self,
            Self::DistanceGt | Self::DistanceGte | Self::DistanceLt | Self::DistanceLte
        )
    }

    /// Whether this predicate is emulated via envelope reduction.
    pub fn is_bounding_box(&self) -> bool {
        matches!(
            self,
            Self::BboxContains | Self::BboxOverlaps | Self::BboxContained
        )
    }

    /// All predicates, in lookup-name order.
    pub const ALL: [SpatialPredicate; 16] = [
        Self::Contains,
        Self::Within,
        Self::Intersects,
        Self::Disjoint,
        Self::Equals,
        Self::Overlaps,
        Self::Touches,
        Self::Crosses,
        Self::BboxContains,
        Self::BboxOverlaps,
        Self::BboxContained,
        Self::DistanceGt,
        Self::DistanceGte,
        Self::DistanceLt,
        Self::DistanceLte,
        Self::IsNull,
    ];
}

impl std::fmt::Display for SpatialPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.lookup_name())
    }
}

impl FromStr for SpatialPredicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|p| p.lookup_name() == s)
            .copied()
            .ok_or_else(|| format!("unknown spatial lookup: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_name_round_trip() {
        for pred in SpatialPredicate::ALL {
            assert_eq!(pred.lookup_name().parse::<SpatialPredicate>(), Ok(pred));
        }
        assert!("dwithin".parse::<SpatialPredicate>().is_err());
    }

    #[test]
    fn test_predicate_kinds() {
        assert!(SpatialPredicate::DistanceLte.is_distance());
        assert!(!SpatialPredicate::Contains.is_distance());
        assert!(SpatialPredicate::BboxOverlaps.is_bounding_box());
        assert!(!SpatialPredicate::Within.is_bounding_box());
    }
}
