//! Per-dialect registration and structural fragment properties.

use super::{distance_operand, point_operand};
use crate::dialect::SpatialDialect;
use crate::error::SpatialError;
use crate::predicate::SpatialPredicate;
use crate::translate::{translate, EmissionStrategy, PredicateOperand};

fn operand_for(predicate: SpatialPredicate) -> PredicateOperand {
    if predicate == SpatialPredicate::IsNull {
        PredicateOperand::IsNull(true)
    } else if predicate.is_distance() {
        distance_operand(5.0)
    } else {
        point_operand()
    }
}

fn vendor_function(strategy: EmissionStrategy) -> &'static str {
    match strategy {
        EmissionStrategy::BoolMethod { function } => function,
        EmissionStrategy::BboxMethod { function } => function,
        EmissionStrategy::DistanceComparison { .. } => "STDistance",
    }
}

fn parens_balanced(sql: &str) -> bool {
    let mut depth: i32 = 0;
    for c in sql.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

#[test]
fn test_registered_predicates_render_function_once_and_balanced() {
    for dialect in [SpatialDialect::Geometry, SpatialDialect::Geography] {
        for predicate in SpatialPredicate::ALL {
            let Some(strategy) = EmissionStrategy::lookup(dialect, predicate) else {
                continue;
            };
            let t = translate(predicate, dialect, "[t].[geom]", &operand_for(predicate))
                .unwrap_or_else(|e| panic!("{dialect}/{predicate}: {e}"));
            let function = vendor_function(strategy);
            assert_eq!(
                t.sql.matches(function).count(),
                1,
                "{dialect}/{predicate}: {}",
                t.sql
            );
            assert!(parens_balanced(&t.sql), "{dialect}/{predicate}: {}", t.sql);
        }
    }
}

#[test]
fn test_geography_registry_is_a_subset() {
    let geography_only: Vec<SpatialPredicate> = SpatialPredicate::ALL
        .into_iter()
        .filter(|p| {
            EmissionStrategy::lookup(SpatialDialect::Geography, *p).is_some()
                && EmissionStrategy::lookup(SpatialDialect::Geometry, *p).is_none()
        })
        .collect();
    assert!(geography_only.is_empty());
}

#[test]
fn test_geography_excludes_planar_predicates() {
    for predicate in [
        SpatialPredicate::Touches,
        SpatialPredicate::Crosses,
        SpatialPredicate::BboxContains,
        SpatialPredicate::BboxOverlaps,
        SpatialPredicate::BboxContained,
    ] {
        let err = translate(
            predicate,
            SpatialDialect::Geography,
            "[geom]",
            &point_operand(),
        )
        .unwrap_err();
        assert!(
            matches!(
                err,
                SpatialError::UnsupportedPredicate {
                    dialect: SpatialDialect::Geography,
                    ..
                }
            ),
            "{predicate}"
        );
    }
}

#[test]
fn test_isnull_available_for_both_dialects() {
    for dialect in [SpatialDialect::Geometry, SpatialDialect::Geography] {
        let t = translate(
            SpatialPredicate::IsNull,
            dialect,
            "[geom]",
            &PredicateOperand::IsNull(true),
        )
        .unwrap();
        assert_eq!(t.sql, "[geom] IS NULL");
    }
}

#[test]
fn test_distance_family_registered_for_both_dialects() {
    for dialect in [SpatialDialect::Geometry, SpatialDialect::Geography] {
        for predicate in [
            SpatialPredicate::DistanceGt,
            SpatialPredicate::DistanceGte,
            SpatialPredicate::DistanceLt,
            SpatialPredicate::DistanceLte,
        ] {
            assert!(EmissionStrategy::lookup(dialect, predicate).is_some());
        }
    }
}
