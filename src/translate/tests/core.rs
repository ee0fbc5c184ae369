//! Direct method-call predicates and `isnull`.

use pretty_assertions::assert_eq;

use super::{point_operand, POINT_WKT};
use crate::dialect::SpatialDialect;
use crate::error::SpatialError;
use crate::geometry::GeometryOperand;
use crate::predicate::SpatialPredicate;
use crate::translate::{translate, wkt_select, PredicateOperand, SqlParam};

#[test]
fn test_contains_literal() {
    let t = translate(
        SpatialPredicate::Contains,
        SpatialDialect::Geometry,
        "[places].[geom]",
        &point_operand(),
    )
    .unwrap();
    assert_eq!(
        t.sql,
        "[places].[geom].STContains(geometry::STGeomFromText(@p1,4326)) = 1"
    );
    assert_eq!(t.params, vec![SqlParam::Text(POINT_WKT.to_string())]);
}

#[test]
fn test_within_geography_namespace() {
    let t = translate(
        SpatialPredicate::Within,
        SpatialDialect::Geography,
        "[ports].[location]",
        &point_operand(),
    )
    .unwrap();
    assert_eq!(
        t.sql,
        "[ports].[location].STWithin(geography::STGeomFromText(@p1,4326)) = 1"
    );
}

#[test]
fn test_srid_is_embedded_in_constructor() {
    let operand = PredicateOperand::Geometry(GeometryOperand::Literal(
        crate::geometry::GeometryLiteral::new("POINT (1 2)", 3857),
    ));
    let t = translate(
        SpatialPredicate::Intersects,
        SpatialDialect::Geometry,
        "[geom]",
        &operand,
    )
    .unwrap();
    assert_eq!(
        t.sql,
        "[geom].STIntersects(geometry::STGeomFromText(@p1,3857)) = 1"
    );
}

#[test]
fn test_expression_operand_renders_verbatim() {
    let operand = PredicateOperand::Geometry(GeometryOperand::Expression(
        "[other].[geom]".to_string(),
    ));
    let t = translate(
        SpatialPredicate::Equals,
        SpatialDialect::Geometry,
        "[t].[geom]",
        &operand,
    )
    .unwrap();
    assert_eq!(t.sql, "[t].[geom].STEquals([other].[geom]) = 1");
    assert!(t.params.is_empty());
}

#[test]
fn test_isnull_true() {
    let t = translate(
        SpatialPredicate::IsNull,
        SpatialDialect::Geometry,
        "[geom]",
        &PredicateOperand::IsNull(true),
    )
    .unwrap();
    assert_eq!(t.sql, "[geom] IS NULL");
    assert!(t.params.is_empty());
}

#[test]
fn test_isnull_false() {
    let t = translate(
        SpatialPredicate::IsNull,
        SpatialDialect::Geography,
        "[geom]",
        &PredicateOperand::IsNull(false),
    )
    .unwrap();
    assert_eq!(t.sql, "[geom] IS NOT NULL");
    assert!(t.params.is_empty());
}

#[test]
fn test_isnull_rejects_geometry_operand() {
    let err = translate(
        SpatialPredicate::IsNull,
        SpatialDialect::Geometry,
        "[geom]",
        &point_operand(),
    )
    .unwrap_err();
    assert!(matches!(err, SpatialError::InvalidOperand(_)));
}

#[test]
fn test_boolean_predicate_rejects_isnull_operand() {
    let err = translate(
        SpatialPredicate::Contains,
        SpatialDialect::Geometry,
        "[geom]",
        &PredicateOperand::IsNull(true),
    )
    .unwrap_err();
    assert!(matches!(err, SpatialError::InvalidOperand(_)));
}

#[test]
fn test_wkt_select_wrapper() {
    assert_eq!(wkt_select("[places].[geom]"), "[places].[geom].STAsText()");
}
