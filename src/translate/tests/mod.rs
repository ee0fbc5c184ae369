//! Translation test modules.
//!
//! Tests are organized by category:
//! - `core`: direct boolean method predicates and `isnull`
//! - `bbox`: envelope-emulated bounding-box predicates
//! - `distance`: distance comparisons and unit handling
//! - `registry`: per-dialect registration, structural properties, errors

mod core;
mod registry;

use crate::geometry::{GeometryLiteral, GeometryOperand};
use crate::measure::DistanceOperand;
use crate::translate::PredicateOperand;

pub(crate) const POINT_WKT: &str = "POINT (3 4)";

pub(crate) fn point_operand() -> PredicateOperand {
    PredicateOperand::Geometry(GeometryOperand::Literal(GeometryLiteral::new(
        POINT_WKT, 4326,
    )))
}

pub(crate) fn distance_operand(value: f64) -> PredicateOperand {
    PredicateOperand::Distance(
        GeometryOperand::Literal(GeometryLiteral::new(POINT_WKT, 4326)),
        DistanceOperand::new(value),
    )
}
