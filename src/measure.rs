//! Distance values and linear units.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dialect::SpatialDialect;
use crate::error::{SpatialError, SpatialResult};

/// A linear unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinearUnit {
    Meter,
    Kilometer,
    Centimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    NauticalMile,
}

impl LinearUnit {
    /// Conversion factor to meters.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => 1000.0,
            Self::Centimeter => 0.01,
            Self::Mile => 1609.344,
            Self::Yard => 0.9144,
            Self::Foot => 0.3048,
            Self::Inch => 0.0254,
            Self::NauticalMile => 1852.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Meter => "metre",
            Self::Kilometer => "kilometre",
            Self::Centimeter => "centimetre",
            Self::Mile => "mile",
            Self::Yard => "yard",
            Self::Foot => "foot",
            Self::Inch => "inch",
            Self::NauticalMile => "nautical mile",
        }
    }
}

impl FromStr for LinearUnit {
    type Err = String;

    /// Parse the unit names that appear in spatial reference definitions,
    /// including the US spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "meter" | "metre" => Ok(Self::Meter),
            "km" | "kilometer" | "kilometre" => Ok(Self::Kilometer),
            "cm" | "centimeter" | "centimetre" => Ok(Self::Centimeter),
            "mi" | "mile" => Ok(Self::Mile),
            "yd" | "yard" => Ok(Self::Yard),
            "ft" | "foot" | "us survey foot" => Ok(Self::Foot),
            "in" | "inch" => Ok(Self::Inch),
            "nm" | "nautical mile" => Ok(Self::NauticalMile),
            other => Err(format!("unknown linear unit: '{}'", other)),
        }
    }
}

impl std::fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A distance with an explicit linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    pub unit: LinearUnit,
}

impl Measure {
    pub fn new(value: f64, unit: LinearUnit) -> Self {
        Self { value, unit }
    }

    /// The numeric value expressed in another unit.
    pub fn in_unit(&self, unit: LinearUnit) -> f64 {
        self.value * self.unit.meters_per_unit() / unit.meters_per_unit()
    }
}

/// The acceptable distance value types for a distance-comparison predicate:
/// a float, a decimal, or a measure carrying its own unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistanceValue {
    Float(f64),
    Decimal(Decimal),
    Measure(Measure),
}

impl From<f64> for DistanceValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for DistanceValue {
    fn from(v: i64) -> Self {
        Self::Float(v as f64)
    }
}

impl From<Decimal> for DistanceValue {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<Measure> for DistanceValue {
    fn from(v: Measure) -> Self {
        Self::Measure(v)
    }
}

/// The distance side of a distance-comparison operand.
///
/// `column_unit` is the linear unit of the column's spatial reference, when
/// the caller knows it. It is only consulted when the value is a [`Measure`]
/// against a planar column; raw numerics always pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceOperand {
    pub value: DistanceValue,
    pub column_unit: Option<LinearUnit>,
}

impl DistanceOperand {
    pub fn new(value: impl Into<DistanceValue>) -> Self {
        Self {
            value: value.into(),
            column_unit: None,
        }
    }

    pub fn with_column_unit(mut self, unit: LinearUnit) -> Self {
        self.column_unit = Some(unit);
        self
    }

    /// Resolve to the numeric value to bind, per the column's dialect.
    ///
    /// Measures never cross the coordinate-system family boundary: a linear
    /// measure against a geodetic column is an error rather than a silently
    /// wrong number in degrees, and a measure against a planar column whose
    /// unit the caller did not state is equally refused.
    pub fn resolve(&self, dialect: SpatialDialect) -> SpatialResult<ResolvedDistance> {
        match &self.value {
            DistanceValue::Float(v) => Ok(ResolvedDistance::Float(*v)),
            DistanceValue::Decimal(d) => Ok(ResolvedDistance::Decimal(*d)),
            DistanceValue::Measure(m) => {
                if dialect.is_geodetic() {
                    return Err(SpatialError::unit(
                        "distance queries on geodetic columns take a numeric value \
                         in the column's angular units, not a linear measure",
                    ));
                }
                match self.column_unit {
                    Some(unit) => Ok(ResolvedDistance::Float(m.in_unit(unit))),
                    None => Err(SpatialError::unit(
                        "cannot convert a measure for a geometry column whose \
                         linear unit is unknown",
                    )),
                }
            }
        }
    }
}

/// A distance value reduced to something bindable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedDistance {
    Float(f64),
    Decimal(Decimal),
}
