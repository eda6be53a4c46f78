//! Arithmetic engine shared by every category
//!
//! Add, subtract and divide all go through [`perform`]: one validation
//! sequence, one normalization into base units, then the operator. The
//! engine never asks which category it is working on; the unit's capability
//! flag decides whether arithmetic is allowed.

use std::fmt;
use serde::{Deserialize, Serialize};
use metron_core::number::{ensure_finite, round_half_away, DIVISION_EPSILON, RESULT_DECIMALS};
use metron_core::{MeasurementError, Result};
use crate::{Quantity, UnitCapability};

/// The operations routed through the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Divide,
}

impl ArithmeticOp {
    /// Name reported in errors
    pub fn name(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "ADD",
            ArithmeticOp::Subtract => "SUBTRACT",
            ArithmeticOp::Divide => "DIVIDE",
        }
    }

    /// Add and subtract produce a quantity and need a unit to express it in
    pub fn requires_target_unit(self) -> bool {
        !matches!(self, ArithmeticOp::Divide)
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            ArithmeticOp::Add => lhs + rhs,
            ArithmeticOp::Subtract => lhs - rhs,
            ArithmeticOp::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of an engine operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<U: UnitCapability> {
    /// Add or subtract: rounded, expressed in the target unit
    Quantity(Quantity<U>),
    /// Divide: dimensionless, unrounded
    Ratio(f64),
}

impl<U: UnitCapability> Outcome<U> {
    /// The numeric part of the outcome
    pub fn scalar(&self) -> f64 {
        match self {
            Outcome::Quantity(q) => q.value(),
            Outcome::Ratio(r) => *r,
        }
    }

    /// The quantity, or `NullUnit` for a ratio which has no unit
    pub fn into_quantity(self) -> Result<Quantity<U>> {
        match self {
            Outcome::Quantity(q) => Ok(q),
            Outcome::Ratio(_) => Err(MeasurementError::null_unit(ArithmeticOp::Divide.name())),
        }
    }
}

/// Validate and execute one arithmetic operation.
///
/// Checks run in a fixed order: missing operand, missing target unit (add
/// and subtract only), non-finite values, then the category's capability
/// flag. Both operands are then normalized to the base unit. Add and
/// subtract convert the base-unit result into `target` and round it there;
/// divide returns the raw base-unit ratio.
pub fn perform<U: UnitCapability>(
    op: ArithmeticOp,
    lhs: &Quantity<U>,
    rhs: Option<&Quantity<U>>,
    target: Option<U>,
) -> Result<Outcome<U>> {
    let rhs = rhs.ok_or_else(|| MeasurementError::null_operand(op.name()))?;

    let target = if op.requires_target_unit() {
        Some(target.ok_or_else(|| MeasurementError::null_unit(op.name()))?)
    } else {
        None
    };

    ensure_finite(lhs.value())?;
    ensure_finite(rhs.value())?;
    lhs.unit().validate_operation_support(op)?;

    let lhs_base = lhs.base_value()?;
    let rhs_base = rhs.base_value()?;

    match target {
        Some(target) => {
            let value = target.from_base_unit(op.apply(lhs_base, rhs_base))?;
            // Round in the target unit, not in base units
            let value = round_half_away(value, RESULT_DECIMALS);
            Ok(Outcome::Quantity(Quantity::new(value, target)?))
        }
        None => {
            if rhs_base.abs() < DIVISION_EPSILON {
                return Err(MeasurementError::DivideByZero);
            }
            Ok(Outcome::Ratio(ensure_finite(op.apply(lhs_base, rhs_base))?))
        }
    }
}

// ========== Value + unit pair variants ==========

/// `(v1 u1) + (v2 u2)` expressed in `target`
pub fn add<U: UnitCapability>(v1: f64, u1: U, v2: f64, u2: U, target: U) -> Result<Quantity<U>> {
    Quantity::new(v1, u1)?.add_in(&Quantity::new(v2, u2)?, target)
}

/// `(v1 u1) - (v2 u2)` expressed in `target`
pub fn subtract<U: UnitCapability>(v1: f64, u1: U, v2: f64, u2: U, target: U) -> Result<Quantity<U>> {
    Quantity::new(v1, u1)?.subtract_in(&Quantity::new(v2, u2)?, target)
}

/// `(v1 u1) / (v2 u2)` as a dimensionless ratio
pub fn divide<U: UnitCapability>(v1: f64, u1: U, v2: f64, u2: U) -> Result<f64> {
    Quantity::new(v1, u1)?.divide(&Quantity::new(v2, u2)?)
}
