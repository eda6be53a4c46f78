//! Unit capability: how a unit normalizes into its category's base unit

use std::fmt;
use std::hash::Hash;
use serde::Serialize;
use metron_core::number::ensure_finite;
use metron_core::{MeasurementError, Result};
use crate::arithmetic::ArithmeticOp;

/// Relationship between a unit and its category's base unit
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// Linear unit: `base = value * factor`
    Factor(f64),
    /// Affine unit with explicit transforms in both directions
    Formula {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl Conversion {
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Factor(factor) => value * factor,
            Conversion::Formula { to_base, .. } => to_base(value),
        }
    }

    pub fn from_base(self, base_value: f64) -> f64 {
        match self {
            Conversion::Factor(factor) => base_value / factor,
            Conversion::Formula { from_base, .. } => from_base(base_value),
        }
    }

    /// True only for a factor of exactly one
    pub fn is_identity(self) -> bool {
        matches!(self, Conversion::Factor(factor) if factor == 1.0)
    }

    /// The multiplicative factor, when the unit is linear
    pub fn factor(self) -> Option<f64> {
        match self {
            Conversion::Factor(factor) => Some(factor),
            Conversion::Formula { .. } => None,
        }
    }
}

/// Static descriptor backing one unit in a category table
#[derive(Debug, Clone, Copy)]
pub struct UnitSpec {
    pub name: &'static str,
    pub symbol: &'static str,
    pub aliases: &'static [&'static str],
    pub conversion: Conversion,
}

/// A unit of one measurement category.
///
/// Each implementing type is a category: quantities over two different
/// implementors are distinct types, so cross-category conversion or
/// arithmetic does not compile. The arithmetic engine only ever talks to a
/// unit through this trait, so a new category needs no change to
/// `Quantity` or the engine.
pub trait UnitCapability: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Category name used in errors and listings (e.g. "length")
    const CATEGORY: &'static str;

    /// The unit whose conversion is the identity
    const BASE: Self;

    /// Every unit of the category
    fn all() -> &'static [Self];

    fn name(&self) -> &'static str;

    fn symbol(&self) -> &'static str;

    /// Extra spellings accepted by the unit parser
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn conversion(&self) -> Conversion;

    /// Whether add, subtract and divide are meaningful for the category
    fn supports_arithmetic(&self) -> bool {
        true
    }

    /// Convert a value in this unit to the category's base unit
    fn to_base_unit(&self, value: f64) -> Result<f64> {
        let value = ensure_finite(value)?;
        ensure_finite(self.conversion().to_base(value))
    }

    /// Convert a base-unit value into this unit
    fn from_base_unit(&self, base_value: f64) -> Result<f64> {
        let base_value = ensure_finite(base_value)?;
        ensure_finite(self.conversion().from_base(base_value))
    }

    /// Fail with `UnsupportedOperation` when the category forbids arithmetic
    fn validate_operation_support(&self, op: ArithmeticOp) -> Result<()> {
        if self.supports_arithmetic() {
            Ok(())
        } else {
            Err(MeasurementError::unsupported(Self::CATEGORY, op.name()))
        }
    }

    /// Serializable description of this unit
    fn info(&self) -> UnitInfo {
        UnitInfo {
            category: Self::CATEGORY,
            name: self.name(),
            symbol: self.symbol(),
            base: *self == Self::BASE,
            arithmetic: self.supports_arithmetic(),
        }
    }
}

/// Snapshot of a unit for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitInfo {
    pub category: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub base: bool,
    pub arithmetic: bool,
}

impl fmt::Display for UnitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)?;
        if self.base {
            write!(f, " [base]")?;
        }
        Ok(())
    }
}

/// Describe every unit of a category
pub fn list_units<U: UnitCapability>() -> Vec<UnitInfo> {
    U::all().iter().map(|u| u.info()).collect()
}
