//! Quantity type - a value with a unit of one category

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use metron_core::number::{approx_eq, ensure_finite, hash_key};
use metron_core::{MeasurementError, Result};
use crate::arithmetic::{self, ArithmeticOp};
use crate::UnitCapability;

/// An immutable measurement: a finite value in a unit of category `U`.
///
/// Operations never mutate; they return new quantities. Two quantities are
/// equal when their base-unit values are within `1e-6` of each other, so
/// `1 ft == 12 in`. Quantities of different categories are never equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    try_from = "RawQuantity<U>",
    bound(serialize = "U: Serialize", deserialize = "U: Deserialize<'de>")
)]
pub struct Quantity<U: UnitCapability> {
    value: f64,
    unit: U,
}

impl<U: UnitCapability> Quantity<U> {
    /// Create a quantity; the value must be finite
    pub fn new(value: f64, unit: U) -> Result<Self> {
        Ok(Quantity {
            value: ensure_finite(value)?,
            unit,
        })
    }

    /// Create a quantity from a possibly missing unit
    pub fn from_parts(value: f64, unit: Option<U>) -> Result<Self> {
        let unit = unit.ok_or_else(|| MeasurementError::null_unit("CREATE"))?;
        Self::new(value, unit)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// The value expressed in the category's base unit
    pub fn base_value(&self) -> Result<f64> {
        self.unit.to_base_unit(self.value)
    }

    /// Convert to another unit of the same category
    pub fn convert_to(&self, target: U) -> Result<Self> {
        if target == self.unit {
            return Ok(*self);
        }
        let value = target.from_base_unit(self.base_value()?)?;
        Self::new(value, target)
    }

    /// Convert and keep only the number
    pub fn convert_to_scalar(&self, target: U) -> Result<f64> {
        Ok(self.convert_to(target)?.value)
    }

    /// Sum in this quantity's unit
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.add_in(other, self.unit)
    }

    /// Sum in `target`
    pub fn add_in(&self, other: &Self, target: U) -> Result<Self> {
        arithmetic::perform(ArithmeticOp::Add, self, Some(other), Some(target))?.into_quantity()
    }

    /// Difference in this quantity's unit
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.subtract_in(other, self.unit)
    }

    /// Difference in `target`
    pub fn subtract_in(&self, other: &Self, target: U) -> Result<Self> {
        arithmetic::perform(ArithmeticOp::Subtract, self, Some(other), Some(target))?.into_quantity()
    }

    /// Dimensionless ratio of the two base-unit values
    pub fn divide(&self, other: &Self) -> Result<f64> {
        Ok(arithmetic::perform(ArithmeticOp::Divide, self, Some(other), None)?.scalar())
    }
}

impl<U: UnitCapability> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl<U: UnitCapability, V: UnitCapability> PartialEq<Quantity<V>> for Quantity<U> {
    fn eq(&self, other: &Quantity<V>) -> bool {
        if TypeId::of::<U>() != TypeId::of::<V>() {
            return false;
        }
        match (self.base_value(), other.base_value()) {
            (Ok(a), Ok(b)) => approx_eq(a, b),
            // Too large to normalize: only the identical value and unit match
            _ => self.value == other.value && self.unit.name() == other.unit.name(),
        }
    }
}

// Values are always finite, so equality is reflexive. Transitivity only
// holds away from the tolerance boundary.
impl<U: UnitCapability> Eq for Quantity<U> {}

impl<U: UnitCapability> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<U>().hash(state);
        // Base values too large to normalize all share one bucket
        self.base_value().map(hash_key).unwrap_or(i64::MAX).hash(state);
    }
}

/// Unvalidated wire form of a quantity
#[derive(Deserialize)]
struct RawQuantity<U> {
    value: f64,
    unit: U,
}

impl<U: UnitCapability> TryFrom<RawQuantity<U>> for Quantity<U> {
    type Error = MeasurementError;

    fn try_from(raw: RawQuantity<U>) -> Result<Self> {
        Quantity::new(raw.value, raw.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_quantity_creation() {
        let q = Quantity::new(5.0, LengthUnit::Feet).unwrap();
        assert_eq!(q.value(), 5.0);
        assert_eq!(q.unit(), LengthUnit::Feet);
    }

    #[test]
    fn test_non_finite_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Quantity::new(v, WeightUnit::Gram).unwrap_err();
            assert!(matches!(err, MeasurementError::InvalidValue { .. }));
        }
    }

    #[test]
    fn test_missing_unit() {
        let err = Quantity::<LengthUnit>::from_parts(1.0, None).unwrap_err();
        assert!(matches!(err, MeasurementError::NullUnit { .. }));
        assert!(Quantity::from_parts(1.0, Some(LengthUnit::Inch)).is_ok());
    }

    #[test]
    fn test_feet_to_inches() {
        let q = Quantity::new(1.0, LengthUnit::Feet).unwrap();
        let converted = q.convert_to(LengthUnit::Inch).unwrap();
        assert!(approx(converted.value(), 12.0, 1e-6));
        assert_eq!(converted.unit(), LengthUnit::Inch);
        // Receiver unchanged
        assert_eq!(q.value(), 1.0);
    }

    #[test]
    fn test_convert_to_scalar() {
        let q = Quantity::new(1.0, VolumeUnit::Gallon).unwrap();
        assert!(approx(q.convert_to_scalar(VolumeUnit::Litre).unwrap(), 3.78541, 1e-9));
    }

    #[test]
    fn test_round_trip_every_pair() {
        fn check<U: UnitCapability>(v: f64) {
            for &a in U::all() {
                for &b in U::all() {
                    let q = Quantity::new(v, a).unwrap();
                    let back = q.convert_to(a).unwrap().convert_to(b).unwrap().convert_to(a).unwrap();
                    assert!(approx(back.value(), v, 1e-6), "{:?} -> {:?} -> {:?}: {}", a, b, a, back.value());
                }
            }
        }
        for v in [0.0, 1.0, -40.0, 123.456, 1e4] {
            check::<LengthUnit>(v);
            check::<WeightUnit>(v);
            check::<VolumeUnit>(v);
            check::<TemperatureUnit>(v);
        }
    }

    #[test]
    fn test_add_feet_and_inches() {
        let a = Quantity::new(1.0, LengthUnit::Feet).unwrap();
        let b = Quantity::new(12.0, LengthUnit::Inch).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.value(), 2.0);
        assert_eq!(sum.unit(), LengthUnit::Feet);
    }

    #[test]
    fn test_add_commutative_for_target() {
        let a = Quantity::new(3.7, LengthUnit::Yard).unwrap();
        let b = Quantity::new(41.0, LengthUnit::Centimeter).unwrap();
        for &target in LengthUnit::all() {
            let ab = a.add_in(&b, target).unwrap();
            let ba = b.add_in(&a, target).unwrap();
            assert!(approx(ab.value(), ba.value(), 0.01));
        }
    }

    #[test]
    fn test_subtract_anti_commutative() {
        let a = Quantity::new(5.0, WeightUnit::Pound).unwrap();
        let b = Quantity::new(800.0, WeightUnit::Gram).unwrap();
        let ab = a.subtract_in(&b, WeightUnit::Kilogram).unwrap();
        let ba = b.subtract_in(&a, WeightUnit::Kilogram).unwrap();
        assert_eq!(ab.value(), -ba.value());
    }

    #[test]
    fn test_subtract_in_own_unit() {
        let a = Quantity::new(2.0, LengthUnit::Feet).unwrap();
        let b = Quantity::new(6.0, LengthUnit::Inch).unwrap();
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.value(), 1.5);
        assert_eq!(diff.unit(), LengthUnit::Feet);
    }

    #[test]
    fn test_divide_inverse() {
        let a = Quantity::new(2.0, VolumeUnit::Gallon).unwrap();
        let b = Quantity::new(750.0, VolumeUnit::Millilitre).unwrap();
        let ab = a.divide(&b).unwrap();
        let ba = b.divide(&a).unwrap();
        assert!(approx(ab, 1.0 / ba, 1e-12));
        assert_eq!(a.divide(&a).unwrap(), 1.0);
    }

    #[test]
    fn test_divide_by_zero() {
        let a = Quantity::new(10.0, LengthUnit::Feet).unwrap();
        let zero = Quantity::new(0.0, LengthUnit::Feet).unwrap();
        assert_eq!(a.divide(&zero).unwrap_err(), MeasurementError::DivideByZero);
        let zero_inches = Quantity::new(0.0, LengthUnit::Inch).unwrap();
        assert_eq!(a.divide(&zero_inches).unwrap_err(), MeasurementError::DivideByZero);
    }

    #[test]
    fn test_temperature_equality_across_scales() {
        let c = Quantity::new(0.0, TemperatureUnit::Celsius).unwrap();
        let f = Quantity::new(32.0, TemperatureUnit::Fahrenheit).unwrap();
        let k = Quantity::new(273.15, TemperatureUnit::Kelvin).unwrap();
        assert_eq!(c, f);
        assert_eq!(c, k);
        assert_eq!(f, k);
    }

    #[test]
    fn test_temperature_arithmetic_unsupported() {
        let a = Quantity::new(100.0, TemperatureUnit::Celsius).unwrap();
        let b = Quantity::new(50.0, TemperatureUnit::Celsius).unwrap();

        let err = a.add(&b).unwrap_err();
        assert_eq!(err, MeasurementError::unsupported("temperature", "ADD"));
        assert_eq!(err.operation(), Some("ADD"));

        assert!(matches!(a.subtract(&b), Err(MeasurementError::UnsupportedOperation { .. })));
        assert!(matches!(a.divide(&b), Err(MeasurementError::UnsupportedOperation { .. })));

        // Conversion still works
        let f = a.convert_to(TemperatureUnit::Fahrenheit).unwrap();
        assert!(approx(f.value(), 212.0, 1e-9));
    }

    #[test]
    fn test_cross_category_not_equal() {
        let kg = Quantity::new(1.0, WeightUnit::Kilogram).unwrap();
        let ft = Quantity::new(1.0, LengthUnit::Feet).unwrap();
        assert!(kg != ft);
        assert!(ft != kg);
    }

    #[test]
    fn test_equality_reflexive_and_symmetric() {
        let a = Quantity::new(1.0, LengthUnit::Yard).unwrap();
        let b = Quantity::new(36.0, LengthUnit::Inch).unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, Quantity::new(35.9, LengthUnit::Inch).unwrap());
    }

    #[test]
    fn test_equality_reflexive_beyond_base_range() {
        // 1e308 yd overflows when normalized to feet
        let huge = Quantity::new(1e308, LengthUnit::Yard).unwrap();
        assert!(huge.base_value().is_err());
        assert_eq!(huge, huge);
        assert_eq!(huge, Quantity::new(1e308, LengthUnit::Yard).unwrap());
        assert_ne!(huge, Quantity::new(1e308, LengthUnit::Feet).unwrap());
        assert_ne!(huge, Quantity::new(9e307, LengthUnit::Yard).unwrap());

        let mut set = HashSet::new();
        set.insert(huge);
        assert!(set.contains(&huge));

        let same = huge.convert_to(LengthUnit::Yard).unwrap();
        assert_eq!(same.value(), 1e308);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(Quantity::new(1.0, LengthUnit::Feet).unwrap());
        set.insert(Quantity::new(12.0, LengthUnit::Inch).unwrap());
        set.insert(Quantity::new(3.0, LengthUnit::Feet).unwrap());
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Quantity::new(1.0, LengthUnit::Yard).unwrap()));
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(2.5, VolumeUnit::Litre).unwrap();
        assert_eq!(q.to_string(), "2.5 L");
        let t = Quantity::new(-40.0, TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(t.to_string(), "-40 °F");
    }

    #[test]
    fn test_serde_round_trip() {
        let q = Quantity::new(12.0, LengthUnit::Inch).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":12.0,"unit":"INCH"}"#);
        let back: Quantity<LengthUnit> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), LengthUnit::Inch);
        assert_eq!(back.value(), 12.0);
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Quantity<WeightUnit>>(r#"{"value":1.0,"unit":"OUNCE"}"#).is_err());
        assert!(serde_json::from_str::<Quantity<WeightUnit>>(r#"{"value":"x","unit":"GRAM"}"#).is_err());
    }
}
