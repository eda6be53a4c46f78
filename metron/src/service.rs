//! Guarded entry points over quantities
//!
//! Every argument is optional so callers holding possibly-missing values
//! never crash: equality answers `false`, everything else returns
//! `NullOperand` or `NullUnit`. Results and rejections are logged.

use std::fmt::Display;
use metron_core::{MeasurementError, Result};
use metron_units::arithmetic::{self, ArithmeticOp, Outcome};
use metron_units::{Quantity, UnitCapability};
use tracing::{debug, warn};

/// Log the outcome of one operation and hand it back unchanged
fn traced<T: Display>(operation: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(value) => debug!(operation, result = %value, "operation succeeded"),
        Err(e) => warn!(operation, code = e.code(), error = %e, "operation rejected"),
    }
    result
}

/// Convert `quantity` into `target`
pub fn convert_value<U: UnitCapability>(quantity: Option<&Quantity<U>>, target: Option<U>) -> Result<Quantity<U>> {
    let result = match (quantity, target) {
        (None, _) => Err(MeasurementError::null_operand("CONVERT")),
        (_, None) => Err(MeasurementError::null_unit("CONVERT")),
        (Some(q), Some(target)) => q.convert_to(target),
    };
    traced("CONVERT", result)
}

/// `a + b` in the unit of `a`
pub fn add_quantities<U: UnitCapability>(a: Option<&Quantity<U>>, b: Option<&Quantity<U>>) -> Result<Quantity<U>> {
    combine(ArithmeticOp::Add, a, b, a.map(Quantity::unit))
}

/// `a + b` in `target`
pub fn add_quantities_with_target<U: UnitCapability>(
    a: Option<&Quantity<U>>,
    b: Option<&Quantity<U>>,
    target: Option<U>,
) -> Result<Quantity<U>> {
    combine(ArithmeticOp::Add, a, b, target)
}

/// `a - b` in the unit of `a`
pub fn subtract_quantities<U: UnitCapability>(a: Option<&Quantity<U>>, b: Option<&Quantity<U>>) -> Result<Quantity<U>> {
    combine(ArithmeticOp::Subtract, a, b, a.map(Quantity::unit))
}

/// `a - b` in `target`
pub fn subtract_quantities_with_target<U: UnitCapability>(
    a: Option<&Quantity<U>>,
    b: Option<&Quantity<U>>,
    target: Option<U>,
) -> Result<Quantity<U>> {
    combine(ArithmeticOp::Subtract, a, b, target)
}

/// `a / b` as a dimensionless ratio
pub fn divide_quantities<U: UnitCapability>(a: Option<&Quantity<U>>, b: Option<&Quantity<U>>) -> Result<f64> {
    let op = ArithmeticOp::Divide;
    let result = match a {
        Some(a) => arithmetic::perform(op, a, b, None).map(|outcome| outcome.scalar()),
        None => Err(MeasurementError::null_operand(op.name())),
    };
    traced(op.name(), result)
}

/// Tolerance equality; `false` when either side is missing or the categories differ
pub fn are_quantities_equal<U: UnitCapability, V: UnitCapability>(
    a: Option<&Quantity<U>>,
    b: Option<&Quantity<V>>,
) -> bool {
    let equal = match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    debug!(operation = "EQUAL", equal, "quantities compared");
    equal
}

fn combine<U: UnitCapability>(
    op: ArithmeticOp,
    a: Option<&Quantity<U>>,
    b: Option<&Quantity<U>>,
    target: Option<U>,
) -> Result<Quantity<U>> {
    let result = match a {
        Some(a) => arithmetic::perform(op, a, b, target).and_then(Outcome::into_quantity),
        None => Err(MeasurementError::null_operand(op.name())),
    };
    traced(op.name(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_units::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};

    fn q<U: UnitCapability>(value: f64, unit: U) -> Quantity<U> {
        Quantity::new(value, unit).unwrap()
    }

    #[test]
    fn test_convert_value() {
        let litre = q(1.0, VolumeUnit::Litre);
        let ml = convert_value(Some(&litre), Some(VolumeUnit::Millilitre)).unwrap();
        assert!((ml.value() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_value_missing_arguments() {
        let err = convert_value::<LengthUnit>(None, Some(LengthUnit::Inch)).unwrap_err();
        assert_eq!(err, MeasurementError::null_operand("CONVERT"));
        let err = convert_value(Some(&q(1.0, LengthUnit::Feet)), None).unwrap_err();
        assert_eq!(err, MeasurementError::null_unit("CONVERT"));
    }

    #[test]
    fn test_add_quantities() {
        let sum = add_quantities(Some(&q(1.0, LengthUnit::Feet)), Some(&q(12.0, LengthUnit::Inch))).unwrap();
        assert_eq!(sum.value(), 2.0);
        assert_eq!(sum.unit(), LengthUnit::Feet);
    }

    #[test]
    fn test_add_quantities_with_target() {
        let a = q(1.0, WeightUnit::Kilogram);
        let b = q(1.0, WeightUnit::Pound);
        let sum = add_quantities_with_target(Some(&a), Some(&b), Some(WeightUnit::Gram)).unwrap();
        assert_eq!(sum.value(), 1453.59);

        let err = add_quantities_with_target(Some(&a), Some(&b), None).unwrap_err();
        assert_eq!(err, MeasurementError::null_unit("ADD"));
        let err = add_quantities_with_target(Some(&a), None, None).unwrap_err();
        assert_eq!(err, MeasurementError::null_operand("ADD"));
        let err = add_quantities_with_target(None, Some(&b), Some(WeightUnit::Gram)).unwrap_err();
        assert_eq!(err, MeasurementError::null_operand("ADD"));
    }

    #[test]
    fn test_subtract_quantities() {
        let a = q(1.0, VolumeUnit::Gallon);
        let b = q(1.0, VolumeUnit::Litre);
        let diff = subtract_quantities(Some(&a), Some(&b)).unwrap();
        assert_eq!(diff.unit(), VolumeUnit::Gallon);
        assert_eq!(diff.value(), 0.74);

        let diff = subtract_quantities_with_target(Some(&a), Some(&b), Some(VolumeUnit::Millilitre)).unwrap();
        assert_eq!(diff.value(), 2785.41);
    }

    #[test]
    fn test_divide_quantities() {
        let ratio = divide_quantities(Some(&q(3.0, LengthUnit::Yard)), Some(&q(1.0, LengthUnit::Feet))).unwrap();
        assert_eq!(ratio, 9.0);
        assert!(divide_quantities::<LengthUnit>(None, None).is_err());
    }

    #[test]
    fn test_temperature_rejected_through_service() {
        let a = q(20.0, TemperatureUnit::Celsius);
        let b = q(68.0, TemperatureUnit::Fahrenheit);
        assert!(matches!(
            add_quantities(Some(&a), Some(&b)),
            Err(MeasurementError::UnsupportedOperation { .. })
        ));
        assert!(are_quantities_equal(Some(&a), Some(&b)));
    }

    #[test]
    fn test_are_quantities_equal_guards() {
        let kg = q(1.0, WeightUnit::Kilogram);
        let ft = q(1.0, LengthUnit::Feet);
        assert!(!are_quantities_equal(Some(&kg), Some(&ft)));
        assert!(!are_quantities_equal::<WeightUnit, WeightUnit>(Some(&kg), None));
        assert!(!are_quantities_equal::<WeightUnit, WeightUnit>(None, None));
        assert!(are_quantities_equal(Some(&kg), Some(&q(1000.0, WeightUnit::Gram))));
    }
}
