//! Metron Units - Category-safe physical quantities
//!
//! A [`Quantity`] is a finite value paired with a unit of one category. The
//! category is the unit type itself, so mixing categories is a compile
//! error rather than a runtime check:
//!
//! ```compile_fail
//! use metron_units::{Quantity, LengthUnit, WeightUnit};
//! let a = Quantity::new(1.0, LengthUnit::Feet).unwrap();
//! let b = Quantity::new(1.0, WeightUnit::Kilogram).unwrap();
//! let _ = a.add(&b);
//! ```
//!
//! Categories:
//! - Length (ft, in, yd, cm)
//! - Weight (kg, g, lb)
//! - Volume (L, mL, gal)
//! - Temperature (°C, °F, K) - conversion and comparison only
//!
//! All conversions and arithmetic normalize through the category's base
//! unit. New categories implement [`UnitCapability`]; nothing in this crate
//! changes.
//!
//! ```
//! use metron_units::{Quantity, LengthUnit};
//! let foot = Quantity::new(1.0, LengthUnit::Feet).unwrap();
//! let inches = Quantity::new(12.0, LengthUnit::Inch).unwrap();
//! assert_eq!(foot, inches);
//! assert_eq!(foot.add(&inches).unwrap().value(), 2.0);
//! ```

mod quantity;
mod unit;
mod units;
pub mod arithmetic;
pub mod parse;

pub use arithmetic::{ArithmeticOp, Outcome};
pub use quantity::Quantity;
pub use unit::{list_units, Conversion, UnitCapability, UnitInfo, UnitSpec};
pub use units::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};
pub use parse::{parse_quantity, parse_unit};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ArithmeticOp, LengthUnit, Quantity, TemperatureUnit, UnitCapability, VolumeUnit,
        WeightUnit,
    };
    pub use metron_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        // 1 ft in inches
        let q = Quantity::new(1.0, LengthUnit::Feet).unwrap();
        assert!((q.convert_to(LengthUnit::Inch).unwrap().value() - 12.0).abs() < 1e-6);

        // 1 ft + 12 in
        let sum = q.add(&Quantity::new(12.0, LengthUnit::Inch).unwrap()).unwrap();
        assert_eq!(sum.value(), 2.0);
        assert_eq!(sum.unit(), LengthUnit::Feet);

        // 10 ft / 0 ft
        let ten = Quantity::new(10.0, LengthUnit::Feet).unwrap();
        let zero = Quantity::new(0.0, LengthUnit::Feet).unwrap();
        assert_eq!(ten.divide(&zero), Err(metron_core::MeasurementError::DivideByZero));

        // 0 °C == 32 °F == 273.15 K
        let c = Quantity::new(0.0, TemperatureUnit::Celsius).unwrap();
        assert!(c == Quantity::new(32.0, TemperatureUnit::Fahrenheit).unwrap());
        assert!(c == Quantity::new(273.15, TemperatureUnit::Kelvin).unwrap());

        // 100 °C + 50 °C
        let hot = Quantity::new(100.0, TemperatureUnit::Celsius).unwrap();
        let warm = Quantity::new(50.0, TemperatureUnit::Celsius).unwrap();
        let err = hot.add(&warm).unwrap_err();
        assert_eq!(err.operation(), Some("ADD"));

        // 1 kg vs 1 ft
        let kg = Quantity::new(1.0, WeightUnit::Kilogram).unwrap();
        assert!(kg != Quantity::new(1.0, LengthUnit::Feet).unwrap());
    }

    #[test]
    fn test_list_units() {
        let units = list_units::<VolumeUnit>();
        assert_eq!(units.len(), 3);
        assert!(units.iter().filter(|u| u.base).count() == 1);
        assert!(list_units::<TemperatureUnit>().iter().all(|u| !u.arithmetic));
    }
}
