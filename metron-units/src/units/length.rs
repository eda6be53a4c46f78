//! Length units, normalized through feet

use serde::{Deserialize, Serialize};
use crate::unit::{Conversion, UnitCapability, UnitSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    Feet,
    Inch,
    Yard,
    Centimeter,
}

static ALL: [LengthUnit; 4] = [
    LengthUnit::Feet,
    LengthUnit::Inch,
    LengthUnit::Yard,
    LengthUnit::Centimeter,
];

static FEET: UnitSpec = UnitSpec {
    name: "FEET",
    symbol: "ft",
    aliases: &["foot"],
    conversion: Conversion::Factor(1.0),
};

static INCH: UnitSpec = UnitSpec {
    name: "INCH",
    symbol: "in",
    aliases: &["inches"],
    conversion: Conversion::Factor(1.0 / 12.0),
};

static YARD: UnitSpec = UnitSpec {
    name: "YARD",
    symbol: "yd",
    aliases: &["yards"],
    conversion: Conversion::Factor(3.0),
};

static CENTIMETER: UnitSpec = UnitSpec {
    name: "CENTIMETER",
    symbol: "cm",
    aliases: &["centimeters", "centimetre", "centimetres"],
    // 2.54 cm per inch, 12 inches per foot
    conversion: Conversion::Factor(1.0 / (2.54 * 12.0)),
};

impl LengthUnit {
    fn spec(self) -> &'static UnitSpec {
        match self {
            LengthUnit::Feet => &FEET,
            LengthUnit::Inch => &INCH,
            LengthUnit::Yard => &YARD,
            LengthUnit::Centimeter => &CENTIMETER,
        }
    }
}

impl UnitCapability for LengthUnit {
    const CATEGORY: &'static str = "length";
    const BASE: Self = LengthUnit::Feet;

    fn all() -> &'static [Self] {
        &ALL
    }

    fn name(&self) -> &'static str {
        self.spec().name
    }

    fn symbol(&self) -> &'static str {
        self.spec().symbol
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.spec().aliases
    }

    fn conversion(&self) -> Conversion {
        self.spec().conversion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_inch_to_feet() {
        assert!(approx(LengthUnit::Inch.to_base_unit(12.0).unwrap(), 1.0));
        assert!(approx(LengthUnit::Inch.from_base_unit(1.0).unwrap(), 12.0));
    }

    #[test]
    fn test_yard_to_feet() {
        assert!(approx(LengthUnit::Yard.to_base_unit(1.0).unwrap(), 3.0));
    }

    #[test]
    fn test_centimeter_to_feet() {
        // 30.48 cm = 1 ft
        assert!(approx(LengthUnit::Centimeter.to_base_unit(30.48).unwrap(), 1.0));
        assert!(approx(LengthUnit::Centimeter.from_base_unit(1.0).unwrap(), 30.48));
    }

    #[test]
    fn test_arithmetic_supported() {
        assert!(ALL.iter().all(|u| u.supports_arithmetic()));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(LengthUnit::Feet.to_base_unit(f64::NAN).is_err());
        assert!(LengthUnit::Yard.from_base_unit(f64::INFINITY).is_err());
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&LengthUnit::Centimeter).unwrap();
        assert_eq!(json, "\"CENTIMETER\"");
        let unit: LengthUnit = serde_json::from_str("\"INCH\"").unwrap();
        assert_eq!(unit, LengthUnit::Inch);
    }
}
