//! Weight units, normalized through kilograms

use serde::{Deserialize, Serialize};
use crate::unit::{Conversion, UnitCapability, UnitSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
}

static ALL: [WeightUnit; 3] = [WeightUnit::Kilogram, WeightUnit::Gram, WeightUnit::Pound];

static KILOGRAM: UnitSpec = UnitSpec {
    name: "KILOGRAM",
    symbol: "kg",
    aliases: &["kilograms", "kilo", "kilos"],
    conversion: Conversion::Factor(1.0),
};

static GRAM: UnitSpec = UnitSpec {
    name: "GRAM",
    symbol: "g",
    aliases: &["grams"],
    conversion: Conversion::Factor(0.001),
};

static POUND: UnitSpec = UnitSpec {
    name: "POUND",
    symbol: "lb",
    aliases: &["pounds", "lbs"],
    conversion: Conversion::Factor(0.45359237),
};

impl WeightUnit {
    fn spec(self) -> &'static UnitSpec {
        match self {
            WeightUnit::Kilogram => &KILOGRAM,
            WeightUnit::Gram => &GRAM,
            WeightUnit::Pound => &POUND,
        }
    }
}

impl UnitCapability for WeightUnit {
    const CATEGORY: &'static str = "weight";
    const BASE: Self = WeightUnit::Kilogram;

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
