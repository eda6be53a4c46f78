//! Volume units, normalized through litres

use serde::{Deserialize, Serialize};
use crate::unit::{Conversion, UnitCapability, UnitSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeUnit {
    Litre,
    Millilitre,
    Gallon,
}

static ALL: [VolumeUnit; 3] = [VolumeUnit::Litre, VolumeUnit::Millilitre, VolumeUnit::Gallon];

static LITRE: UnitSpec = UnitSpec {
    name: "LITRE",
    symbol: "L",
    aliases: &["litres", "liter", "liters"],
    conversion: Conversion::Factor(1.0),
};

static MILLILITRE: UnitSpec = UnitSpec {
    name: "MILLILITRE",
    symbol: "mL",
    aliases: &["millilitres", "milliliter", "milliliters"],
    conversion: Conversion::Factor(0.001),
};

static GALLON: UnitSpec = UnitSpec {
    name: "GALLON",
    symbol: "gal",
    aliases: &["gallons"],
    // US liquid gallon
    conversion: Conversion::Factor(3.78541),
};

impl VolumeUnit {
    fn spec(self) -> &'static UnitSpec {
        match self {
            VolumeUnit::Litre => &LITRE,
            VolumeUnit::Millilitre => &MILLILITRE,
            VolumeUnit::Gallon => &GALLON,
        }
    }
}

impl UnitCapability for VolumeUnit {
    const CATEGORY: &'static str = "volume";
    const BASE: Self = VolumeUnit::Litre;

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
