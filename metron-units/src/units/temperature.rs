//! Temperature units, normalized through degrees Celsius
//!
//! Fahrenheit and Kelvin are offset scales, so they carry explicit formulas
//! instead of a factor. Adding or dividing absolute temperatures has no
//! physical meaning; the category supports conversion and comparison only.

use serde::{Deserialize, Serialize};
use crate::unit::{Conversion, UnitCapability, UnitSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Offset between the Kelvin and Celsius scales
const KELVIN_OFFSET: f64 = 273.15;

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

static ALL: [TemperatureUnit; 3] = [
    TemperatureUnit::Celsius,
    TemperatureUnit::Fahrenheit,
    TemperatureUnit::Kelvin,
];

static CELSIUS: UnitSpec = UnitSpec {
    name: "CELSIUS",
    symbol: "°C",
    aliases: &["C", "degC"],
    conversion: Conversion::Factor(1.0),
};

static FAHRENHEIT: UnitSpec = UnitSpec {
    name: "FAHRENHEIT",
    symbol: "°F",
    aliases: &["F", "degF"],
    conversion: Conversion::Formula {
        to_base: fahrenheit_to_celsius,
        from_base: celsius_to_fahrenheit,
    },
};

static KELVIN: UnitSpec = UnitSpec {
    name: "KELVIN",
    symbol: "K",
    aliases: &["kelvins"],
    conversion: Conversion::Formula {
        to_base: kelvin_to_celsius,
        from_base: celsius_to_kelvin,
    },
};

impl TemperatureUnit {
    fn spec(self) -> &'static UnitSpec {
        match self {
            TemperatureUnit::Celsius => &CELSIUS,
            TemperatureUnit::Fahrenheit => &FAHRENHEIT,
            TemperatureUnit::Kelvin => &KELVIN,
        }
    }
}

impl UnitCapability for TemperatureUnit {
    const CATEGORY: &'static str = "temperature";
    const BASE: Self = TemperatureUnit::Celsius;

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

    fn supports_arithmetic(&self) -> bool {
        false
    }
}
