//! Unit definitions organized by category
//!
//! Each category is an enum implementing [`UnitCapability`], backed by a
//! static descriptor table. Categories:
//! - Length (base: feet)
//! - Weight (base: kilogram)
//! - Volume (base: litre)
//! - Temperature (base: Celsius, conversion and comparison only)
//!
//! [`UnitCapability`]: crate::UnitCapability

mod length;
mod temperature;
mod volume;
mod weight;

pub use length::LengthUnit;
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;
