//! Runtime category selection
//!
//! Quantities pick their category at compile time. Text input only names a
//! unit, so this module finds the matching category and runs a generic task
//! with the corresponding unit type.

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use metron_units::{parse_unit, LengthUnit, TemperatureUnit, UnitCapability, VolumeUnit, WeightUnit};
use crate::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Volume,
    Temperature,
}

/// Work that is generic over a unit type
pub trait CategoryTask {
    type Output;

    fn run<U: UnitCapability>(self) -> Self::Output;
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Temperature,
    ];

    pub fn name(self) -> &'static str {
        self.dispatch(CategoryName)
    }

    /// Run `task` with this category's unit type
    pub fn dispatch<T: CategoryTask>(self, task: T) -> T::Output {
        match self {
            Category::Length => task.run::<LengthUnit>(),
            Category::Weight => task.run::<WeightUnit>(),
            Category::Volume => task.run::<VolumeUnit>(),
            Category::Temperature => task.run::<TemperatureUnit>(),
        }
    }

    /// The category that has a unit spelled `unit`
    pub fn of_unit(unit: &str) -> Result<Category, CommandError> {
        Category::ALL
            .into_iter()
            .find(|category| category.dispatch(Recognizes(unit)))
            .ok_or_else(|| CommandError::UnknownUnit(unit.to_string()))
    }
}

struct CategoryName;

impl CategoryTask for CategoryName {
    type Output = &'static str;

    fn run<U: UnitCapability>(self) -> &'static str {
        U::CATEGORY
    }
}

struct Recognizes<'a>(&'a str);

impl CategoryTask for Recognizes<'_> {
    type Output = bool;

    fn run<U: UnitCapability>(self) -> bool {
        parse_unit::<U>(self.0).is_ok()
    }
}

impl FromStr for Category {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommandError::UnknownCategory(s.trim().to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
