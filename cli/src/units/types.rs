use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
    Digital,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 6] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
        UnitCategory::Time,
        UnitCategory::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Volume => "volume",
            UnitCategory::Time => "time",
            UnitCategory::Digital => "digital",
        }
    }

    /// Member units in display order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitCategory::Length => &[
                Unit::Meter,
                Unit::Kilometer,
                Unit::Mile,
                Unit::Foot,
                Unit::Inch,
            ],
            UnitCategory::Weight => &[Unit::Kilogram, Unit::Gram, Unit::Pound, Unit::Ounce],
            UnitCategory::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
            UnitCategory::Volume => &[Unit::Liter, Unit::Milliliter, Unit::Gallon, Unit::Cup],
            UnitCategory::Time => &[Unit::Second, Unit::Minute, Unit::Hour, Unit::Day],
            UnitCategory::Digital => &[
                Unit::Byte,
                Unit::Kilobyte,
                Unit::Megabyte,
                Unit::Gigabyte,
            ],
        }
    }

    /// The (from, to) selection used when the category is first chosen
    pub fn default_pair(&self) -> (Unit, Unit) {
        let units = self.units();
        (units[0], units[1])
    }

    pub fn contains(&self, unit: Unit) -> bool {
        unit.category() == *self
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // length
    Meter,
    Kilometer,
    Mile,
    Foot,
    Inch,
    // weight
    Kilogram,
    Gram,
    Pound,
    Ounce,
    // temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // volume
    Liter,
    Milliliter,
    Gallon,
    Cup,
    // time
    Second,
    Minute,
    Hour,
    Day,
    // digital
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Mile => "mile",
            Unit::Foot => "foot",
            Unit::Inch => "inch",
            Unit::Kilogram => "kilogram",
            Unit::Gram => "gram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Liter => "liter",
            Unit::Milliliter => "milliliter",
            Unit::Gallon => "gallon",
            Unit::Cup => "cup",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Byte => "byte",
            Unit::Kilobyte => "kilobyte",
            Unit::Megabyte => "megabyte",
            Unit::Gigabyte => "gigabyte",
        }
    }

    /// The single category this unit belongs to
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Meter | Unit::Kilometer | Unit::Mile | Unit::Foot | Unit::Inch => {
                UnitCategory::Length
            }
            Unit::Kilogram | Unit::Gram | Unit::Pound | Unit::Ounce => UnitCategory::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => UnitCategory::Temperature,
            Unit::Liter | Unit::Milliliter | Unit::Gallon | Unit::Cup => UnitCategory::Volume,
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => UnitCategory::Time,
            Unit::Byte | Unit::Kilobyte | Unit::Megabyte | Unit::Gigabyte => {
                UnitCategory::Digital
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitCategory::ALL
            .iter()
            .flat_map(|c| c.units().iter().copied())
            .find(|u| u.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
