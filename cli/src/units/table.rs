use crate::units::types::{Unit, UnitCategory};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// A directed conversion between two units of the same category
pub type Conversion = fn(f64) -> f64;

type Edges = HashMap<(Unit, Unit), Conversion>;

lazy_static! {
    /// Explicit directed pairs only. A pair that is not listed has no path,
    /// even if it could be reached by chaining two listed pairs.
    static ref CONVERSIONS: HashMap<UnitCategory, Edges> = {
        use Unit::*;

        let mut table = HashMap::new();

        table.insert(
            UnitCategory::Length,
            edges(&[
                ((Meter, Kilometer), |v| v / 1000.0),
                ((Kilometer, Meter), |v| v * 1000.0),
                ((Meter, Mile), |v| v / 1609.34),
                ((Mile, Meter), |v| v * 1609.34),
                ((Meter, Foot), |v| v * 3.28084),
                ((Foot, Meter), |v| v / 3.28084),
                ((Meter, Inch), |v| v * 39.3701),
                ((Inch, Meter), |v| v / 39.3701),
            ]),
        );

        table.insert(
            UnitCategory::Weight,
            edges(&[
                ((Kilogram, Gram), |v| v * 1000.0),
                ((Gram, Kilogram), |v| v / 1000.0),
                ((Kilogram, Pound), |v| v * 2.20462),
                ((Pound, Kilogram), |v| v / 2.20462),
                ((Kilogram, Ounce), |v| v * 35.274),
                ((Ounce, Kilogram), |v| v / 35.274),
            ]),
        );

        // Affine, not purely multiplicative
        table.insert(
            UnitCategory::Temperature,
            edges(&[
                ((Celsius, Fahrenheit), |v| (v * 9.0) / 5.0 + 32.0),
                ((Fahrenheit, Celsius), |v| ((v - 32.0) * 5.0) / 9.0),
                ((Celsius, Kelvin), |v| v + 273.15),
                ((Kelvin, Celsius), |v| v - 273.15),
            ]),
        );

        table.insert(
            UnitCategory::Volume,
            edges(&[
                ((Liter, Milliliter), |v| v * 1000.0),
                ((Milliliter, Liter), |v| v / 1000.0),
                ((Liter, Gallon), |v| v / 3.78541),
                ((Gallon, Liter), |v| v * 3.78541),
                ((Liter, Cup), |v| v * 4.22675),
                ((Cup, Liter), |v| v / 4.22675),
            ]),
        );

        table.insert(
            UnitCategory::Time,
            edges(&[
                ((Second, Minute), |v| v / 60.0),
                ((Minute, Second), |v| v * 60.0),
                ((Minute, Hour), |v| v / 60.0),
                ((Hour, Minute), |v| v * 60.0),
                ((Hour, Day), |v| v / 24.0),
                ((Day, Hour), |v| v * 24.0),
            ]),
        );

        table.insert(
            UnitCategory::Digital,
            edges(&[
                ((Byte, Kilobyte), |v| v / 1024.0),
                ((Kilobyte, Byte), |v| v * 1024.0),
                ((Kilobyte, Megabyte), |v| v / 1024.0),
                ((Megabyte, Kilobyte), |v| v * 1024.0),
                ((Megabyte, Gigabyte), |v| v / 1024.0),
                ((Gigabyte, Megabyte), |v| v * 1024.0),
            ]),
        );

        table
    };
}

fn edges(pairs: &[((Unit, Unit), Conversion)]) -> Edges {
    pairs.iter().copied().collect()
}

/// Find the conversion for an explicit `(from, to)` pair within a category
pub fn lookup(category: UnitCategory, from: Unit, to: Unit) -> Option<Conversion> {
    CONVERSIONS
        .get(&category)
        .and_then(|edges| edges.get(&(from, to)))
        .copied()
}

/// Every tabled pair for a category, in no particular order
pub fn pairs(category: UnitCategory) -> Vec<(Unit, Unit)> {
    CONVERSIONS
        .get(&category)
        .map(|edges| edges.keys().copied().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_table() {
        for category in UnitCategory::ALL {
            assert!(!pairs(category).is_empty(), "no edges for {}", category);
        }
    }

    #[test]
    fn test_edges_stay_inside_their_category() {
        for category in UnitCategory::ALL {
            for (from, to) in pairs(category) {
                assert!(category.contains(from) && category.contains(to));
                assert_ne!(from, to);
            }
        }
    }

    #[test]
    fn test_lookup_is_scoped_by_category() {
        assert!(lookup(UnitCategory::Length, Unit::Meter, Unit::Kilometer).is_some());
        assert!(lookup(UnitCategory::Weight, Unit::Meter, Unit::Kilometer).is_none());
    }

    #[test]
    fn test_no_transitive_closure() {
        // kilometer -> meter -> mile exists, kilometer -> mile does not
        assert!(lookup(UnitCategory::Length, Unit::Kilometer, Unit::Mile).is_none());
        assert!(lookup(UnitCategory::Temperature, Unit::Fahrenheit, Unit::Kelvin).is_none());
        assert!(lookup(UnitCategory::Digital, Unit::Byte, Unit::Megabyte).is_none());
    }
}
