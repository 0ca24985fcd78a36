// Unit conversion
//
// Each unit carries a pure to-base/from-base function pair against its
// category's base unit; converting A -> B composes A -> base -> B.
// Temperature is affine, which is why these are functions, not factors.

use crate::error::{EngineError, EngineResult};

pub struct Unit {
    pub key: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub to_base: fn(f64) -> f64,
    pub from_base: fn(f64) -> f64,
}

pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub base_unit: &'static str,
    pub units: &'static [Unit],
}

macro_rules! factor_unit {
    ($key:literal, $name:literal, $symbol:literal, $factor:literal) => {
        Unit {
            key: $key,
            name: $name,
            symbol: $symbol,
            to_base: |v| v * $factor,
            from_base: |v| v / $factor,
        }
    };
}

pub static CATEGORIES: &[Category] = &[
    Category {
        key: "length",
        name: "Length",
        base_unit: "m",
        units: &[
            factor_unit!("m", "Meters", "m", 1.0),
            factor_unit!("km", "Kilometers", "km", 1000.0),
            factor_unit!("cm", "Centimeters", "cm", 0.01),
            factor_unit!("mm", "Millimeters", "mm", 0.001),
            factor_unit!("in", "Inches", "in", 0.0254),
            factor_unit!("ft", "Feet", "ft", 0.3048),
            factor_unit!("yd", "Yards", "yd", 0.9144),
            factor_unit!("mi", "Miles", "mi", 1609.344),
        ],
    },
    Category {
        key: "weight",
        name: "Weight",
        base_unit: "kg",
        units: &[
            factor_unit!("g", "Grams", "g", 0.001),
            factor_unit!("kg", "Kilograms", "kg", 1.0),
            factor_unit!("mg", "Milligrams", "mg", 0.000001),
            factor_unit!("lb", "Pounds", "lb", 0.453592),
            factor_unit!("oz", "Ounces", "oz", 0.0283495),
            factor_unit!("t", "Tons", "t", 1000.0),
        ],
    },
    Category {
        key: "volume",
        name: "Volume",
        base_unit: "L",
        units: &[
            factor_unit!("L", "Liters", "L", 1.0),
            factor_unit!("mL", "Milliliters", "mL", 0.001),
            factor_unit!("m3", "Cubic Meters", "m³", 1000.0),
            factor_unit!("gal", "Gallons", "gal", 3.78541),
            factor_unit!("qt", "Quarts", "qt", 0.946353),
            factor_unit!("pt", "Pints", "pt", 0.473176),
            factor_unit!("cup", "Cups", "c", 0.236588),
            factor_unit!("floz", "Fluid Ounces", "fl oz", 0.0295735),
        ],
    },
    Category {
        key: "temperature",
        name: "Temperature",
        base_unit: "°C",
        units: &[
            Unit {
                key: "C",
                name: "Celsius",
                symbol: "°C",
                to_base: |v| v,
                from_base: |v| v,
            },
            Unit {
                key: "F",
                name: "Fahrenheit",
                symbol: "°F",
                to_base: |v| (v - 32.0) * 5.0 / 9.0,
                from_base: |v| v * 9.0 / 5.0 + 32.0,
            },
            Unit {
                key: "K",
                name: "Kelvin",
                symbol: "K",
                to_base: |v| v - 273.15,
                from_base: |v| v + 273.15,
            },
        ],
    },
    Category {
        key: "area",
        name: "Area",
        base_unit: "m²",
        units: &[
            factor_unit!("m2", "Square Meters", "m²", 1.0),
            factor_unit!("km2", "Square Kilometers", "km²", 1000000.0),
            factor_unit!("ft2", "Square Feet", "ft²", 0.092903),
            factor_unit!("acre", "Acres", "acre", 4046.86),
        ],
    },
    Category {
        key: "speed",
        name: "Speed",
        base_unit: "m/s",
        units: &[
            factor_unit!("mps", "Meters per Second", "m/s", 1.0),
            Unit {
                key: "kph",
                name: "Kilometers per Hour",
                symbol: "km/h",
                to_base: |v| v / 3.6,
                from_base: |v| v * 3.6,
            },
            factor_unit!("mph", "Miles per Hour", "mph", 0.44704),
        ],
    },
    Category {
        key: "time",
        name: "Time",
        base_unit: "s",
        units: &[
            factor_unit!("s", "Seconds", "s", 1.0),
            factor_unit!("min", "Minutes", "min", 60.0),
            factor_unit!("h", "Hours", "h", 3600.0),
            factor_unit!("d", "Days", "d", 86400.0),
        ],
    },
];

pub fn find_category(key: &str) -> EngineResult<&'static Category> {
    CATEGORIES
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| EngineError::UnknownCategory {
            name: key.to_string(),
        })
}

pub fn find_unit(category: &'static Category, key: &str) -> EngineResult<&'static Unit> {
    category
        .units
        .iter()
        .find(|u| u.key == key)
        .ok_or_else(|| EngineError::UnknownUnit {
            category: category.key.to_string(),
            unit: key.to_string(),
        })
}

/// Convert within a named category: from -> base -> to
pub fn convert(category_key: &str, from: &str, to: &str, value: f64) -> EngineResult<f64> {
    let category = find_category(category_key)?;
    let from_unit = find_unit(category, from)?;
    let to_unit = find_unit(category, to)?;

    let base = (from_unit.to_base)(value);
    Ok((to_unit.from_base)(base))
}

/// Convert between two units, inferring the category that holds both.
/// Unit keys are unique across categories, so the first category that
/// knows the source unit decides.
pub fn convert_inferred(from: &str, to: &str, value: f64) -> EngineResult<f64> {
    for category in CATEGORIES {
        if category.units.iter().any(|u| u.key == from) {
            return convert(category.key, from, to, value);
        }
    }
    Err(EngineError::General(format!("unknown unit '{}'", from)))
}
