use serde::Serialize;
use std::fmt;

/// Degree Celsius sign (U+2103).
pub const DEG_C: &str = "\u{2103}";
/// Degree Fahrenheit sign (U+2109).
pub const DEG_F: &str = "\u{2109}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => DEG_C,
            Scale::Fahrenheit => DEG_F,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which of the two formulas to apply. The boolean form is the switch state:
/// `true` means Fahrenheit to Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Direction {
    pub fn from_flag(fahrenheit_to_celsius: bool) -> Self {
        if fahrenheit_to_celsius {
            Direction::FahrenheitToCelsius
        } else {
            Direction::CelsiusToFahrenheit
        }
    }

    pub fn is_fahrenheit_to_celsius(self) -> bool {
        matches!(self, Direction::FahrenheitToCelsius)
    }

    pub fn from_scale(self) -> Scale {
        match self {
            Direction::CelsiusToFahrenheit => Scale::Celsius,
            Direction::FahrenheitToCelsius => Scale::Fahrenheit,
        }
    }

    pub fn to_scale(self) -> Scale {
        match self {
            Direction::CelsiusToFahrenheit => Scale::Fahrenheit,
            Direction::FahrenheitToCelsius => Scale::Celsius,
        }
    }

    pub fn reversed(self) -> Self {
        Self::from_flag(!self.is_fahrenheit_to_celsius())
    }
}

impl From<bool> for Direction {
    fn from(fahrenheit_to_celsius: bool) -> Self {
        Self::from_flag(fahrenheit_to_celsius)
    }
}

/// One evaluation of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub input: f64,
    pub output: f64,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_flag() {
        assert_eq!(Direction::from(true), Direction::FahrenheitToCelsius);
        assert_eq!(Direction::from(false), Direction::CelsiusToFahrenheit);
        assert_eq!(Direction::default(), Direction::CelsiusToFahrenheit);
    }

    #[test]
    fn test_direction_scales() {
        let d = Direction::FahrenheitToCelsius;
        assert_eq!(d.from_scale(), Scale::Fahrenheit);
        assert_eq!(d.to_scale(), Scale::Celsius);
        assert_eq!(d.reversed(), Direction::CelsiusToFahrenheit);
        assert_eq!(Scale::Celsius.to_string(), "℃");
        assert_eq!(Scale::Fahrenheit.symbol(), "℉");
    }

    #[test]
    fn test_conversion_serializes_direction_as_snake_case() {
        let c = Conversion {
            input: 32.0,
            output: 0.0,
            direction: Direction::FahrenheitToCelsius,
        };
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["direction"], "fahrenheit_to_celsius");
        assert_eq!(json["input"], 32.0);
    }
}
