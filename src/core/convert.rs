use crate::domain::model::{Conversion, Direction};

/// Applies one of the two linear formulas.
///
/// Accepts either a [`Direction`] or the raw switch flag (`true` is
/// Fahrenheit to Celsius). There is no range check: temperatures below
/// absolute zero convert like any other value, and NaN or infinities
/// propagate through the arithmetic.
pub fn convert(value: f64, direction: impl Into<Direction>) -> f64 {
    match direction.into() {
        Direction::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
        Direction::CelsiusToFahrenheit => 9.0 / 5.0 * value + 32.0,
    }
}

pub fn evaluate(value: f64, direction: impl Into<Direction>) -> Conversion {
    let direction = direction.into();
    Conversion {
        input: value,
        output: convert(value, direction),
        direction,
    }
}
