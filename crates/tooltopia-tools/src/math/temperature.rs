//! Temperature conversion

use std::fmt;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

const ABSOLUTE_ZERO_C: f64 = -273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value,
            Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Scale::Kelvin => value + ABSOLUTE_ZERO_C,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Scale::Celsius => celsius,
            Scale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Scale::Kelvin => celsius - ABSOLUTE_ZERO_C,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        };
        f.write_str(name)
    }
}

/// Convert `value` between scales. Values below absolute zero are rejected.
pub fn convert(value: f64, from: Scale, to: Scale) -> Result<f64> {
    let celsius = from.to_celsius(value);
    // Allow for rounding noise right at the limit
    if celsius < ABSOLUTE_ZERO_C - 1e-9 {
        return Err(Error::invalid(
            "temperature",
            format!("{value} {}", from.symbol()),
            "a value at or above absolute zero",
        ));
    }
    Ok(to.from_celsius(celsius))
}

const SCALES: [(&str, Scale); 6] = [
    ("celsius", Scale::Celsius),
    ("c", Scale::Celsius),
    ("fahrenheit", Scale::Fahrenheit),
    ("f", Scale::Fahrenheit),
    ("kelvin", Scale::Kelvin),
    ("k", Scale::Kelvin),
];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let raw = input.require_text("temperature")?.trim();
    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| Error::invalid("temperature", raw, "a number"))?;
    let from = input.choice("from", Scale::Celsius, &SCALES)?;

    let lines = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin]
        .into_iter()
        .map(|to| {
            convert(value, from, to).map(|v| format!("{to}: {v:.2} {}", to.symbol()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ToolOutput::new(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, Scale::Celsius, Scale::Fahrenheit, 212.0)]
    #[case(32.0, Scale::Fahrenheit, Scale::Celsius, 0.0)]
    #[case(0.0, Scale::Kelvin, Scale::Celsius, -273.15)]
    #[case(-40.0, Scale::Celsius, Scale::Fahrenheit, -40.0)]
    #[case(300.0, Scale::Kelvin, Scale::Kelvin, 300.0)]
    fn test_convert(#[case] value: f64, #[case] from: Scale, #[case] to: Scale, #[case] expected: f64) {
        let got = convert(value, from, to).unwrap();
        assert!((got - expected).abs() < 1e-9, "{got} != {expected}");
    }

    #[test]
    fn test_below_absolute_zero() {
        assert!(convert(-1.0, Scale::Kelvin, Scale::Celsius).is_err());
        assert!(convert(-500.0, Scale::Fahrenheit, Scale::Kelvin).is_err());
    }

    #[test]
    fn test_run_prints_all_scales() {
        let out = run(&ToolInput::new("100").with_option("from", "C")).unwrap();
        assert_eq!(
            out.text,
            "Celsius: 100.00 °C\nFahrenheit: 212.00 °F\nKelvin: 373.15 K"
        );
    }

    #[test]
    fn test_run_rejects_non_numbers() {
        assert!(run(&ToolInput::new("warm")).is_err());
        assert!(run(&ToolInput::new("NaN")).is_err());
    }
}
