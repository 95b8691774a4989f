//! Greatest common divisor and least common multiple

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `None` on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Parse positive integers separated by commas and/or whitespace.
pub fn parse_numbers(text: &str) -> Result<Vec<u64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| Error::invalid("numbers", part, "positive integers"))
        })
        .collect()
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("numbers")?;
    let numbers = parse_numbers(text)?;
    if numbers.len() < 2 {
        return Err(Error::invalid("numbers", text, "at least two positive integers"));
    }
    let g = numbers.iter().copied().fold(0, gcd);
    let l = numbers
        .iter()
        .try_fold(1u64, |acc, n| lcm(acc, *n))
        .ok_or_else(|| Error::invalid("numbers", text, "values whose LCM fits in 64 bits"))?;
    Ok(ToolOutput::new(format!("GCD: {g}\nLCM: {l}")))
}
