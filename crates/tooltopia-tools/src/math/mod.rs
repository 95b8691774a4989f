//! Math and conversion tools

pub mod gcd;
pub mod temperature;
