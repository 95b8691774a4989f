//! Password generation and strength scoring

use std::fmt;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    fn classes(&self) -> Vec<&'static [u8]> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, chars)| chars.as_bytes())
        .collect()
    }
}

/// Generate a password with at least one character from every selected
/// class, shuffled so the guaranteed characters can land anywhere.
pub fn generate(rng: &mut impl Rng, options: &PasswordOptions) -> Result<String> {
    let classes = options.classes();
    if classes.is_empty() {
        return Err(Error::NoCharacterClass);
    }
    let pool: Vec<u8> = classes.concat();

    let mut chars: Vec<u8> = classes
        .iter()
        .filter_map(|class| class.choose(rng).copied())
        .collect();
    while chars.len() < options.length {
        if let Some(c) = pool.choose(rng) {
            chars.push(*c);
        }
    }
    chars.shuffle(rng);
    // Every class is ASCII
    Ok(chars.into_iter().map(char::from).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Strength::Strong,
            60..80 => Strength::Good,
            40..60 => Strength::Fair,
            _ => Strength::Weak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Score 0-100: a length tier plus 25 per character class present.
pub fn strength_score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score: u32 = match length {
        12.. => 25,
        8..12 => 15,
        6..8 => 10,
        _ => 5,
    };
    let checks: [fn(&char) -> bool; 4] = [
        char::is_ascii_uppercase,
        char::is_ascii_lowercase,
        char::is_ascii_digit,
        |c| !c.is_ascii_alphanumeric(),
    ];
    for check in checks {
        if password.chars().any(|c| check(&c)) {
            score += 25;
        }
    }
    score.min(100) as u8
}

fn options_from(input: &ToolInput) -> Result<PasswordOptions> {
    let defaults = PasswordOptions::default();
    Ok(PasswordOptions {
        length: input.number("length", defaults.length, MIN_LENGTH..=MAX_LENGTH)?,
        uppercase: input.flag("uppercase", defaults.uppercase)?,
        lowercase: input.flag("lowercase", defaults.lowercase)?,
        digits: input.flag("digits", defaults.digits)?,
        symbols: input.flag("symbols", defaults.symbols)?,
    })
}

pub fn run_generator(input: &ToolInput) -> Result<ToolOutput> {
    let options = options_from(input)?;
    let password = generate(&mut rand::rng(), &options)?;
    let score = strength_score(&password);
    let notice = format!("Strength: {} ({score}/100)", Strength::from_score(score));
    Ok(ToolOutput::new(password).with_notice(notice))
}

pub fn run_checker(input: &ToolInput) -> Result<ToolOutput> {
    // Spaces count, so only an entirely empty field is rejected
    if input.text.is_empty() {
        return Err(Error::EmptyInput {
            what: "password to check",
        });
    }
    let score = strength_score(&input.text);
    let text = format!("Score: {score}/100\nStrength: {}", Strength::from_score(score));
    Ok(ToolOutput::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[test]
    fn test_generate_length_and_classes() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in [MIN_LENGTH, DEFAULT_LENGTH, MAX_LENGTH] {
            let options = PasswordOptions {
                length,
                ..PasswordOptions::default()
            };
            let password = generate(&mut rng, &options).unwrap();
            assert_eq!(password.len(), length);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_generate_single_class() {
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        let password = generate(&mut StdRng::seed_from_u64(1), &options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_requires_a_class() {
        let options = PasswordOptions {
            length: 8,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        };
        assert!(matches!(
            generate(&mut StdRng::seed_from_u64(1), &options),
            Err(Error::NoCharacterClass)
        ));
    }

    #[rstest]
    #[case("", 5, Strength::Weak)]
    #[case("abc", 30, Strength::Weak)]
    #[case("abcdef", 35, Strength::Weak)]
    #[case("abcdefgh1", 65, Strength::Good)]
    #[case("Abcdefgh", 65, Strength::Good)]
    #[case("abcdefghijkl", 50, Strength::Fair)]
    #[case("Abcdefghijk1", 100, Strength::Strong)]
    #[case("Abcdefghij1!", 100, Strength::Strong)]
    fn test_strength(#[case] password: &str, #[case] score: u8, #[case] label: Strength) {
        assert_eq!(strength_score(password), score);
        assert_eq!(Strength::from_score(score), label);
    }

    #[test]
    fn test_run_generator_rejects_out_of_range_length() {
        let input = ToolInput::new("").with_option("length", "33");
        assert!(matches!(run_generator(&input), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_run_checker() {
        let out = run_checker(&ToolInput::new("Abcdefgh")).unwrap();
        assert_eq!(out.text, "Score: 65/100\nStrength: Good");
    }
}
