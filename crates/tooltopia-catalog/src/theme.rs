//! Colour tokens used to theme categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme colour assigned to a category.
///
/// Serialized with its token name (e.g. `tool-purple`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    #[serde(rename = "tool-purple")]
    Purple,
    #[serde(rename = "tool-blue")]
    Blue,
    #[serde(rename = "tool-green")]
    Green,
    #[serde(rename = "tool-red")]
    Red,
    #[serde(rename = "tool-yellow")]
    Yellow,
    #[serde(rename = "tool-pink")]
    Pink,
    #[serde(rename = "tool-indigo")]
    Indigo,
}

impl ColorToken {
    /// Colour used when a token is not recognized.
    pub const FALLBACK: ColorToken = ColorToken::Purple;

    pub const ALL: [ColorToken; 7] = [
        ColorToken::Purple,
        ColorToken::Blue,
        ColorToken::Green,
        ColorToken::Red,
        ColorToken::Yellow,
        ColorToken::Pink,
        ColorToken::Indigo,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    /// Resolve a token, falling back to [`ColorToken::FALLBACK`].
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::FALLBACK)
    }

    pub fn token(&self) -> &'static str {
        match self {
            ColorToken::Purple => "tool-purple",
            ColorToken::Blue => "tool-blue",
            ColorToken::Green => "tool-green",
            ColorToken::Red => "tool-red",
            ColorToken::Yellow => "tool-yellow",
            ColorToken::Pink => "tool-pink",
            ColorToken::Indigo => "tool-indigo",
        }
    }

    /// RGB triple for terminals that support true colour.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorToken::Purple => (0x8b, 0x5c, 0xf6),
            ColorToken::Blue => (0x3b, 0x82, 0xf6),
            ColorToken::Green => (0x10, 0xb9, 0x81),
            ColorToken::Red => (0xef, 0x44, 0x44),
            ColorToken::Yellow => (0xf5, 0x9e, 0x0b),
            ColorToken::Pink => (0xec, 0x48, 0x99),
            ColorToken::Indigo => (0x63, 0x66, 0xf1),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for color in ColorToken::ALL {
            assert_eq!(ColorToken::from_token(color.token()), Some(color));
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_purple() {
        assert_eq!(ColorToken::resolve("tool-orange"), ColorToken::Purple);
    }

    #[test]
    fn test_serde_uses_token() {
        let json = serde_json::to_string(&ColorToken::Indigo).unwrap();
        assert_eq!(json, "\"tool-indigo\"");
        let back: ColorToken = serde_json::from_str("\"tool-pink\"").unwrap();
        assert_eq!(back, ColorToken::Pink);
    }
}
