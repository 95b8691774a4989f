//! Colour conversion between HEX, RGB and HSL

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("Invalid hex colour regex")
});
static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("Invalid rgb colour regex")
});
static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})%?\s*,\s*(\d{1,3})%?\s*\)$")
        .expect("Invalid hsl colour regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees (0-360), saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the `#RGB` shorthand.
    pub fn from_hex(value: &str) -> Option<Self> {
        let caps = HEX.captures(value.trim())?;
        let digits = &caps[1];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: (h * 60.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h);
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h {
            0..60 => (c, x, 0.0),
            60..120 => (x, c, 0.0),
            120..180 => (0.0, c, x),
            180..240 => (0.0, x, c),
            240..300 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

fn component(raw: &str, max: u16, value: &str) -> Result<u16> {
    raw.parse::<u16>()
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| Error::invalid("color", value, format!("components between 0 and {max}")))
}

/// Parse any of the three notations into RGB.
pub fn parse_color(value: &str) -> Result<Rgb> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(rgb) = Rgb::from_hex(trimmed) {
        return Ok(rgb);
    }
    if let Some(caps) = RGB.captures(&lower) {
        return Ok(Rgb::new(
            component(&caps[1], 255, value)? as u8,
            component(&caps[2], 255, value)? as u8,
            component(&caps[3], 255, value)? as u8,
        ));
    }
    if let Some(caps) = HSL.captures(&lower) {
        let hsl = Hsl {
            h: component(&caps[1], 360, value)?,
            s: component(&caps[2], 100, value)? as u8,
            l: component(&caps[3], 100, value)? as u8,
        };
        return Ok(hsl.to_rgb());
    }
    Err(Error::invalid(
        "color",
        value,
        "#RRGGBB, rgb(r, g, b) or hsl(h, s%, l%)",
    ))
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let value = input.require_text("color value")?;
    let rgb = parse_color(value)?;
    let text = format!("HEX: {}\nRGB: {}\nHSL: {}", rgb.to_hex(), rgb, rgb.to_hsl());
    Ok(ToolOutput::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_indigo() {
        let rgb = Rgb::from_hex("#6366F1").unwrap();
        assert_eq!(rgb, Rgb::new(99, 102, 241));
        assert_eq!(rgb.to_hsl(), Hsl { h: 239, s: 84, l: 67 });
        assert_eq!(rgb.to_hex(), "#6366f1");
    }

    #[rstest]
    #[case(Rgb::new(255, 0, 0), Hsl { h: 0, s: 100, l: 50 })]
    #[case(Rgb::new(0, 255, 0), Hsl { h: 120, s: 100, l: 50 })]
    #[case(Rgb::new(0, 0, 255), Hsl { h: 240, s: 100, l: 50 })]
    #[case(Rgb::new(128, 128, 128), Hsl { h: 0, s: 0, l: 50 })]
    #[case(Rgb::new(255, 255, 255), Hsl { h: 0, s: 0, l: 100 })]
    fn test_rgb_hsl_primaries(#[case] rgb: Rgb, #[case] hsl: Hsl) {
        assert_eq!(rgb.to_hsl(), hsl);
        assert_eq!(hsl.to_rgb(), rgb);
    }

    #[rstest]
    #[case("#fff", Rgb::new(255, 255, 255))]
    #[case("00ff00", Rgb::new(0, 255, 0))]
    #[case("rgb(10, 20, 30)", Rgb::new(10, 20, 30))]
    #[case("RGB(10,20,30)", Rgb::new(10, 20, 30))]
    #[case("hsl(0, 100%, 50%)", Rgb::new(255, 0, 0))]
    fn test_parse_color(#[case] input: &str, #[case] expected: Rgb) {
        assert_eq!(parse_color(input).unwrap(), expected);
    }

    #[rstest]
    #[case("#12345")]
    #[case("rgb(256, 0, 0)")]
    #[case("hsl(361, 0%, 0%)")]
    #[case("blue")]
    fn test_parse_color_rejects(#[case] input: &str) {
        assert!(parse_color(input).is_err());
    }

    #[test]
    fn test_run_prints_all_notations() {
        let out = run(&ToolInput::new("#ff0000")).unwrap();
        insta::assert_snapshot!(out.text, @r"
        HEX: #ff0000
        RGB: rgb(255, 0, 0)
        HSL: hsl(0, 100%, 50%)
        ");
    }
}
