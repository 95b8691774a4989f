//! QR code generation
//!
//! The payload is encoded at error-correction level M with the smallest
//! version that fits. Output is either a Unicode block rendering for the
//! terminal or an SVG document sized and coloured from the options.

use qrcode::QrCode;
use qrcode::render::{svg, unicode};

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};
use crate::web::color::Rgb;

pub const DEFAULT_SIZE: u32 = 200;
pub const MIN_SIZE: u32 = 100;
pub const MAX_SIZE: u32 = 400;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadKind {
    #[default]
    Url,
    Text,
    Email,
    Phone,
}

impl PayloadKind {
    /// Wrap raw content in the URI scheme this kind needs.
    pub fn payload(self, content: &str) -> String {
        match self {
            PayloadKind::Url | PayloadKind::Text => content.to_string(),
            PayloadKind::Email => format!("mailto:{content}"),
            PayloadKind::Phone => format!("tel:{content}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QrFormat {
    /// Half-height block characters, two module rows per line
    #[default]
    Text,
    Svg,
}

/// How a symbol is drawn. Size and colours only apply to SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    pub format: QrFormat,
    pub size: u32,
    pub foreground: String,
    pub background: String,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            format: QrFormat::Text,
            size: DEFAULT_SIZE,
            foreground: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

pub fn encode(payload: &str) -> Result<QrCode> {
    QrCode::new(payload.as_bytes()).map_err(|e| Error::QrEncode {
        message: e.to_string(),
    })
}

pub fn render(code: &QrCode, style: &QrStyle) -> String {
    match style.format {
        // Inverted so the symbol reads on dark terminal backgrounds
        QrFormat::Text => code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build(),
        QrFormat::Svg => code
            .render::<svg::Color<'_>>()
            .min_dimensions(style.size, style.size)
            .dark_color(svg::Color(&style.foreground))
            .light_color(svg::Color(&style.background))
            .build(),
    }
}

const KINDS: [(&str, PayloadKind); 4] = [
    ("url", PayloadKind::Url),
    ("text", PayloadKind::Text),
    ("email", PayloadKind::Email),
    ("phone", PayloadKind::Phone),
];

const FORMATS: [(&str, QrFormat); 2] = [("text", QrFormat::Text), ("svg", QrFormat::Svg)];

fn hex_option(input: &ToolInput, name: &str, default: &str) -> Result<String> {
    let raw = input.option(name).unwrap_or(default);
    Rgb::from_hex(raw)
        .map(|rgb| rgb.to_hex().to_uppercase())
        .ok_or_else(|| Error::invalid(name, raw, "a hex colour such as #000000"))
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let content = input.require_text("content for the QR code")?;
    let kind = input.choice("kind", PayloadKind::Url, &KINDS)?;
    let defaults = QrStyle::default();
    let style = QrStyle {
        format: input.choice("format", defaults.format, &FORMATS)?,
        size: input.number("size", defaults.size, MIN_SIZE..=MAX_SIZE)?,
        foreground: hex_option(input, "foreground", &defaults.foreground)?,
        background: hex_option(input, "background", &defaults.background)?,
    };

    let payload = kind.payload(content.trim());
    let code = encode(&payload)?;
    let notice = format!(
        "QR code generated successfully ({0}x{0} modules)",
        code.width()
    );
    Ok(ToolOutput::new(render(&code, &style)).with_notice(notice))
}
