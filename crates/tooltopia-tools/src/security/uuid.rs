//! Random (v4) UUID generation

use ::uuid::Uuid;

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

pub const MAX_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidFormat {
    pub uppercase: bool,
    pub hyphens: bool,
    pub braces: bool,
}

impl Default for UuidFormat {
    fn default() -> Self {
        Self {
            uppercase: false,
            hyphens: true,
            braces: false,
        }
    }
}

pub fn format_uuid(id: Uuid, format: UuidFormat) -> String {
    let mut text = if format.hyphens {
        id.hyphenated().to_string()
    } else {
        id.simple().to_string()
    };
    if format.uppercase {
        text.make_ascii_uppercase();
    }
    if format.braces {
        text = format!("{{{text}}}");
    }
    text
}

pub fn generate(count: usize, format: UuidFormat) -> Vec<String> {
    (0..count).map(|_| format_uuid(Uuid::new_v4(), format)).collect()
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let count = input.number("count", 1usize, 1..=MAX_COUNT)?;
    let defaults = UuidFormat::default();
    let format = UuidFormat {
        uppercase: input.flag("uppercase", defaults.uppercase)?,
        hyphens: input.flag("hyphens", defaults.hyphens)?,
        braces: input.flag("braces", defaults.braces)?,
    };
    let ids = generate(count, format);
    Ok(ToolOutput::new(ids.join("\n")).with_notice(format!("Generated {count} UUID(s)")))
}
