//! JSON validation, pretty-printing and minification

use serde_json::Value;

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

/// Parse and re-emit with two-space indentation. Key order is preserved.
pub fn format(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn minify(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}

const MODES: [(&str, bool); 2] = [("format", true), ("minify", false)];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("JSON to format")?;
    let out = if input.choice("mode", true, &MODES)? {
        format(text)?
    } else {
        minify(text)?
    };
    Ok(ToolOutput::new(out).with_notice("JSON is valid"))
}
