//! YAML validation and normalisation

use serde_yaml::Value;

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

/// Re-emit YAML in canonical block style.
pub fn normalize(text: &str) -> Result<String> {
    let value: Value = serde_yaml::from_str(text)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// Convert a YAML document to pretty JSON. Mapping keys must be strings.
pub fn to_json(text: &str) -> Result<String> {
    let value: Value = serde_yaml::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

const OUTPUTS: [(&str, bool); 2] = [("yaml", true), ("json", false)];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("YAML to format")?;
    let out = if input.choice("output", true, &OUTPUTS)? {
        normalize(text)?
    } else {
        to_json(text)?
    };
    Ok(ToolOutput::new(out.trim_end()).with_notice("YAML is valid"))
}
