//! Regular expression tester

use std::fmt::Write as _;

use regex::RegexBuilder;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Byte offsets into the subject text
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub case_insensitive: bool,
    pub multiline: bool,
}

pub fn find_matches(pattern: &str, text: &str, flags: RegexFlags) -> Result<Vec<Match>> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multiline)
        .build()?;
    let names: Vec<Option<&str>> = re.capture_names().skip(1).collect();

    Ok(re
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let groups = names
                .iter()
                .enumerate()
                .map(|(i, name)| Group {
                    name: name.map(str::to_string),
                    value: caps.get(i + 1).map(|m| m.as_str().to_string()),
                })
                .collect();
            Some(Match {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                groups,
            })
        })
        .collect())
}

fn render(matches: &[Match]) -> String {
    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        let _ = writeln!(out, "Match {} at {}..{}: {:?}", i + 1, m.start, m.end, m.text);
        for (g, group) in m.groups.iter().enumerate() {
            let label = group.name.clone().unwrap_or_else(|| (g + 1).to_string());
            match &group.value {
                Some(value) => {
                    let _ = writeln!(out, "  Group {label}: {value:?}");
                }
                None => {
                    let _ = writeln!(out, "  Group {label}: (no match)");
                }
            }
        }
    }
    out.trim_end().to_string()
}

/// Main text is the subject; the pattern comes from the `pattern` option.
pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to test")?;
    let pattern = input.require_option("pattern")?;
    if pattern.is_empty() {
        return Err(Error::invalid("pattern", pattern, "a non-empty pattern"));
    }
    let flags = RegexFlags {
        case_insensitive: input.flag("case_insensitive", false)?,
        multiline: input.flag("multiline", false)?,
    };
    let matches = find_matches(pattern, text, flags)?;
    if matches.is_empty() {
        return Ok(ToolOutput::new("No matches found").with_notice("Found 0 match(es)"));
    }
    let notice = format!("Found {} match(es)", matches.len());
    Ok(ToolOutput::new(render(&matches)).with_notice(notice))
}
