//! Line diff between two texts
//!
//! Two strategies are available. [`DiffMode::Positional`] compares line `i`
//! of the left text with line `i` of the right text, so an inserted line
//! shows every following line as changed. [`DiffMode::Myers`] aligns the
//! texts on their longest common subsequence first.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use similar::{Algorithm, ChangeTag, TextDiff};

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiffMode {
    #[default]
    Positional,
    Myers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub case_sensitive: bool,
    pub ignore_whitespace: bool,
    pub mode: DiffMode,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            ignore_whitespace: false,
            mode: DiffMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "line", rename_all = "lowercase")]
pub enum DiffLine {
    Same(String),
    Removed(String),
    Added(String),
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffLine::Same(line) => write!(f, "  {line}"),
            DiffLine::Removed(line) => write!(f, "- {line}"),
            DiffLine::Added(line) => write!(f, "+ {line}"),
        }
    }
}

fn prepare(text: &str, options: &DiffOptions) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            let line = if options.case_sensitive {
                line.to_string()
            } else {
                line.to_lowercase()
            };
            if options.ignore_whitespace {
                WHITESPACE.replace_all(line.trim(), " ").into_owned()
            } else {
                line
            }
        })
        .collect()
}

fn positional(left: &[String], right: &[String]) -> Vec<DiffLine> {
    let mut lines = Vec::new();
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map(String::as_str).unwrap_or_default();
        let r = right.get(i).map(String::as_str).unwrap_or_default();
        if l == r {
            lines.push(DiffLine::Same(l.to_string()));
            continue;
        }
        // An empty side means "no line here", not "an empty line"
        if !l.is_empty() {
            lines.push(DiffLine::Removed(l.to_string()));
        }
        if !r.is_empty() {
            lines.push(DiffLine::Added(r.to_string()));
        }
    }
    lines
}

fn myers(left: &[String], right: &[String]) -> Vec<DiffLine> {
    let left: Vec<&str> = left.iter().map(String::as_str).collect();
    let right: Vec<&str> = right.iter().map(String::as_str).collect();
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&left, &right);

    diff.iter_all_changes()
        .map(|change| {
            let line = change.value().to_string();
            match change.tag() {
                ChangeTag::Equal => DiffLine::Same(line),
                ChangeTag::Delete => DiffLine::Removed(line),
                ChangeTag::Insert => DiffLine::Added(line),
            }
        })
        .collect()
}

/// Compare `left` with `right` line by line.
pub fn compare(left: &str, right: &str, options: &DiffOptions) -> Vec<DiffLine> {
    let left = prepare(left, options);
    let right = prepare(right, options);
    match options.mode {
        DiffMode::Positional => positional(&left, &right),
        DiffMode::Myers => myers(&left, &right),
    }
}

/// Pair diff lines into two columns. A removal directly followed by an
/// addition shares a row; otherwise the missing side is `None`.
pub fn side_by_side(lines: &[DiffLine]) -> Vec<(Option<&str>, Option<&str>)> {
    let mut rows = Vec::new();
    let mut iter = lines.iter().peekable();
    while let Some(line) = iter.next() {
        match line {
            DiffLine::Same(text) => rows.push((Some(text.as_str()), Some(text.as_str()))),
            DiffLine::Removed(text) => {
                if let Some(DiffLine::Added(added)) = iter.peek() {
                    rows.push((Some(text.as_str()), Some(added.as_str())));
                    iter.next();
                } else {
                    rows.push((Some(text.as_str()), None));
                }
            }
            DiffLine::Added(text) => rows.push((None, Some(text.as_str()))),
        }
    }
    rows
}

fn render_columns(rows: &[(Option<&str>, Option<&str>)]) -> String {
    let width = rows
        .iter()
        .filter_map(|(left, _)| left.map(|l| l.chars().count()))
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(left, right)| {
            let row = format!("{:<width$} | {}", left.unwrap_or(""), right.unwrap_or(""));
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const MODES: [(&str, DiffMode); 2] = [
    ("positional", DiffMode::Positional),
    ("myers", DiffMode::Myers),
];

const VIEWS: [(&str, bool); 2] = [("inline", false), ("side-by-side", true)];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let (Ok(left), Ok(right)) = (
        input.require_text("text in both fields to compare"),
        input.require_other("text in both fields to compare"),
    ) else {
        return Err(Error::EmptyInput {
            what: "text in both fields to compare",
        });
    };
    let options = DiffOptions {
        case_sensitive: input.flag("case_sensitive", true)?,
        ignore_whitespace: input.flag("ignore_whitespace", false)?,
        mode: input.choice("mode", DiffMode::Positional, &MODES)?,
    };
    let side = input.choice("view", false, &VIEWS)?;

    let lines = compare(left, right, &options);
    let added = lines.iter().filter(|l| matches!(l, DiffLine::Added(_))).count();
    let removed = lines.iter().filter(|l| matches!(l, DiffLine::Removed(_))).count();
    tracing::debug!(added, removed, "Compared texts");

    let text = if side {
        render_columns(&side_by_side(&lines))
    } else {
        lines.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    };
    Ok(ToolOutput::new(text).with_notice(format!(
        "Comparison completed: {added} added, {removed} removed"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(lines: &[DiffLine]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_positional_diff() {
        let lines = compare("a\nb\nc", "a\nx\nc\nd", &DiffOptions::default());
        assert_eq!(render(&lines), vec!["  a", "- b", "+ x", "  c", "+ d"]);
    }

    #[test]
    fn test_positional_insertion_shifts_lines() {
        let lines = compare("a\nb", "new\na\nb", &DiffOptions::default());
        assert_eq!(render(&lines), vec!["- a", "+ new", "- b", "+ a", "+ b"]);
    }

    #[test]
    fn test_myers_aligns_insertion() {
        let options = DiffOptions {
            mode: DiffMode::Myers,
            ..DiffOptions::default()
        };
        let lines = compare("a\nb", "new\na\nb", &options);
        assert_eq!(render(&lines), vec!["+ new", "  a", "  b"]);
    }

    #[test]
    fn test_case_and_whitespace_options() {
        let options = DiffOptions {
            case_sensitive: false,
            ignore_whitespace: true,
            ..DiffOptions::default()
        };
        let lines = compare("Hello   World ", "hello world", &options);
        assert_eq!(lines, vec![DiffLine::Same("hello world".to_string())]);
    }

    #[test]
    fn test_side_by_side_pairs_changes() {
        let lines = compare("a\nb\nc", "a\nx", &DiffOptions::default());
        assert_eq!(
            side_by_side(&lines),
            vec![
                (Some("a"), Some("a")),
                (Some("b"), Some("x")),
                (Some("c"), None),
            ]
        );
    }

    #[test]
    fn test_run_requires_both_sides() {
        assert!(run(&ToolInput::new("a")).is_err());
        assert!(run(&ToolInput::new(" ").with_other("b")).is_err());
    }

    #[test]
    fn test_run_side_by_side_view() {
        let input = ToolInput::new("one\ntwo")
            .with_other("one\n2")
            .with_option("view", "side-by-side");
        let out = run(&input).unwrap();
        insta::assert_snapshot!(out.text, @r"
        one | one
        two | 2
        ");
        assert_eq!(out.notice.as_deref(), Some("Comparison completed: 1 added, 1 removed"));
    }
}
