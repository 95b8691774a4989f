//! Line and substring editing: find/replace, line-break removal and
//! duplicate-line removal.

use std::collections::HashSet;

use regex::{NoExpand, RegexBuilder};

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// Treat the pattern as a regular expression (replacement may use `$1`)
    pub regex: bool,
    pub case_sensitive: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            regex: false,
            case_sensitive: true,
        }
    }
}

/// Replace every occurrence of `find`. Returns the new text and the
/// number of replacements.
pub fn find_and_replace(
    text: &str,
    find: &str,
    replacement: &str,
    options: FindOptions,
) -> Result<(String, usize)> {
    let pattern = if options.regex {
        find.to_string()
    } else {
        regex::escape(find)
    };
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()?;

    let count = re.find_iter(text).count();
    let replaced = if options.regex {
        re.replace_all(text, replacement)
    } else {
        re.replace_all(text, NoExpand(replacement))
    };
    Ok((replaced.into_owned(), count))
}

/// Join all non-blank lines with `joiner`.
pub fn remove_line_breaks(text: &str, joiner: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Keep the first occurrence of every line. Returns the text and how many
/// lines were dropped.
pub fn remove_duplicate_lines(text: &str, trim: bool, case_sensitive: bool) -> (String, usize) {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut removed = 0;
    for line in text.lines() {
        let line = if trim { line.trim() } else { line };
        let key = if case_sensitive {
            line.to_string()
        } else {
            line.to_lowercase()
        };
        if seen.insert(key) {
            kept.push(line);
        } else {
            removed += 1;
        }
    }
    (kept.join("\n"), removed)
}

pub fn run_find_and_replace(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to search")?;
    let find = input.require_option("find")?;
    if find.is_empty() {
        return Err(Error::invalid("find", find, "a non-empty search term"));
    }
    let options = FindOptions {
        regex: input.flag("regex", false)?,
        case_sensitive: input.flag("case_sensitive", true)?,
    };
    let (out, count) = find_and_replace(text, find, input.option("replace").unwrap_or(""), options)?;
    Ok(ToolOutput::new(out).with_notice(format!("Replaced {count} occurrence(s)")))
}

pub fn run_remove_line_breaks(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to process")?;
    let joiner = input.option("joiner").unwrap_or(" ");
    Ok(ToolOutput::new(remove_line_breaks(text, joiner)).with_notice("Line breaks removed"))
}

pub fn run_remove_duplicate_lines(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to process")?;
    let (out, removed) = remove_duplicate_lines(
        text,
        input.flag("trim", false)?,
        input.flag("case_sensitive", true)?,
    );
    Ok(ToolOutput::new(out).with_notice(format!("Removed {removed} duplicate line(s)")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_literal_replace_escapes_pattern() {
        let (out, count) =
            find_and_replace("a.b a.b axb", "a.b", "$1", FindOptions::default()).unwrap();
        assert_eq!(out, "$1 $1 axb");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_regex_replace_with_groups() {
        let options = FindOptions {
            regex: true,
            ..FindOptions::default()
        };
        let (out, count) =
            find_and_replace("2024-01-31", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1", options).unwrap();
        assert_eq!(out, "31/01/2024");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_case_insensitive_replace() {
        let options = FindOptions {
            case_sensitive: false,
            ..FindOptions::default()
        };
        let (out, count) = find_and_replace("Cat cat CAT", "cat", "dog", options).unwrap();
        assert_eq!(out, "dog dog dog");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        let options = FindOptions {
            regex: true,
            ..FindOptions::default()
        };
        assert!(matches!(
            find_and_replace("x", "(", "", options),
            Err(Error::Regex(_))
        ));
    }

    #[rstest]
    #[case("one\ntwo\n\n\nthree", " ", "one two three")]
    #[case("  one  \r\ntwo", ", ", "one, two")]
    fn test_remove_line_breaks(#[case] input: &str, #[case] joiner: &str, #[case] expected: &str) {
        assert_eq!(remove_line_breaks(input, joiner), expected);
    }

    #[rstest]
    #[case("a\nb\na\nc\nb", false, true, "a\nb\nc", 2)]
    #[case("a\nA\n a", false, true, "a\nA\n a", 0)]
    #[case("a\nA\n a", true, false, "a", 2)]
    fn test_remove_duplicate_lines(
        #[case] input: &str,
        #[case] trim: bool,
        #[case] case_sensitive: bool,
        #[case] expected: &str,
        #[case] removed: usize,
    ) {
        assert_eq!(
            remove_duplicate_lines(input, trim, case_sensitive),
            (expected.to_string(), removed)
        );
    }

    #[test]
    fn test_run_find_and_replace_requires_find() {
        let err = run_find_and_replace(&ToolInput::new("text")).unwrap_err();
        assert!(matches!(err, Error::MissingOption { .. }));
    }

    #[test]
    fn test_run_find_and_replace_notice() {
        let input = ToolInput::new("aaa").with_option("find", "a").with_option("replace", "b");
        let out = run_find_and_replace(&input).unwrap();
        assert_eq!(out.text, "bbb");
        assert_eq!(out.notice.as_deref(), Some("Replaced 3 occurrence(s)"));
    }
}
