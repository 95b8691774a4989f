//! Input/output panel shared by every tool
//!
//! A tool page is an input panel, a button and an output panel. Here that
//! is [`ToolInput`] → [`Transform::run`] → [`ToolOutput`]. Options arrive as
//! strings (the way form fields do) and each tool parses the ones it knows.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Everything a tool page collects before the user presses the button.
#[derive(Debug, Clone, Default)]
pub struct ToolInput {
    /// Main text area
    pub text: String,
    /// Second text area, for tools that compare two inputs
    pub other: Option<String>,
    /// Form controls keyed by name
    pub options: BTreeMap<String, String>,
    /// Option names a tool has looked up
    read: RefCell<BTreeSet<String>>,
}

impl PartialEq for ToolInput {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.other == other.other && self.options == other.options
    }
}

impl Eq for ToolInput {}

impl ToolInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the second text area (builder pattern).
    pub fn with_other(mut self, other: impl Into<String>) -> Self {
        self.other = Some(other.into());
        self
    }

    /// Set a form control (builder pattern).
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// The main text, or [`Error::EmptyInput`] when it is blank.
    pub fn require_text(&self, what: &'static str) -> Result<&str> {
        if self.text.trim().is_empty() {
            return Err(Error::EmptyInput { what });
        }
        Ok(&self.text)
    }

    /// The second text, or [`Error::EmptyInput`] when missing or blank.
    pub fn require_other(&self, what: &'static str) -> Result<&str> {
        match self.other.as_deref() {
            Some(other) if !other.trim().is_empty() => Ok(other),
            _ => Err(Error::EmptyInput { what }),
        }
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.read.borrow_mut().insert(name.to_string());
        self.options.get(name).map(String::as_str)
    }

    /// Supplied options no lookup has asked for so far.
    pub fn unread_options(&self) -> Vec<&str> {
        let read = self.read.borrow();
        self.options
            .keys()
            .filter(|key| !read.contains(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// A required free-form option.
    pub fn require_option(&self, name: &str) -> Result<&str> {
        self.option(name).ok_or_else(|| Error::MissingOption {
            name: name.to_string(),
        })
    }

    /// A checkbox. Accepts true/false, yes/no, on/off and 1/0.
    pub fn flag(&self, name: &str, default: bool) -> Result<bool> {
        match self.option(name) {
            None => Ok(default),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(Error::invalid(name, raw, "true or false")),
            },
        }
    }

    /// A numeric field constrained to `range`.
    pub fn number<T>(&self, name: &str, default: T, range: RangeInclusive<T>) -> Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        let value = match self.option(name) {
            None => default,
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|_| Error::invalid(name, raw, "a number"))?,
        };
        if !range.contains(&value) {
            return Err(Error::OutOfRange {
                name: name.to_string(),
                value: value.to_string(),
                min: range.start().to_string(),
                max: range.end().to_string(),
            });
        }
        Ok(value)
    }

    /// A radio group: `value` must be one of the names in `choices`.
    pub fn choice<T: Copy>(&self, name: &str, default: T, choices: &[(&str, T)]) -> Result<T> {
        let Some(raw) = self.option(name) else {
            return Ok(default);
        };
        let wanted = raw.trim().to_ascii_lowercase();
        choices
            .iter()
            .find(|(key, _)| *key == wanted)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                let expected: Vec<&str> = choices.iter().map(|(key, _)| *key).collect();
                Error::invalid(name, raw, format!("one of {}", expected.join(", ")))
            })
    }
}

/// What the output panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    /// Short status line (the toast after a successful run)
    pub notice: Option<String>,
}

impl ToolOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// A runnable tool.
pub trait Transform: Send + Sync {
    /// Catalog id of the tool (e.g., "css-minifier")
    fn id(&self) -> &'static str;

    /// Turn the input panel into the output panel.
    fn run(&self, input: &ToolInput) -> Result<ToolOutput>;
}

/// Transform backed by a plain function.
#[derive(Clone, Copy)]
pub struct FnTransform {
    id: &'static str,
    run: fn(&ToolInput) -> Result<ToolOutput>,
}

impl FnTransform {
    pub const fn new(id: &'static str, run: fn(&ToolInput) -> Result<ToolOutput>) -> Self {
        Self { id, run }
    }
}

impl Transform for FnTransform {
    fn id(&self) -> &'static str {
        self.id
    }

    fn run(&self, input: &ToolInput) -> Result<ToolOutput> {
        (self.run)(input)
    }
}

impl std::fmt::Debug for FnTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransform").field("id", &self.id).finish()
    }
}

/// Size reduction of `after` relative to `before`, as a percentage string.
pub(crate) fn reduction_percent(before: &str, after: &str) -> String {
    if before.is_empty() {
        return "0.00".to_string();
    }
    let saved = before.len() as f64 - after.len() as f64;
    format!("{:.2}", saved / before.len() as f64 * 100.0)
}
