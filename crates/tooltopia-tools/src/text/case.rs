//! Text case conversion
//!
//! Word classes are ASCII (`[A-Za-z0-9_]`); other characters are only
//! affected by the initial lower-casing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

static SENTENCE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^\s*[A-Za-z0-9_]|[.!?]\s*[A-Za-z0-9_])").expect("Invalid sentence regex")
});
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+(.)").expect("Invalid camel regex"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_])([A-Za-z0-9_]*)").expect("Invalid word regex"));
static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("Invalid alnum regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
static NON_SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("Invalid snake regex"));
static NON_KEBAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9-]").expect("Invalid kebab regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl Case {
    pub const CHOICES: [(&'static str, Case); 8] = [
        ("lowercase", Case::Lower),
        ("uppercase", Case::Upper),
        ("titlecase", Case::Title),
        ("sentencecase", Case::Sentence),
        ("camelcase", Case::Camel),
        ("pascalcase", Case::Pascal),
        ("snakecase", Case::Snake),
        ("kebabcase", Case::Kebab),
    ];
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `text` to `case`.
pub fn convert(text: &str, case: Case) -> String {
    let lower = text.to_lowercase();
    match case {
        Case::Lower => lower,
        Case::Upper => text.to_uppercase(),
        Case::Title => lower.split(' ').map(capitalize).collect::<Vec<_>>().join(" "),
        Case::Sentence => SENTENCE_START
            .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
            .into_owned(),
        Case::Camel => CAMEL_BOUNDARY
            .replace_all(&lower, |caps: &Captures| caps[1].to_uppercase())
            .into_owned(),
        Case::Pascal => {
            let capitalized =
                WORD.replace_all(&lower, |caps: &Captures| {
                    format!("{}{}", caps[1].to_uppercase(), &caps[2])
                });
            NON_ALNUM.replace_all(&capitalized, "").into_owned()
        }
        Case::Snake => {
            let joined = WHITESPACE.replace_all(&lower, "_");
            NON_SNAKE.replace_all(&joined, "").into_owned()
        }
        Case::Kebab => {
            let joined = WHITESPACE.replace_all(&lower, "-");
            NON_KEBAB.replace_all(&joined, "").into_owned()
        }
    }
}

/// Panel adapter. Option: `case` (default `lowercase`).
pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to convert")?;
    let case = input.choice("case", Case::Lower, &Case::CHOICES)?;
    Ok(ToolOutput::new(convert(text, case)).with_notice("Text converted successfully"))
}
