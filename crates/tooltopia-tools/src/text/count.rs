//! Word counter statistics

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

/// Average adult reading speed, in words per minute
pub const WORDS_PER_MINUTE: usize = 225;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"));
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_without_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Minutes, rounded up
    pub reading_time: usize,
}

/// Compute statistics for `text`. Characters are Unicode scalar values.
pub fn analyze(text: &str) -> TextStats {
    let words = text.split_whitespace().count();
    let paragraphs = BLANK_LINE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    TextStats {
        characters: text.chars().count(),
        characters_without_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences: SENTENCE_END
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count(),
        paragraphs: paragraphs.max(1),
        reading_time: words.div_ceil(WORDS_PER_MINUTE),
    }
}

impl std::fmt::Display for TextStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Characters: {}", self.characters)?;
        writeln!(f, "Characters (no spaces): {}", self.characters_without_spaces)?;
        writeln!(f, "Words: {}", self.words)?;
        writeln!(f, "Sentences: {}", self.sentences)?;
        writeln!(f, "Paragraphs: {}", self.paragraphs)?;
        write!(f, "Reading time: {} min", self.reading_time)
    }
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to analyze")?;
    Ok(ToolOutput::new(analyze(text).to_string()).with_notice("Text analyzed successfully"))
}
