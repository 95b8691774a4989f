//! URL slug generation

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

/// Common English words dropped when stop-word removal is on
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being",
    "in", "on", "at", "to", "for", "with", "by", "about", "of", "from", "as", "into", "through",
    "during", "before", "after", "above", "below", "under", "over", "between", "among", "this",
    "that", "these", "those", "my", "your", "his", "her", "its", "our", "their", "which", "who",
    "whom", "whose", "what", "why", "when", "where", "how", "all", "any", "both", "each", "few",
    "more", "most", "some", "such", "no", "not", "only", "own", "same", "so", "than", "too",
    "very", "can", "will", "just", "should", "now",
];

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("Invalid slug regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    pub separator: char,
    pub lowercase: bool,
    pub remove_stop_words: bool,
    /// Zero means unlimited
    pub max_length: usize,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            lowercase: true,
            remove_stop_words: false,
            max_length: 0,
        }
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Turn free text into a URL slug.
pub fn slugify(text: &str, options: &SlugOptions) -> String {
    let mut slug = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    slug = slug.nfd().filter(|c| !is_combining_mark(*c)).collect();
    slug = slug
        .replace('&', " and ")
        .replace('+', " plus ")
        .replace('@', " at ")
        .replace('#', " hash ");

    if options.remove_stop_words {
        slug = slug
            .split_whitespace()
            .filter(|word| !STOP_WORDS.contains(&word.to_lowercase().as_str()))
            .collect::<Vec<_>>()
            .join(" ");
    }

    // Alphanumeric runs joined by one separator, none at either end
    let sep = options.separator.to_string();
    slug = NON_ALNUM_RUN
        .split(&slug)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(&sep);

    if options.max_length > 0 && slug.len() > options.max_length {
        match slug[..=options.max_length].rfind(options.separator) {
            Some(cut) if cut > 0 => slug.truncate(cut),
            _ => slug.truncate(options.max_length),
        }
    }
    slug
}

const SEPARATORS: [(&str, char); 3] = [("-", '-'), ("_", '_'), (".", '.')];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let text = input.require_text("text to convert")?;
    let options = SlugOptions {
        separator: input.choice("separator", '-', &SEPARATORS)?,
        lowercase: input.flag("lowercase", true)?,
        remove_stop_words: input.flag("remove_stop_words", false)?,
        max_length: input.number("max_length", 0usize, 0..=1000)?,
    };
    let slug = slugify(text, &options);
    if slug.is_empty() {
        return Err(Error::invalid("text", text, "at least one letter or digit"));
    }
    Ok(ToolOutput::new(slug).with_notice("Text converted to slug successfully"))
}
