//! Lorem ipsum placeholder text

use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
    "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "ut", "aliquip", "ex", "ea", "commodo", "consequat",
    "duis", "aute", "irure", "dolor", "in", "reprehenderit", "voluptate", "velit",
    "esse", "cillum", "dolore", "eu", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "in", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "sed", "perspiciatis",
    "unde", "omnis", "iste", "natus", "error", "voluptatem", "accusantium", "doloremque",
    "laudantium", "totam", "rem", "aperiam", "eaque", "ipsa", "quae", "ab", "illo",
    "inventore", "veritatis", "quasi", "architecto", "beatae", "vitae", "dicta", "explicabo",
];

const CLASSIC_OPENING: &str = "Lorem ipsum dolor sit amet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoremKind {
    Paragraphs,
    Sentences,
    Words,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoremOptions {
    pub kind: LoremKind,
    pub amount: usize,
    pub words_per_sentence: RangeInclusive<usize>,
    pub sentences_per_paragraph: RangeInclusive<usize>,
    pub start_with_lorem: bool,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            kind: LoremKind::Paragraphs,
            amount: 3,
            words_per_sentence: 5..=15,
            sentences_per_paragraph: 3..=7,
            start_with_lorem: true,
        }
    }
}

fn random_word(rng: &mut impl Rng) -> &'static str {
    LOREM_WORDS[rng.random_range(0..LOREM_WORDS.len())]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sentence(rng: &mut impl Rng, options: &LoremOptions, first: bool) -> String {
    let count = rng.random_range(options.words_per_sentence.clone());
    let words: Vec<&str> = (0..count).map(|_| random_word(rng)).collect();
    if first && options.start_with_lorem {
        return CLASSIC_OPENING.to_string();
    }
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

fn paragraph(rng: &mut impl Rng, options: &LoremOptions, first: bool) -> String {
    let count = rng.random_range(options.sentences_per_paragraph.clone());
    (0..count)
        .map(|i| sentence(rng, options, first && i == 0))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate placeholder text. Ranges must be non-empty and `amount` positive.
pub fn generate(rng: &mut impl Rng, options: &LoremOptions) -> String {
    match options.kind {
        LoremKind::Paragraphs => (0..options.amount)
            .map(|i| paragraph(rng, options, i == 0))
            .collect::<Vec<_>>()
            .join("\n\n"),
        LoremKind::Sentences => (0..options.amount)
            .map(|i| sentence(rng, options, i == 0))
            .collect::<Vec<_>>()
            .join(" "),
        LoremKind::Words => {
            let mut words: Vec<String> =
                (0..options.amount).map(|_| random_word(rng).to_string()).collect();
            if options.start_with_lorem && words.len() >= 2 {
                words[0] = "Lorem".to_string();
                words[1] = "ipsum".to_string();
            }
            if let Some(first) = words.first_mut() {
                *first = capitalize(first);
            }
            words.join(" ")
        }
    }
}

const KINDS: [(&str, LoremKind); 3] = [
    ("paragraphs", LoremKind::Paragraphs),
    ("sentences", LoremKind::Sentences),
    ("words", LoremKind::Words),
];

fn bounds(
    input: &ToolInput,
    prefix: &str,
    default: RangeInclusive<usize>,
) -> Result<RangeInclusive<usize>> {
    let min = input.number(&format!("min_{prefix}"), *default.start(), 1..=100)?;
    let max = input.number(&format!("max_{prefix}"), *default.end(), 1..=100)?;
    if min > max {
        return Err(Error::invalid(
            format!("min_{prefix}"),
            min.to_string(),
            format!("at most max_{prefix} ({max})"),
        ));
    }
    Ok(min..=max)
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let defaults = LoremOptions::default();
    let options = LoremOptions {
        kind: input.choice("kind", defaults.kind, &KINDS)?,
        amount: input.number("amount", defaults.amount, 1..=100)?,
        words_per_sentence: bounds(input, "words", defaults.words_per_sentence)?,
        sentences_per_paragraph: bounds(input, "sentences", defaults.sentences_per_paragraph)?,
        start_with_lorem: input.flag("start_with_lorem", defaults.start_with_lorem)?,
    };
    let text = generate(&mut rand::rng(), &options);
    Ok(ToolOutput::new(text).with_notice("Lorem Ipsum generated successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_paragraphs_start_with_classic_opening() {
        let text = generate(&mut rng(), &LoremOptions::default());
        assert!(text.starts_with("Lorem ipsum dolor sit amet. "));
        assert_eq!(text.split("\n\n").count(), 3);
    }

    #[test]
    fn test_sentence_word_bounds() {
        let options = LoremOptions {
            kind: LoremKind::Sentences,
            amount: 20,
            words_per_sentence: 4..=6,
            start_with_lorem: false,
            ..LoremOptions::default()
        };
        let text = generate(&mut rng(), &options);
        let sentences: Vec<&str> = text.split(". ").collect();
        assert_eq!(sentences.len(), 20);
        for s in sentences {
            let words = s.trim_end_matches('.').split(' ').count();
            assert!((4..=6).contains(&words), "{s}");
            assert!(s.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_words_mode() {
        let options = LoremOptions {
            kind: LoremKind::Words,
            amount: 10,
            ..LoremOptions::default()
        };
        let text = generate(&mut rng(), &options);
        let words: Vec<&str> = text.split(' ').collect();
        assert_eq!(words.len(), 10);
        assert_eq!(&words[..2], &["Lorem", "ipsum"]);
    }

    #[test]
    fn test_single_word_is_capitalized() {
        let options = LoremOptions {
            kind: LoremKind::Words,
            amount: 1,
            ..LoremOptions::default()
        };
        let text = generate(&mut rng(), &options);
        assert!(text.chars().next().unwrap().is_uppercase());
        assert!(!text.contains(' '));
    }

    #[test]
    fn test_same_seed_same_text() {
        let options = LoremOptions::default();
        assert_eq!(generate(&mut rng(), &options), generate(&mut rng(), &options));
    }

    #[test]
    fn test_run_rejects_inverted_bounds() {
        let input = ToolInput::new("")
            .with_option("min_words", "9")
            .with_option("max_words", "3");
        assert!(run(&input).is_err());
    }

    #[test]
    fn test_run_rejects_zero_amount() {
        assert!(run(&ToolInput::new("").with_option("amount", "0")).is_err());
    }
}
