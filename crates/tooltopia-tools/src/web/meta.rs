//! HTML `<head>` meta tag generation

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

pub const DEFAULT_ROBOTS: &str = "index, follow";
pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub keywords: Option<&'a str>,
    pub author: Option<&'a str>,
    pub robots: &'a str,
    pub viewport: &'a str,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            keywords: None,
            author: None,
            robots: DEFAULT_ROBOTS,
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

fn named(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{name}" content="{}">"#,
        encode_double_quoted_attribute(content)
    )
}

fn property(name: &str, content: &str) -> String {
    format!(
        r#"<meta property="{name}" content="{}">"#,
        encode_double_quoted_attribute(content)
    )
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Render the tags, one per line. Blank optional fields are skipped.
pub fn render(meta: &PageMeta<'_>) -> String {
    let title = meta.title.trim();

    let mut tags = vec![
        r#"<meta charset="UTF-8">"#.to_string(),
        named("viewport", meta.viewport),
        format!("<title>{}</title>", encode_text(title)),
    ];
    if let Some(description) = present(meta.description) {
        tags.push(named("description", description));
    }
    if let Some(keywords) = present(meta.keywords) {
        tags.push(named("keywords", keywords));
    }
    if let Some(author) = present(meta.author) {
        tags.push(named("author", author));
    }
    tags.push(named("robots", meta.robots));
    tags.push(property("og:title", title));
    if let Some(description) = present(meta.description) {
        tags.push(property("og:description", description));
    }
    tags.join("\n")
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let title = input.require_text("page title")?;
    let meta = PageMeta {
        description: input.option("description"),
        keywords: input.option("keywords"),
        author: input.option("author"),
        robots: input.option("robots").unwrap_or(DEFAULT_ROBOTS),
        viewport: input.option("viewport").unwrap_or(DEFAULT_VIEWPORT),
        ..PageMeta::new(title)
    };
    Ok(ToolOutput::new(render(&meta)).with_notice("Meta tags generated successfully"))
}
