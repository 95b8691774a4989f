//! HTML entity encoding

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput};

/// Escape the characters that are unsafe in HTML text and attributes.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode named and numeric entities.
pub fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

const DIRECTIONS: [(&str, bool); 2] = [("encode", true), ("decode", false)];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    if input.choice("direction", true, &DIRECTIONS)? {
        let text = input.require_text("text to encode")?;
        Ok(ToolOutput::new(encode(text)).with_notice("Text encoded successfully"))
    } else {
        let text = input.require_text("text to decode")?;
        Ok(ToolOutput::new(decode(text)).with_notice("Text decoded successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_special_characters() {
        assert_eq!(
            encode(r#"<a href="/x">Tom & 'Jerry'</a> `=`"#),
            "&lt;a href&#x3D;&quot;&#x2F;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;&#x2F;a&gt; &#x60;&#x3D;&#x60;"
        );
    }

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(decode("&lt;p&gt; &copy; &#169; &#x3D;"), "<p> © © =");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let text = "if (a < b && c > \"d\") { e = 'f'; } // `g`";
        assert_eq!(decode(&encode(text)), text);
    }

    #[test]
    fn test_run_direction() {
        let out = run(&ToolInput::new("&amp;").with_option("direction", "decode")).unwrap();
        assert_eq!(out.text, "&");
        let out = run(&ToolInput::new("&")).unwrap();
        assert_eq!(out.text, "&amp;");
    }
}
