//! Base64 encoding

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64; surrounding whitespace and line wrapping are
/// ignored, and the bytes must be UTF-8.
pub fn decode(text: &str) -> Result<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| Error::decode("Base64", e))?;
    String::from_utf8(bytes).map_err(|e| Error::decode("Base64", e))
}

const DIRECTIONS: [(&str, bool); 2] = [("encode", true), ("decode", false)];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    if input.choice("direction", true, &DIRECTIONS)? {
        let text = input.require_text("text to encode")?;
        Ok(ToolOutput::new(encode(text)).with_notice("Text encoded successfully"))
    } else {
        let text = input.require_text("Base64 to decode")?;
        Ok(ToolOutput::new(decode(text)?).with_notice("Text decoded successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode("é"), "w6k=");
    }

    #[test]
    fn test_decode_ignores_line_wrapping() {
        assert_eq!(decode("SGVsbG8s\nIFdvcmxkIQ==\n").unwrap(), "Hello, World!");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode("not base64!"), Err(Error::Decode { .. })));
        // 0xFF is not UTF-8
        assert!(matches!(decode("/w=="), Err(Error::Decode { .. })));
    }
}
