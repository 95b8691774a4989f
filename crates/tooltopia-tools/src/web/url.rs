//! URL component encoding

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

pub fn decode(text: &str) -> Result<String> {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::decode("URL", e))
}

const DIRECTIONS: [(&str, bool); 2] = [("encode", true), ("decode", false)];

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    if input.choice("direction", true, &DIRECTIONS)? {
        let text = input.require_text("text to encode")?;
        Ok(ToolOutput::new(encode(text)).with_notice("URL encoded successfully"))
    } else {
        let text = input.require_text("text to decode")?;
        Ok(ToolOutput::new(decode(text)?).with_notice("URL decoded successfully"))
    }
}
