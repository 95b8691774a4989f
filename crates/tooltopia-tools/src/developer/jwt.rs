//! JSON Web Token inspection
//!
//! Decodes the header and claims for display. Signatures are shown but
//! never verified, so the output says nothing about authenticity.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

fn decode_segment(segment: &str, what: &'static str) -> Result<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| Error::decode(what, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::decode(what, e))
}

pub fn decode(token: &str) -> Result<DecodedJwt> {
    let token = token.trim();
    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    let parts: Vec<&str> = token.split('.').collect();
    let [header, payload, signature] = parts.as_slice() else {
        return Err(Error::decode(
            "JWT",
            format!("expected 3 dot-separated parts, found {}", parts.len()),
        ));
    };
    Ok(DecodedJwt {
        header: decode_segment(header, "JWT header")?,
        payload: decode_segment(payload, "JWT payload")?,
        signature: signature.to_string(),
    })
}

pub fn run(input: &ToolInput) -> Result<ToolOutput> {
    let token = input.require_text("JWT to decode")?;
    let decoded = decode(token)?;
    let text = format!(
        "Header:\n{}\n\nPayload:\n{}\n\nSignature: {}",
        serde_json::to_string_pretty(&decoded.header)?,
        serde_json::to_string_pretty(&decoded.payload)?,
        decoded.signature,
    );
    Ok(ToolOutput::new(text).with_notice("Token decoded; signature not verified"))
}
