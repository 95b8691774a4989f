//! Message digests and htpasswd entries

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::error::{Error, Result};
use crate::panel::{ToolInput, ToolOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
        }
    }

    /// Lower-case hex digest of the UTF-8 bytes of `text`.
    pub fn hex_digest(self, text: &str) -> String {
        match self {
            Algorithm::Md5 => format!("{:x}", md5::compute(text.as_bytes())),
            Algorithm::Sha1 => format!("{:x}", Sha1::digest(text.as_bytes())),
            Algorithm::Sha256 => format!("{:x}", Sha256::digest(text.as_bytes())),
        }
    }
}

/// Apache `{SHA}` htpasswd line.
pub fn htpasswd_line(user: &str, password: &str) -> String {
    let digest = Sha1::digest(password.as_bytes());
    format!("{user}:{{SHA}}{}", STANDARD.encode(digest))
}

fn run_digest(input: &ToolInput, algorithm: Algorithm) -> Result<ToolOutput> {
    let text = input.require_text("text to hash")?;
    let notice = format!("{} hash generated", algorithm.name());
    Ok(ToolOutput::new(algorithm.hex_digest(text)).with_notice(notice))
}

pub fn run_md5(input: &ToolInput) -> Result<ToolOutput> {
    run_digest(input, Algorithm::Md5)
}

pub fn run_sha1(input: &ToolInput) -> Result<ToolOutput> {
    run_digest(input, Algorithm::Sha1)
}

pub fn run_sha256(input: &ToolInput) -> Result<ToolOutput> {
    run_digest(input, Algorithm::Sha256)
}

/// Main text is the password, `user` option is the user name.
pub fn run_htpasswd(input: &ToolInput) -> Result<ToolOutput> {
    let password = input.require_text("password")?;
    let user = input.require_option("user")?.trim();
    if user.is_empty() || user.contains(':') {
        return Err(Error::invalid("user", user, "a name without ':'"));
    }
    Ok(ToolOutput::new(htpasswd_line(user, password)).with_notice("htpasswd entry generated"))
}
