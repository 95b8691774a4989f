//! Web tools

pub mod color;
pub mod entities;
pub mod meta;
pub mod minify;
pub mod qr;
pub mod url;
