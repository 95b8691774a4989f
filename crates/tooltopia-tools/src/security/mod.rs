//! Security tools

pub mod encoding;
pub mod hash;
pub mod password;
pub mod uuid;
