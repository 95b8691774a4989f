//! Developer tools

pub mod json;
pub mod jwt;
pub mod regex_tester;
pub mod yaml;
