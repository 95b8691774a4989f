//! Error types for tooltopia-catalog

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Duplicate category id: {id}")]
    DuplicateCategory { id: String },

    #[error("Duplicate tool id: {id}")]
    DuplicateTool { id: String },

    #[error("Tool {tool} references unknown category {category}")]
    UnknownCategory { tool: String, category: String },

    #[error("Invalid route: {path}")]
    InvalidRoute { path: String },
}
