//! Error types for tooltopia-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Primary input was blank; `what` completes "Please enter some ..."
    #[error("Please enter some {what}")]
    EmptyInput { what: &'static str },

    #[error("Invalid value '{value}' for option '{name}' (expected {expected})")]
    InvalidOption {
        name: String,
        value: String,
        expected: String,
    },

    #[error("Option '{name}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Missing required option '{name}'")]
    MissingOption { name: String },

    #[error("Please include at least one character type")]
    NoCharacterClass,

    #[error("Could not decode {what}: {message}")]
    Decode { what: &'static str, message: String },

    #[error("Could not encode QR code: {message}")]
    QrEncode { message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("{tool} is currently under development")]
    Unavailable { tool: String },
}

impl Error {
    pub(crate) fn invalid(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub(crate) fn decode(what: &'static str, message: impl ToString) -> Self {
        Self::Decode {
            what,
            message: message.to_string(),
        }
    }
}
