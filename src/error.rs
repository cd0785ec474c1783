//! Error types for email normalization

use thiserror::Error;

/// Errors that can occur while building the pattern library or parsing a message
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode email content
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Malformed row in the emoji data table
    #[error("Invalid emoji data at line {line}: {details}")]
    EmojiData { line: usize, details: String },

    /// A locale pattern table did not compile
    #[error("Invalid pattern table for {concern}: {source}")]
    InvalidPattern {
        concern: &'static str,
        source: regex::Error,
    },

    /// A configured CSS selector did not parse
    #[error("Invalid CSS selector: {0:?}")]
    InvalidSelector(String),

    /// Configuration or output record JSON failed to (de)serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for normalization operations
pub type Result<T> = std::result::Result<T, NormalizeError>;
