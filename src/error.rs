//! Error types for pagescout
//!
//! Detection itself never fails: a response the engine cannot make sense of
//! yields a not-found result, not an error. This error type covers the
//! tooling around detection (loading response bodies, parsing JSON, parsing
//! path strings from the command line).

use thiserror::Error;

/// The main error type for pagescout
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid tooling configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// A path string could not be parsed
    #[error("Invalid path '{path}': {message}")]
    InvalidPath {
        /// The offending path string
        path: String,
        /// What was wrong with it
        message: String,
    },

    /// A response body was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Reading a response body from disk or stdin failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The named input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The missing path
        path: String,
    },

    /// Anything else
    #[error("{0}")]
    Other(String),

    /// Wrapped anyhow error
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

/// Result type alias for pagescout
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_path("a..b", "empty segment");
        assert_eq!(err.to_string(), "Invalid path 'a..b': empty segment");

        let err = Error::file_not_found("response.json");
        assert_eq!(err.to_string(), "File not found: response.json");
    }

    #[test]
    fn test_json_parse_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }
}
