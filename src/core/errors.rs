//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dqscope operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid chart geometry input (zero axes, non-positive level count)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Report serialization errors
    #[error("Report error: {0}")]
    Report(String),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn file_system(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path,
            source: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("dimension count must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input: dimension count must be at least 1"
        );
    }

    #[test]
    fn test_file_system_display() {
        let err = Error::file_system("cannot stat file", Some(PathBuf::from("data.csv")));
        assert!(err.to_string().contains("cannot stat file"));
    }
}
